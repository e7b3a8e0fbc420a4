//! Data models for `CourseFinder`

pub mod catalog;
pub mod course;

pub use catalog::{Catalog, CatalogError};
pub use course::{Category, Course, Difficulty, Format};
