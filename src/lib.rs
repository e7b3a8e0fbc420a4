//! Shared library for `CourseFinder`
//! Contains the course catalog model, the discovery engine, and persistence used by the CLI

pub mod core;
pub mod logger;

pub use core::{config, get_version};
