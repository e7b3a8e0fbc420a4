//! Core module for catalog data, discovery, and persistence

pub mod config;
pub mod discovery;
pub mod models;
pub mod render;
pub mod session;
pub mod storage;

/// Returns the current version of the `CourseFinder` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
