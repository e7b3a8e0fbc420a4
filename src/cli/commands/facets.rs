//! Facets command handler
//!
//! Prints the values each `list` filter accepts for the loaded catalog.

use super::CliSession;
use course_finder::core::discovery::SortKey;
use course_finder::core::models::{Category, Difficulty, Format};
use course_finder::core::render::price;
use std::fmt::Display;

fn line<T: Display>(label: &str, values: impl IntoIterator<Item = T>) {
    let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    println!("{label:<12} All, {}", values.join(", "));
}

/// Print every filter facet
pub fn run(session: &CliSession) {
    let catalog = session.catalog();
    line("Categories", Category::ALL);
    line("Durations", catalog.durations());
    line("Formats", Format::ALL);
    line("Difficulty", Difficulty::ALL);

    let (min, max) = catalog.price_bounds();
    println!("{:<12} {} to {}", "Price", price(min), price(max));
    let sorts: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
    println!("{:<12} {}", "Sort", sorts.join(", "));
}
