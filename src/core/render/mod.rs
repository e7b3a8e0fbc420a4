//! Rendering of discovery views for the terminal
//!
//! Provides plain-text course cards and Markdown tables for the results page,
//! the comparison tray, the saved view and the search history.

pub mod markdown;
pub mod text;

pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

use crate::core::discovery::{DiscoveryState, NoticeKind, Selection};
use crate::core::models::{Catalog, Course};
use std::fmt;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFormat {
    /// Human-friendly course cards
    #[default]
    Text,
    /// Markdown tables
    Markdown,
}

impl FromStr for ViewFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "cards" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl fmt::Display for ViewFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data needed to render any view
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    /// Catalog being browsed
    pub catalog: &'a Catalog,
    /// Current discovery state
    pub state: &'a DiscoveryState,
}

impl<'a> ViewContext<'a> {
    /// Create a new view context
    #[must_use]
    pub const fn new(catalog: &'a Catalog, state: &'a DiscoveryState) -> Self {
        Self { catalog, state }
    }

    /// Badges shown next to a course title
    #[must_use]
    pub fn badges(&self, course: &Course) -> Vec<&'static str> {
        let mut badges = Vec::new();
        if course.is_trending() {
            badges.push("trending");
        }
        if self.state.saved().contains(&course.id) {
            badges.push("saved");
        }
        if self.state.compare().contains(&course.id) {
            badges.push("comparing");
        }
        badges
    }

    /// One-line description of the active filters, empty when nothing is filtered
    #[must_use]
    pub fn active_filters(&self) -> String {
        let filter = &self.state.filter;
        let mut parts = Vec::new();
        if !filter.search_term.is_empty() {
            parts.push(format!("search \"{}\"", filter.search_term));
        }
        push_selection(&mut parts, "category", &filter.category);
        push_selection(&mut parts, "duration", &filter.duration);
        push_selection(&mut parts, "format", &filter.format);
        push_selection(&mut parts, "difficulty", &filter.difficulty);
        if filter.price_range != self.state.price_bounds() {
            parts.push(format!(
                "price {}–{}",
                price(filter.price_range.min),
                price(filter.price_range.max)
            ));
        }
        if filter.show_saved_only {
            parts.push("saved only".to_string());
        }
        parts.join(", ")
    }
}

fn push_selection<T: fmt::Display>(parts: &mut Vec<String>, name: &str, selection: &Selection<T>) {
    if !selection.is_all() {
        parts.push(format!("{name} {selection}"));
    }
}

/// Format a price for display
#[must_use]
pub fn price(amount: u32) -> String {
    format!("£{amount}")
}

/// Trait for view renderers
pub trait ViewRenderer {
    /// Current page of results with paging summary
    fn results(&self, ctx: &ViewContext) -> String;

    /// Side-by-side comparison of the courses in the tray
    fn comparison(&self, ctx: &ViewContext) -> String;

    /// Saved courses
    fn saved(&self, ctx: &ViewContext) -> String;

    /// Remembered searches
    fn history(&self, ctx: &ViewContext) -> String;

    /// A single notification
    fn notice(&self, kind: &NoticeKind) -> String;
}

/// Renderer for `format`
#[must_use]
pub fn renderer(format: ViewFormat) -> Box<dyn ViewRenderer> {
    match format {
        ViewFormat::Text => Box::new(TextRenderer::new()),
        ViewFormat::Markdown => Box::new(MarkdownRenderer::new()),
    }
}

/// Rows of the comparison table: attribute label and one value per course
#[must_use]
pub fn comparison_rows(courses: &[&Course]) -> Vec<(&'static str, Vec<String>)> {
    vec![
        row("Price", courses, |c| price(c.price)),
        row("Duration", courses, |c| c.duration.clone()),
        row("Category", courses, |c| c.category.to_string()),
        row("Format", courses, |c| c.format.to_string()),
        row("Difficulty", courses, |c| c.difficulty.to_string()),
        row("Rating", courses, |c| format!("{:.1}", c.rating)),
        row("Students", courses, |c| c.students.to_string()),
    ]
}

fn row(
    label: &'static str,
    courses: &[&Course],
    value: impl Fn(&Course) -> String,
) -> (&'static str, Vec<String>) {
    (label, courses.iter().map(|c| value(c)).collect())
}
