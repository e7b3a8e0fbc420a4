//! Markdown renderer
//!
//! Renders views as Markdown tables, suitable for pasting into issues or docs.

use super::{comparison_rows, price, ViewContext, ViewRenderer};
use crate::core::discovery::NoticeKind;
use std::fmt::Write;

/// Embedded Markdown results template
const RESULTS_TEMPLATE: &str = include_str!("templates/results.md");

/// Markdown table renderer
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new Markdown renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape characters that would break a table cell
    fn cell(value: &str) -> String {
        value.replace('|', "\\|")
    }
}

/// Substitute `{{name}}` placeholders in one pass
///
/// Substituted text is never rescanned, so values may contain braces.
/// Unknown placeholders are left as they are.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    output.push_str(rest);
    output
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for MarkdownRenderer {
    fn results(&self, ctx: &ViewContext) -> String {
        let page = ctx.state.current_results(ctx.catalog);

        let summary = if page.total_matches == 0 {
            "No courses match your filters".to_string()
        } else {
            format!(
                "{} courses, page {} of {}",
                page.total_matches, page.page, page.total_pages
            )
        };
        let filters = ctx.active_filters();
        let filters = if filters.is_empty() {
            String::new()
        } else {
            format!("Filters: {filters}")
        };

        let mut table = String::new();
        table.push_str("| Id | Title | Category | Format | Difficulty | Duration | Price | Rating |\n");
        table.push_str("|---|---|---|---|---|---|---|---|\n");
        for course in &page.courses {
            let badges = ctx.badges(course);
            let title = if badges.is_empty() {
                Self::cell(&course.title)
            } else {
                format!("{} _({})_", Self::cell(&course.title), badges.join(", "))
            };
            let _ = writeln!(
                table,
                "| `{}` | {title} | {} | {} | {} | {} | {} | {:.1} |",
                course.id,
                course.category,
                course.format,
                course.difficulty,
                Self::cell(&course.duration),
                price(course.price),
                course.rating
            );
        }

        fill(
            RESULTS_TEMPLATE,
            &[
                ("summary", &summary),
                ("sort", ctx.state.sort.as_str()),
                ("filters", &filters),
                ("table", &table),
            ],
        )
    }

    fn comparison(&self, ctx: &ViewContext) -> String {
        let courses = ctx.state.comparison(ctx.catalog);
        if courses.is_empty() {
            return "_No courses selected for comparison._\n".to_string();
        }

        let mut table = String::from("| |");
        for course in &courses {
            let _ = write!(table, " {} |", Self::cell(&course.title));
        }
        table.push_str("\n|---|");
        table.push_str(&"---|".repeat(courses.len()));
        table.push('\n');
        for (label, values) in comparison_rows(&courses) {
            let _ = write!(table, "| **{label}** |");
            for value in values {
                let _ = write!(table, " {} |", Self::cell(&value));
            }
            table.push('\n');
        }
        table
    }

    fn saved(&self, ctx: &ViewContext) -> String {
        let courses = ctx.state.saved_courses(ctx.catalog);
        if courses.is_empty() {
            return "_You haven't saved any courses yet._\n".to_string();
        }
        let mut out = String::from("## Saved courses\n\n");
        for course in courses {
            let _ = writeln!(
                out,
                "- `{}` {} ({}, {})",
                course.id,
                course.title,
                price(course.price),
                course.duration
            );
        }
        out
    }

    fn history(&self, ctx: &ViewContext) -> String {
        let terms = ctx.state.history().terms();
        if terms.is_empty() {
            return "_No recent searches._\n".to_string();
        }
        let mut out = String::from("## Recent searches\n\n");
        for (i, term) in terms.iter().enumerate() {
            let _ = writeln!(out, "{}. {term}", i + 1);
        }
        out
    }

    fn notice(&self, kind: &NoticeKind) -> String {
        format!("> {kind}")
    }
}
