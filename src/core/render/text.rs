//! Plain-text renderer
//!
//! Renders each course as a small card, the way the catalog page lays them out.

use super::{comparison_rows, price, ViewContext, ViewRenderer};
use crate::core::discovery::NoticeKind;
use crate::core::models::Course;
use std::fmt::Write;

/// Card-style renderer for terminals
pub struct TextRenderer;

impl TextRenderer {
    /// Create a new text renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn card(out: &mut String, ctx: &ViewContext, course: &Course) {
        let badges = ctx.badges(course);
        let badges = if badges.is_empty() {
            String::new()
        } else {
            format!("  ({})", badges.join(", "))
        };
        let _ = writeln!(out, "[{}] {}{badges}", course.id, course.title);
        let _ = writeln!(
            out,
            "    {} · {} · {} · {}",
            course.category, course.format, course.difficulty, course.duration
        );
        let _ = writeln!(
            out,
            "    {} · ★ {:.1} · {} students",
            price(course.price),
            course.rating,
            course.students
        );
        if !course.description.is_empty() {
            let _ = writeln!(out, "    {}", course.description);
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for TextRenderer {
    fn results(&self, ctx: &ViewContext) -> String {
        let page = ctx.state.current_results(ctx.catalog);
        let mut out = String::new();

        if page.courses.is_empty() {
            out.push_str("No courses match your filters.\n");
        } else {
            let size = ctx.state.settings().page_size;
            let first = (page.page - 1) * size + 1;
            let last = first + page.courses.len() - 1;
            let _ = writeln!(
                out,
                "Showing {first}–{last} of {} courses · page {} of {} · sorted by {}",
                page.total_matches, page.page, page.total_pages, ctx.state.sort
            );
        }

        let filters = ctx.active_filters();
        if !filters.is_empty() {
            let _ = writeln!(out, "Filters: {filters}");
        }

        for course in &page.courses {
            out.push('\n');
            Self::card(&mut out, ctx, course);
        }

        let tray = ctx.state.compare();
        if !tray.is_empty() {
            let _ = writeln!(
                out,
                "\nComparing {}/{}: {}",
                tray.len(),
                tray.limit(),
                tray.ids().join(", ")
            );
        }
        out
    }

    fn comparison(&self, ctx: &ViewContext) -> String {
        let courses = ctx.state.comparison(ctx.catalog);
        if courses.is_empty() {
            return "No courses selected for comparison.\n".to_string();
        }

        let rows = comparison_rows(&courses);
        let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let col_width = courses
            .iter()
            .map(|c| c.title.chars().count())
            .chain(rows.iter().flat_map(|(_, v)| v.iter().map(|s| s.chars().count())))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = write!(out, "{:label_width$}", "");
        for course in &courses {
            let _ = write!(out, " | {:col_width$}", course.title);
        }
        out.push('\n');
        for (label, values) in &rows {
            let _ = write!(out, "{label:label_width$}");
            for value in values {
                let _ = write!(out, " | {value:col_width$}");
            }
            out.push('\n');
        }
        out
    }

    fn saved(&self, ctx: &ViewContext) -> String {
        let courses = ctx.state.saved_courses(ctx.catalog);
        if courses.is_empty() {
            return "You haven't saved any courses yet.\n".to_string();
        }
        let mut out = String::new();
        let _ = writeln!(out, "Saved courses ({}):", courses.len());
        for course in courses {
            out.push('\n');
            Self::card(&mut out, ctx, course);
        }
        out
    }

    fn history(&self, ctx: &ViewContext) -> String {
        let terms = ctx.state.history().terms();
        if terms.is_empty() {
            return "No recent searches.\n".to_string();
        }
        let mut out = String::from("Recent searches:\n");
        for (i, term) in terms.iter().enumerate() {
            let _ = writeln!(out, "  {}. {term}", i + 1);
        }
        out
    }

    fn notice(&self, kind: &NoticeKind) -> String {
        match kind {
            NoticeKind::Saved { .. } => format!("✓ {kind}"),
            NoticeKind::CompareLimit { .. } | NoticeKind::UnknownCourse { .. } => {
                format!("✗ {kind}")
            }
        }
    }
}
