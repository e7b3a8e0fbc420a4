//! Conjunctive course filter

use super::saved::SavedCourses;
use crate::core::models::{Category, Course, Difficulty, Format};
use std::fmt;
use std::str::FromStr;

/// A filter dimension: either unconstrained or pinned to one value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    /// No constraint
    #[default]
    All,
    /// Only courses with this value match
    Only(T),
}

impl<T> Selection<T> {
    /// Whether this selection leaves the dimension unconstrained
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    /// `"All"` (any case) parses to [`Selection::All`]; anything else goes through `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// Inclusive price window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    /// Lowest accepted price
    pub min: u32,
    /// Highest accepted price
    pub max: u32,
}

impl PriceRange {
    /// Build a range, swapping the bounds if they are reversed
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Whether `price` lies within the range, bounds included
    #[must_use]
    pub const fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }

    /// Whether the two ranges share at least one price
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Restrict this range to its overlap with `outer`
    ///
    /// A range disjoint from `outer` is returned unchanged, so it still
    /// matches nothing inside `outer`.
    #[must_use]
    pub fn clamp_to(self, outer: Self) -> Self {
        if !self.overlaps(&outer) {
            return self;
        }
        Self::new(
            self.min.clamp(outer.min, outer.max),
            self.max.clamp(outer.min, outer.max),
        )
    }
}

impl From<(u32, u32)> for PriceRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self::new(min, max)
    }
}

/// The full set of user-selected constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive text matched against title and description
    pub search_term: String,
    /// Category constraint
    pub category: Selection<Category>,
    /// Duration constraint, exact string match
    pub duration: Selection<String>,
    /// Format constraint
    pub format: Selection<Format>,
    /// Difficulty constraint
    pub difficulty: Selection<Difficulty>,
    /// Inclusive price window
    pub price_range: PriceRange,
    /// Restrict results to saved courses
    pub show_saved_only: bool,
}

impl FilterState {
    /// Unconstrained filter spanning the given price bounds
    #[must_use]
    pub fn new(price_bounds: PriceRange) -> Self {
        Self {
            search_term: String::new(),
            category: Selection::All,
            duration: Selection::All,
            format: Selection::All,
            difficulty: Selection::All,
            price_range: price_bounds,
            show_saved_only: false,
        }
    }
}

/// Decide whether a course passes every active constraint
#[must_use]
pub fn matches(course: &Course, filter: &FilterState, saved: &SavedCourses) -> bool {
    matches_search(course, &filter.search_term)
        && filter.category.accepts(&course.category)
        && filter.duration.accepts(&course.duration)
        && filter.format.accepts(&course.format)
        && filter.difficulty.accepts(&course.difficulty)
        && filter.price_range.contains(course.price)
        && (!filter.show_saved_only || saved.contains(&course.id))
}

fn matches_search(course: &Course, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    course.title.to_lowercase().contains(&needle)
        || course.description.to_lowercase().contains(&needle)
}

/// All courses passing the filter, in input order
pub fn filter_courses<'a, I>(courses: I, filter: &FilterState, saved: &SavedCourses) -> Vec<&'a Course>
where
    I: IntoIterator<Item = &'a Course>,
{
    courses
        .into_iter()
        .filter(|course| matches(course, filter, saved))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        let mut course = Course::new("web-dev", "Full-Stack Web Development", 3000, "6 Months");
        course.description = "Build modern web apps with Rust and TypeScript".to_string();
        course.category = Category::Technology;
        course.format = Format::Hybrid;
        course.difficulty = Difficulty::Intermediate;
        course
    }

    fn open_filter() -> FilterState {
        FilterState::new(PriceRange::new(0, 10_000))
    }

    #[test]
    fn test_open_filter_matches_everything() {
        assert!(matches(&course(), &open_filter(), &SavedCourses::default()));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let saved = SavedCourses::default();
        let mut filter = open_filter();

        filter.search_term = "WEB".to_string();
        assert!(matches(&course(), &filter, &saved));

        filter.search_term = "typescript".to_string();
        assert!(matches(&course(), &filter, &saved));

        filter.search_term = "python".to_string();
        assert!(!matches(&course(), &filter, &saved));
    }

    #[test]
    fn test_each_violated_constraint_excludes() {
        let saved = SavedCourses::default();
        let base = open_filter();

        let mut f = base.clone();
        f.category = Selection::Only(Category::Siyb);
        assert!(!matches(&course(), &f, &saved));

        let mut f = base.clone();
        f.duration = Selection::Only("6 months".to_string());
        assert!(!matches(&course(), &f, &saved), "duration is exact match");

        let mut f = base.clone();
        f.format = Selection::Only(Format::Online);
        assert!(!matches(&course(), &f, &saved));

        let mut f = base.clone();
        f.difficulty = Selection::Only(Difficulty::Beginner);
        assert!(!matches(&course(), &f, &saved));

        let mut f = base.clone();
        f.price_range = PriceRange::new(3001, 5000);
        assert!(!matches(&course(), &f, &saved));

        let mut f = base;
        f.show_saved_only = true;
        assert!(!matches(&course(), &f, &saved));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let saved = SavedCourses::default();
        let mut filter = open_filter();
        filter.price_range = PriceRange::new(3000, 3000);
        assert!(matches(&course(), &filter, &saved));
    }

    #[test]
    fn test_saved_only_accepts_saved_course() {
        let mut saved = SavedCourses::default();
        saved.toggle("web-dev");
        let mut filter = open_filter();
        filter.show_saved_only = true;
        assert!(matches(&course(), &filter, &saved));
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<Selection<Category>>(), Ok(Selection::All));
        assert_eq!(
            "SIYB".parse::<Selection<Category>>(),
            Ok(Selection::Only(Category::Siyb))
        );
        assert!("nope".parse::<Selection<Format>>().is_err());
        assert_eq!(Selection::Only(Format::InPerson).to_string(), "In-Person");
    }

    #[test]
    fn test_price_range_normalizes_and_clamps() {
        let range = PriceRange::new(500, 100);
        assert_eq!(range, PriceRange { min: 100, max: 500 });

        let outer = PriceRange::new(200, 400);
        assert_eq!(range.clamp_to(outer), PriceRange { min: 200, max: 400 });
    }

    #[test]
    fn test_disjoint_price_range_is_kept() {
        let outer = PriceRange::new(2000, 6000);
        let below = PriceRange::new(0, 1000);
        let above = PriceRange::new(7000, 8000);

        assert!(!below.overlaps(&outer));
        assert_eq!(below.clamp_to(outer), below);
        assert_eq!(above.clamp_to(outer), above);
        assert!(PriceRange::new(0, 2000).overlaps(&outer));
    }

    #[test]
    fn test_selection_is_all_without_equality() {
        struct Opaque;
        assert!(Selection::<Opaque>::All.is_all());
        assert!(!Selection::Only(Opaque).is_all());
    }
}
