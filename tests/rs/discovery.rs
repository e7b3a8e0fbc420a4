//! Integration tests for filtering, ordering, pagination and the comparison tray.

use course_finder::core::discovery::filter::filter_courses;
use course_finder::core::discovery::paginate::{page, pages, total_pages};
use course_finder::core::discovery::sort::sort_courses;
use course_finder::core::discovery::{
    matches, Action, CompareToggle, ComparisonSet, DiscoverySettings, DiscoveryState, Effect,
    FilterState, NoticeKind, PriceRange, SavedCourses, SearchHistory, Selection, SortKey,
};
use course_finder::core::models::{Catalog, Category, Course, Difficulty, Format};
use std::time::{Duration, Instant};

fn ids(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.id.clone()).collect()
}

fn reference_course() -> Course {
    let mut course = Course::new("ref", "Reference Course", 3000, "3 Months");
    course.description = "baseline course".to_string();
    course.category = Category::Management;
    course.format = Format::Hybrid;
    course.difficulty = Difficulty::Intermediate;
    course
}

fn reference_filter() -> FilterState {
    let mut filter = FilterState::new(PriceRange::new(1000, 5000));
    filter.search_term = "baseline".to_string();
    filter.category = Selection::Only(Category::Management);
    filter.duration = Selection::Only("3 Months".to_string());
    filter.format = Selection::Only(Format::Hybrid);
    filter.difficulty = Selection::Only(Difficulty::Intermediate);
    filter.show_saved_only = true;
    filter
}

#[test]
fn filter_requires_every_constraint() {
    let mut saved = SavedCourses::default();
    saved.toggle("ref");
    let filter = reference_filter();
    assert!(matches(&reference_course(), &filter, &saved));

    let violations: [(&str, fn(&mut Course)); 7] = [
        ("search", |c| c.description = "other".to_string()),
        ("category", |c| c.category = Category::Marketing),
        ("duration", |c| c.duration = "3 Weeks".to_string()),
        ("format", |c| c.format = Format::Online),
        ("difficulty", |c| c.difficulty = Difficulty::Advanced),
        ("price", |c| c.price = 5001),
        ("saved", |c| c.id = "unsaved".to_string()),
    ];
    for (name, violate) in violations {
        let mut course = reference_course();
        violate(&mut course);
        assert!(
            !matches(&course, &filter, &saved),
            "course violating only {name} must be excluded"
        );
    }
}

#[test]
fn price_orders_are_reverses_on_distinct_prices() {
    let catalog = Catalog::sample();
    let mut low = catalog.courses().iter().collect::<Vec<_>>();
    let mut high = low.clone();
    sort_courses(&mut low, SortKey::PriceLow);
    sort_courses(&mut high, SortKey::PriceHigh);

    high.reverse();
    assert_eq!(ids(&low), ids(&high));
    assert!(low.windows(2).all(|w| w[0].price <= w[1].price));
}

#[test]
fn duration_sort_is_stable_and_ignores_units() {
    let catalog = Catalog::sample();
    let mut courses = catalog.courses().iter().collect::<Vec<_>>();
    sort_courses(&mut courses, SortKey::Duration);
    assert_eq!(
        ids(&courses),
        [
            "siyb-start-business",
            "siyb-expand-business",
            "siyb-find-business-idea",
            "trainer-consultants",
            "ai-fundamentals",
            "siyb-improve-business",
            "data-analytics",
            "project-management",
            "digital-marketing",
        ]
    );
}

#[test]
fn pages_reconstruct_the_list() {
    let items: Vec<u32> = (0..17).collect();
    let rebuilt: Vec<u32> = pages(&items, 6).flatten().copied().collect();
    assert_eq!(rebuilt, items);
    assert_eq!(total_pages(items.len(), 6), 3);
    assert_eq!(page(&items, 1, 6).len(), 6);
    assert_eq!(page(&items[..4], 1, 6).len(), 4);
    assert!(page(&items, 4, 6).is_empty());
}

#[test]
fn comparison_rejects_fourth_course() {
    let mut tray = ComparisonSet::with_limit(3);
    for id in ["a", "b", "c"] {
        assert_eq!(tray.toggle(id), CompareToggle::Added);
    }
    assert_eq!(tray.toggle("d"), CompareToggle::Rejected { limit: 3 });
    assert_eq!(tray.ids(), ["a", "b", "c"]);

    assert_eq!(tray.toggle("b"), CompareToggle::Removed);
    assert_eq!(tray.ids(), ["a", "c"]);
}

#[test]
fn saving_twice_restores_the_set() {
    let mut saved = SavedCourses::from(vec!["x".to_string()]);
    let before = saved.clone();
    assert!(saved.toggle("y"));
    assert!(!saved.toggle("y"));
    assert_eq!(saved, before);
}

#[test]
fn history_keeps_first_position_of_duplicates() {
    let mut history = SearchHistory::with_limit(5);
    history.record("ai");
    history.record("data");
    assert!(!history.record("ai"));
    assert_eq!(history.terms(), ["data", "ai"]);

    for term in ["one", "two", "three", "four", "five"] {
        history.record(term);
    }
    assert_eq!(history.len(), 5);
    assert_eq!(history.terms()[0], "five");
}

#[test]
fn siyb_sorted_by_price_low() {
    let catalog = Catalog::sample();
    let mut state = DiscoveryState::new(&catalog, DiscoverySettings::default());
    let now = Instant::now();
    state.apply(&catalog, Action::SelectCategory(Selection::Only(Category::Siyb)), now);
    state.apply(&catalog, Action::SetSort(SortKey::PriceLow), now);

    let results = state.results(&catalog);
    let prices: Vec<u32> = results.iter().map(|c| c.price).collect();
    assert_eq!(
        ids(&results),
        [
            "siyb-find-business-idea",
            "siyb-start-business",
            "siyb-improve-business",
            "siyb-expand-business",
            "trainer-consultants",
        ]
    );
    assert_eq!(prices, [2500, 3000, 3500, 4000, 5000]);
}

#[test]
fn page_is_clamped_when_filters_shrink_results() {
    let catalog = Catalog::sample();
    let settings = DiscoverySettings {
        page_size: 2,
        ..DiscoverySettings::default()
    };
    let mut state = DiscoveryState::new(&catalog, settings);
    let now = Instant::now();

    state.apply(&catalog, Action::GoToPage(5), now);
    assert_eq!(state.page(), 5);

    let effects = state.apply(
        &catalog,
        Action::SelectCategory(Selection::Only(Category::Technology)),
        now,
    );
    assert_eq!(state.page(), 1);
    assert!(effects.contains(&Effect::ScrollToResults));

    state.apply(&catalog, Action::SubmitSearch("no such course".to_string()), now);
    let results = state.current_results(&catalog);
    assert_eq!(results.page, 1);
    assert_eq!(results.total_pages, 0);
    assert!(results.courses.is_empty());
}

#[test]
fn filter_helper_preserves_catalog_order() {
    let catalog = Catalog::sample();
    let mut filter = FilterState::new(PriceRange::from(catalog.price_bounds()));
    filter.format = Selection::Only(Format::Online);
    let online = filter_courses(catalog.courses(), &filter, &SavedCourses::default());
    assert_eq!(ids(&online), ["ai-fundamentals", "digital-marketing"]);
}

#[test]
fn notifications_expire_on_tick() {
    let catalog = Catalog::sample();
    let mut state = DiscoveryState::new(&catalog, DiscoverySettings::default());
    let now = Instant::now();

    let effects = state.apply(&catalog, Action::ToggleSaved("ai-fundamentals".to_string()), now);
    assert!(effects.contains(&Effect::Notify(NoticeKind::Saved {
        course_id: "ai-fundamentals".to_string()
    })));

    state.apply(&catalog, Action::Tick, now + Duration::from_millis(2999));
    assert_eq!(state.notifications().pending().len(), 1);

    state.apply(&catalog, Action::Tick, now + Duration::from_secs(3));
    assert!(state.notifications().is_empty());
}

#[test]
fn price_window_outside_catalog_matches_nothing() {
    let catalog = Catalog::sample();
    let mut state = DiscoveryState::new(&catalog, DiscoverySettings::default());
    let now = Instant::now();

    state.apply(&catalog, Action::SetPriceRange(PriceRange::new(0, 1000)), now);
    assert!(state.results(&catalog).is_empty());

    state.apply(&catalog, Action::SetPriceRange(PriceRange::new(7000, 8000)), now);
    assert!(state.results(&catalog).is_empty());

    state.apply(&catalog, Action::SetPriceRange(PriceRange::new(0, 2000)), now);
    assert_eq!(ids(&state.results(&catalog)), ["digital-marketing"]);
}
