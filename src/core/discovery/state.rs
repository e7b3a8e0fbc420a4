//! Discovery state and its reducer
//!
//! Every user interaction is an [`Action`]. [`DiscoveryState::apply`] performs
//! exactly one state transition per action and reports what the surface should
//! do about it as a list of [`Effect`]s.

use super::compare::{CompareToggle, ComparisonSet, DEFAULT_COMPARE_LIMIT};
use super::filter::{filter_courses, FilterState, PriceRange, Selection};
use super::history::{SearchHistory, DEFAULT_HISTORY_LIMIT};
use super::notify::{NoticeKind, Notifications, DEFAULT_TOAST_LIFETIME};
use super::paginate::{self, DEFAULT_PAGE_SIZE};
use super::saved::SavedCourses;
use super::sort::{sort_courses, SortKey};
use crate::config::CatalogConfig;
use crate::core::models::{Catalog, Category, Course, Difficulty, Format};
use std::time::{Duration, Instant};

/// Tunable limits of the discovery engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoverySettings {
    /// Courses per results page
    pub page_size: usize,
    /// Capacity of the comparison tray
    pub compare_limit: usize,
    /// Remembered search terms
    pub history_limit: usize,
    /// How long the "saved" notification stays up
    pub toast_lifetime: Duration,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            compare_limit: DEFAULT_COMPARE_LIMIT,
            history_limit: DEFAULT_HISTORY_LIMIT,
            toast_lifetime: DEFAULT_TOAST_LIFETIME,
        }
    }
}

impl DiscoverySettings {
    /// Settings from the `[catalog]` config section; zero values fall back to defaults
    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        let defaults = Self::default();
        let or_default = |value: usize, default: usize| if value == 0 { default } else { value };
        Self {
            page_size: or_default(config.page_size, defaults.page_size),
            compare_limit: or_default(config.compare_limit, defaults.compare_limit),
            history_limit: or_default(config.history_limit, defaults.history_limit),
            toast_lifetime: if config.toast_seconds == 0 {
                defaults.toast_lifetime
            } else {
                Duration::from_secs(config.toast_seconds)
            },
        }
    }
}

/// A single user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The search box text changed (not yet submitted)
    SetSearchTerm(String),
    /// The search was submitted; also recorded in the history
    SubmitSearch(String),
    /// Category chip selected
    SelectCategory(Selection<Category>),
    /// Duration chip selected
    SelectDuration(Selection<String>),
    /// Format chip selected
    SelectFormat(Selection<Format>),
    /// Difficulty chip selected
    SelectDifficulty(Selection<Difficulty>),
    /// Price slider moved
    SetPriceRange(PriceRange),
    /// "Saved only" switch flipped
    ToggleSavedOnly,
    /// Sort order changed
    SetSort(SortKey),
    /// Jump to a page (1-based)
    GoToPage(usize),
    /// Next page
    NextPage,
    /// Previous page
    PreviousPage,
    /// Add or remove a course from the comparison tray
    ToggleCompare(String),
    /// Show the side-by-side comparison
    OpenComparison,
    /// Empty the tray and leave comparison mode
    ClearComparison,
    /// Bookmark or un-bookmark a course
    ToggleSaved(String),
    /// Forget all remembered searches
    ClearHistory,
    /// Drop every filter, sort and page choice
    ResetFilters,
    /// Close all notifications
    DismissNotifications,
    /// Time passed; expired notifications are dropped
    Tick,
}

/// Outcome of an action the surface should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A notification was raised
    Notify(NoticeKind),
    /// The results page changed; bring the results into view
    ScrollToResults,
    /// The saved set changed and should be persisted
    SavedChanged,
    /// The search history changed and should be persisted
    HistoryChanged,
}

/// One page of filtered, sorted results
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPage<'a> {
    /// Courses on this page
    pub courses: Vec<&'a Course>,
    /// Courses matching the filter across all pages
    pub total_matches: usize,
    /// Page shown (1-based)
    pub page: usize,
    /// Number of pages (`0` when nothing matches)
    pub total_pages: usize,
}

/// Complete discovery UI state
#[derive(Debug, Clone)]
pub struct DiscoveryState {
    /// Active filter
    pub filter: FilterState,
    /// Active ordering
    pub sort: SortKey,
    current_page: usize,
    saved: SavedCourses,
    compare: ComparisonSet,
    comparison_open: bool,
    history: SearchHistory,
    notifications: Notifications,
    settings: DiscoverySettings,
    price_bounds: PriceRange,
}

impl DiscoveryState {
    /// Fresh state for `catalog` with nothing saved or remembered
    #[must_use]
    pub fn new(catalog: &Catalog, settings: DiscoverySettings) -> Self {
        let price_bounds = PriceRange::from(catalog.price_bounds());
        Self {
            filter: FilterState::new(price_bounds),
            sort: SortKey::default(),
            current_page: 1,
            saved: SavedCourses::default(),
            compare: ComparisonSet::with_limit(settings.compare_limit),
            comparison_open: false,
            history: SearchHistory::with_limit(settings.history_limit),
            notifications: Notifications::default(),
            settings,
            price_bounds,
        }
    }

    /// Fresh state seeded with previously persisted saved ids and search terms
    ///
    /// Saved ids no longer present in the catalog are kept, so a catalog
    /// update doesn't silently discard bookmarks.
    #[must_use]
    pub fn restore(
        catalog: &Catalog,
        settings: DiscoverySettings,
        saved: SavedCourses,
        history: Vec<String>,
    ) -> Self {
        let mut state = Self::new(catalog, settings);
        state.saved = saved;
        state.history = SearchHistory::from_terms(history, settings.history_limit);
        state
    }

    /// Apply one action and report its effects
    pub fn apply(&mut self, catalog: &Catalog, action: Action, now: Instant) -> Vec<Effect> {
        crate::debug!("discovery action: {action:?}");
        self.notifications.expire(now);

        let mut effects = Vec::new();
        let page_before = self.current_page;

        match action {
            Action::SetSearchTerm(term) => self.filter.search_term = term,
            Action::SubmitSearch(term) => {
                if self.history.record(&term) {
                    effects.push(Effect::HistoryChanged);
                }
                self.filter.search_term = term;
            }
            Action::SelectCategory(category) => self.filter.category = category,
            Action::SelectDuration(duration) => self.filter.duration = duration,
            Action::SelectFormat(format) => self.filter.format = format,
            Action::SelectDifficulty(difficulty) => self.filter.difficulty = difficulty,
            Action::SetPriceRange(range) => {
                self.filter.price_range = range.clamp_to(self.price_bounds);
            }
            Action::ToggleSavedOnly => self.filter.show_saved_only = !self.filter.show_saved_only,
            Action::SetSort(key) => self.sort = key,
            Action::GoToPage(page) => self.current_page = page,
            Action::NextPage => self.current_page = self.current_page.saturating_add(1),
            Action::PreviousPage => self.current_page = self.current_page.saturating_sub(1),
            Action::ToggleCompare(id) => {
                if catalog.contains(&id) {
                    self.toggle_compare(&id, now, &mut effects);
                } else {
                    self.notify(NoticeKind::UnknownCourse { course_id: id }, now, &mut effects);
                }
            }
            Action::OpenComparison => self.comparison_open = !self.compare.is_empty(),
            Action::ClearComparison => {
                self.compare.clear();
                self.comparison_open = false;
            }
            Action::ToggleSaved(id) => {
                if catalog.contains(&id) {
                    self.toggle_saved(id, now, &mut effects);
                } else {
                    self.notify(NoticeKind::UnknownCourse { course_id: id }, now, &mut effects);
                }
            }
            Action::ClearHistory => {
                if self.history.clear() {
                    effects.push(Effect::HistoryChanged);
                }
            }
            Action::ResetFilters => {
                self.filter = FilterState::new(self.price_bounds);
                self.sort = SortKey::default();
                self.current_page = 1;
            }
            Action::DismissNotifications => self.notifications.dismiss_all(),
            Action::Tick => {}
        }

        let matches = self.results(catalog).len();
        self.current_page = paginate::clamp_page(self.current_page, matches, self.settings.page_size);
        if self.current_page != page_before {
            crate::debug!("page {page_before} -> {}", self.current_page);
            effects.push(Effect::ScrollToResults);
        }

        effects
    }

    fn notify(&mut self, kind: NoticeKind, now: Instant, effects: &mut Vec<Effect>) {
        self.notifications
            .push(kind.clone(), now, self.settings.toast_lifetime);
        effects.push(Effect::Notify(kind));
    }

    fn toggle_compare(&mut self, id: &str, now: Instant, effects: &mut Vec<Effect>) {
        match self.compare.toggle(id) {
            CompareToggle::Added => {}
            CompareToggle::Removed => {
                if self.compare.is_empty() {
                    self.comparison_open = false;
                }
            }
            CompareToggle::Rejected { limit } => {
                crate::info!("comparison tray full, rejected '{id}'");
                self.notify(NoticeKind::CompareLimit { limit }, now, effects);
            }
        }
    }

    fn toggle_saved(&mut self, id: String, now: Instant, effects: &mut Vec<Effect>) {
        let now_saved = self.saved.toggle(&id);
        effects.push(Effect::SavedChanged);
        if now_saved {
            self.notify(NoticeKind::Saved { course_id: id }, now, effects);
        }
    }

    /// All courses passing the filter, in display order
    #[must_use]
    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Course> {
        let mut courses = filter_courses(catalog.courses(), &self.filter, &self.saved);
        sort_courses(&mut courses, self.sort);
        courses
    }

    /// The page currently shown
    #[must_use]
    pub fn current_results<'a>(&self, catalog: &'a Catalog) -> ResultsPage<'a> {
        let all = self.results(catalog);
        let size = self.settings.page_size;
        ResultsPage {
            courses: paginate::page(&all, self.current_page, size).to_vec(),
            total_matches: all.len(),
            page: self.current_page,
            total_pages: paginate::total_pages(all.len(), size),
        }
    }

    /// Courses in the comparison tray, in selection order
    #[must_use]
    pub fn comparison<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Course> {
        self.compare
            .ids()
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect()
    }

    /// Saved courses present in the catalog, in catalog order
    #[must_use]
    pub fn saved_courses<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Course> {
        catalog
            .courses()
            .iter()
            .filter(|c| self.saved.contains(&c.id))
            .collect()
    }

    /// Page shown (1-based)
    #[must_use]
    pub const fn page(&self) -> usize {
        self.current_page
    }

    /// Bookmarked ids
    #[must_use]
    pub const fn saved(&self) -> &SavedCourses {
        &self.saved
    }

    /// Comparison tray
    #[must_use]
    pub const fn compare(&self) -> &ComparisonSet {
        &self.compare
    }

    /// Whether the side-by-side comparison is showing
    #[must_use]
    pub const fn is_comparison_open(&self) -> bool {
        self.comparison_open
    }

    /// Remembered searches
    #[must_use]
    pub const fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Notifications still showing
    #[must_use]
    pub const fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Catalog-wide price bounds the price filter is limited to
    #[must_use]
    pub const fn price_bounds(&self) -> PriceRange {
        self.price_bounds
    }

    /// Limits in effect
    #[must_use]
    pub const fn settings(&self) -> &DiscoverySettings {
        &self.settings
    }
}
