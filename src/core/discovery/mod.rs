//! Course discovery engine
//!
//! Filtering, ordering, pagination, the comparison tray, saved courses and
//! search history, tied together by [`DiscoveryState`].

pub mod compare;
pub mod filter;
pub mod history;
pub mod notify;
pub mod paginate;
pub mod saved;
pub mod sort;
pub mod state;

pub use compare::{CompareToggle, ComparisonSet};
pub use filter::{matches, FilterState, PriceRange, Selection};
pub use history::SearchHistory;
pub use notify::{Notice, NoticeKind, Notifications};
pub use saved::SavedCourses;
pub use sort::SortKey;
pub use state::{Action, DiscoverySettings, DiscoveryState, Effect, ResultsPage};
