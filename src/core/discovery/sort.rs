//! Result ordering

use crate::core::models::Course;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to filtered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most popular first
    #[default]
    Popularity,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Shortest first, by the leading number of the duration text
    Duration,
}

impl SortKey {
    /// Every sort key, in display order
    pub const ALL: [Self; 4] = [
        Self::Popularity,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Duration,
    ];

    /// Key used on the command line and in the interactive shell
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Duration => "duration",
        }
    }

    /// Compare two courses under this key
    ///
    /// Duration compares raw leading numbers with no unit normalization, so
    /// "8 Weeks" sorts after "6 Months". Durations without a leading number
    /// sort after all numeric ones.
    #[must_use]
    pub fn compare(self, a: &Course, b: &Course) -> Ordering {
        match self {
            Self::Popularity => b.popularity.cmp(&a.popularity),
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
            Self::Duration => match (a.duration_value(), b.duration_value()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popularity" | "popular" => Ok(Self::Popularity),
            "price-low" | "price_low" | "price-asc" => Ok(Self::PriceLow),
            "price-high" | "price_high" | "price-desc" => Ok(Self::PriceHigh),
            "duration" => Ok(Self::Duration),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable sort of courses by `key`; ties keep their input order
pub fn sort_courses(courses: &mut [&Course], key: SortKey) {
    courses.sort_by(|a, b| key.compare(a, b));
}
