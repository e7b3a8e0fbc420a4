//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Program family a course belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Start and Improve Your Business programme
    #[serde(rename = "SIYB")]
    Siyb,
    /// Technology and data courses
    Technology,
    /// Management and leadership courses
    Management,
    /// Marketing and communications courses
    Marketing,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Self; 4] = [
        Self::Siyb,
        Self::Technology,
        Self::Management,
        Self::Marketing,
    ];

    /// Label shown to users and used in catalog files
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Siyb => "SIYB",
            Self::Technology => "Technology",
            Self::Management => "Management",
            Self::Marketing => "Marketing",
        }
    }
}

/// How a course is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Fully online
    Online,
    /// On campus
    #[serde(rename = "In-Person")]
    InPerson,
    /// Mix of online and on-campus sessions
    Hybrid,
}

impl Format {
    /// Every format, in display order
    pub const ALL: [Self; 3] = [Self::Online, Self::InPerson, Self::Hybrid];

    /// Label shown to users and used in catalog files
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::InPerson => "In-Person",
            Self::Hybrid => "Hybrid",
        }
    }
}

/// Expected prior experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// No prior experience needed
    Beginner,
    /// Some prior experience
    Intermediate,
    /// Practitioner level
    Advanced,
}

impl Difficulty {
    /// Every difficulty, in display order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Label shown to users and used in catalog files
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

macro_rules! label_enum_impls {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .into_iter()
                    .find(|v| {
                        v.label().eq_ignore_ascii_case(wanted)
                            || v.label().replace('-', "").eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| format!("Unknown {}: {s}", $what))
            }
        }
    };
}

label_enum_impls!(Category, "category");
label_enum_impls!(Format, "format");
label_enum_impls!(Difficulty, "difficulty");

/// A course offered in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique key (e.g., "siyb-start-business")
    pub id: String,

    /// Display title
    pub title: String,

    /// Short description shown on the course card
    pub description: String,

    /// Price as a plain number
    pub price: u32,

    /// Free-text duration (e.g., "6 Months", "8 Weeks")
    pub duration: String,

    /// Program family
    pub category: Category,

    /// Delivery format
    pub format: Format,

    /// Expected prior experience
    pub difficulty: Difficulty,

    /// Average learner rating (0-5)
    pub rating: f32,

    /// Number of enrolled students
    pub students: u32,

    /// Popularity score used for the default ordering
    pub popularity: u32,

    /// Whether the course is flagged as trending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<bool>,
}

impl Course {
    /// Create a new course with zeroed statistics
    ///
    /// # Arguments
    /// * `id` - Unique course key
    /// * `title` - Display title
    /// * `price` - Price as a plain number
    /// * `duration` - Free-text duration
    #[must_use]
    pub fn new(id: &str, title: &str, price: u32, duration: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            price,
            duration: duration.to_string(),
            category: Category::Technology,
            format: Format::Online,
            difficulty: Difficulty::Beginner,
            rating: 0.0,
            students: 0,
            popularity: 0,
            trending: None,
        }
    }

    /// Whether the course is flagged as trending
    #[must_use]
    pub fn is_trending(&self) -> bool {
        self.trending.unwrap_or(false)
    }

    /// Leading integer of the duration string ("6 Months" → 6)
    ///
    /// Units are ignored, so "8 Weeks" ranks after "6 Months". Values too
    /// large for `u32` saturate at `u32::MAX`. Returns `None` when the
    /// duration doesn't start with a digit.
    #[must_use]
    pub fn duration_value(&self) -> Option<u32> {
        let digits: Vec<u32> = self
            .duration
            .trim_start()
            .chars()
            .map_while(|c| c.to_digit(10))
            .collect();
        if digits.is_empty() {
            return None;
        }
        Some(
            digits
                .into_iter()
                .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d)),
        )
    }
}
