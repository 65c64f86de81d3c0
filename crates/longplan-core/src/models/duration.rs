//! Plan duration choices.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three supported plan lengths.
///
/// Codes, labels and week counts are a fixed contract shared with the
/// persisted record format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Duration {
    /// Three months, 12 weeks
    #[default]
    #[serde(rename = "3months")]
    ThreeMonths,

    /// Six months, 26 weeks
    #[serde(rename = "6months")]
    SixMonths,

    /// One year, 52 weeks
    #[serde(rename = "1year")]
    OneYear,
}

impl Duration {
    /// All durations in display order.
    pub const ALL: [Duration; 3] = [Duration::ThreeMonths, Duration::SixMonths, Duration::OneYear];

    /// Persisted code.
    pub fn code(&self) -> &'static str {
        match self {
            Duration::ThreeMonths => "3months",
            Duration::SixMonths => "6months",
            Duration::OneYear => "1year",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Duration::ThreeMonths => "3개월",
            Duration::SixMonths => "6개월",
            Duration::OneYear => "1년",
        }
    }

    /// Number of weeks the plan spans.
    pub fn weeks(&self) -> u32 {
        match self {
            Duration::ThreeMonths => 12,
            Duration::SixMonths => 26,
            Duration::OneYear => 52,
        }
    }
}

impl FromStr for Duration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Duration::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid duration: {s} (expected 3months, 6months or 1year)"))
    }
}
