//! Item status enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of item statuses.
///
/// `Pending` is the only non-terminal state. `Skipped` is part of the
/// persisted domain but no operation assigns it; skipping only reorders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Item has not been done yet
    #[default]
    Pending,

    /// Item has been completed
    Completed,

    /// Item was excluded from the plan
    Skipped,
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ItemStatus::Pending),
            "completed" => Ok(ItemStatus::Completed),
            "skipped" => Ok(ItemStatus::Skipped),
            _ => Err(format!("Invalid item status: {s}")),
        }
    }
}

impl ItemStatus {
    /// Persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Completed => "completed",
            ItemStatus::Skipped => "skipped",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use longplan_core::models::ItemStatus;
    ///
    /// assert_eq!(ItemStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ItemStatus::Pending.with_icon(), "○ Pending");
    /// assert_eq!(ItemStatus::Skipped.with_icon(), "↷ Skipped");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ItemStatus::Completed => "✓ Completed",
            ItemStatus::Pending => "○ Pending",
            ItemStatus::Skipped => "↷ Skipped",
        }
    }
}
