//! Parameter structures for longplan operations
//!
//! These structures carry caller input across interfaces (CLI today) without
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these:
//!
//! ```text
//! CLI Args (clap) ──▶ Core Params ──▶ generator
//! ```

use serde::{Deserialize, Serialize};

use crate::{error::LongPlanError, models::Duration};

/// Smallest accepted weekly time budget.
pub const MIN_WEEKLY_HOURS: u32 = 1;

/// Largest accepted weekly time budget.
pub const MAX_WEEKLY_HOURS: u32 = 40;

/// Weekly time budget offered when the caller gives none.
pub const DEFAULT_WEEKLY_HOURS: u32 = 5;

/// Parameters for generating a new plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratePlan {
    /// Free-text goal (surrounding whitespace is ignored)
    pub goal: String,
    /// Plan length
    #[serde(default)]
    pub duration: Duration,
    /// Hours available per week
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: u32,
}

fn default_weekly_hours() -> u32 {
    DEFAULT_WEEKLY_HOURS
}

impl Default for GeneratePlan {
    fn default() -> Self {
        Self {
            goal: String::new(),
            duration: Duration::default(),
            weekly_hours: DEFAULT_WEEKLY_HOURS,
        }
    }
}

impl GeneratePlan {
    /// Validate generation parameters and return the trimmed goal.
    ///
    /// # Errors
    ///
    /// * `LongPlanError::InvalidInput` - When the goal is empty after trimming
    /// * `LongPlanError::InvalidInput` - When weekly hours are outside 1..=40
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longplan_core::params::GeneratePlan;
    ///
    /// let params = GeneratePlan {
    ///     goal: "  영어 공부  ".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(params.validate()?, "영어 공부");
    ///
    /// let params = GeneratePlan {
    ///     goal: "   ".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(params.validate().is_err());
    /// # longplan_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> crate::Result<&str> {
        let goal = self.goal.trim();
        if goal.is_empty() {
            return Err(LongPlanError::invalid_input("goal").with_reason("Goal must not be empty"));
        }

        if !(MIN_WEEKLY_HOURS..=MAX_WEEKLY_HOURS).contains(&self.weekly_hours) {
            return Err(LongPlanError::invalid_input("weekly_hours").with_reason(format!(
                "Weekly hours must be between {MIN_WEEKLY_HOURS} and {MAX_WEEKLY_HOURS}, got {}",
                self.weekly_hours
            )));
        }

        Ok(goal)
    }
}
