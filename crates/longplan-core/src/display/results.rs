//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::{Focus, OperationStatus};
use crate::{
    models::{Category, Plan},
    progression::PlanAction,
};

/// Wrapper type for displaying a freshly generated plan.
pub struct CreateResult<'a> {
    pub plan: &'a Plan,
    pub category: Category,
}

impl<'a> CreateResult<'a> {
    /// Create a new CreateResult wrapper.
    pub fn new(plan: &'a Plan, category: Category) -> Self {
        Self { plan, category }
    }
}

impl fmt::Display for CreateResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created a {} plan with {} phases and {} items.",
            self.category,
            self.plan.phases.len(),
            self.plan.item_count()
        )?;
        writeln!(f)?;
        write!(f, "{}", Focus(self.plan))
    }
}

/// Wrapper type for displaying the outcome of complete or skip.
pub struct ActionResult<'a> {
    pub action: PlanAction,
    /// Name of the item acted on; `None` when there was no current item
    pub item_name: Option<String>,
    pub plan: &'a Plan,
}

impl fmt::Display for ActionResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.item_name, self.action) {
            (Some(name), PlanAction::Complete) => writeln!(f, "Completed: {name}")?,
            (Some(name), PlanAction::Skip) => writeln!(f, "Moved to the end of its phase: {name}")?,
            (None, _) => write!(
                f,
                "{}",
                OperationStatus::unchanged("every item is already completed.")
            )?,
        }
        writeln!(f)?;
        write!(f, "{}", Focus(self.plan))
    }
}
