//! Plan generation.
//!
//! Generation runs four steps, each in its own submodule:
//!
//! ```text
//! goal ──▶ classifier ──▶ templates ──▶ scaler ──▶ assembler ──▶ Plan
//!          (category)     (seed table)  (budget)   (ids, orders)
//! ```
//!
//! Generation never fails for a non-empty goal; goals that match no keyword
//! use the default template.
//!
//! ```rust
//! use longplan_core::{generator, models::Duration};
//!
//! let plan = generator::generate("영어 공부", Duration::ThreeMonths, 5);
//! assert_eq!(plan.phases.len(), 5);
//! assert!(plan.item_count() >= 10);
//! ```

pub mod assembler;
pub mod classifier;
pub mod scaler;
pub mod templates;

#[cfg(test)]
mod tests;

use log::debug;

pub use classifier::classify;
pub use scaler::ScalePlan;
pub use templates::Template;

use crate::{
    error::Result,
    models::{Duration, Plan},
    params::GeneratePlan,
};

/// Generates a plan for `goal` over `duration` with `weekly_hours` per week.
///
/// The caller is expected to pass a trimmed, non-empty goal and hours in
/// 1..=40; use [`generate_plan`] to have the input validated first.
pub fn generate(goal: &str, duration: Duration, weekly_hours: u32) -> Plan {
    let category = classify(goal);
    let template = scaler::scale(Template::for_category(category), duration, weekly_hours);
    let plan = assembler::assemble(goal, duration, weekly_hours, template);
    debug!(
        "generated plan {} ({} template, {} phases, {} items)",
        plan.id,
        category.as_str(),
        plan.phases.len(),
        plan.item_count()
    );
    plan
}

/// Validates `params` and generates a plan from them.
///
/// # Errors
///
/// Returns `LongPlanError::InvalidInput` if the goal is blank or the weekly
/// hours fall outside 1..=40.
pub fn generate_plan(params: &GeneratePlan) -> Result<Plan> {
    let goal = params.validate()?;
    Ok(generate(goal, params.duration, params.weekly_hours))
}
