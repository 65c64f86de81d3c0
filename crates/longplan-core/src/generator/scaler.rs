//! Scales a template's item count to the user's time budget.

use log::debug;

use super::templates::Template;
use crate::models::Duration;

/// Estimated hours of effort per item.
pub const HOURS_PER_ITEM: u32 = 3;

/// Lower bound on the target item count.
pub const MIN_TARGET_ITEMS: usize = 10;

/// Multiplier a template must exceed before it is deepened.
pub const EXPANSION_THRESHOLD: f64 = 1.5;

/// Suffix appended to deepened copies of seed items.
pub const DEEPENED_SUFFIX: &str = " (심화)";

/// Figures behind a scaling decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePlan {
    pub total_hours: u32,
    pub target_items: usize,
    pub base_items: usize,
    /// `target_items / base_items`, present only when the target exceeds
    /// the base count.
    pub multiplier: Option<f64>,
}

impl ScalePlan {
    /// Computes the scaling figures for a template and budget.
    pub fn compute(template: &Template, duration: Duration, weekly_hours: u32) -> Self {
        let total_hours = duration.weeks() * weekly_hours;
        let target_items = MIN_TARGET_ITEMS.max((total_hours / HOURS_PER_ITEM) as usize);
        let base_items = template.item_count();
        let multiplier = (base_items > 0 && target_items > base_items)
            .then(|| target_items as f64 / base_items as f64);

        Self {
            total_hours,
            target_items,
            base_items,
            multiplier,
        }
    }

    /// Whether the template will be deepened. Multipliers in (1.0, 1.5]
    /// leave the template short of the target.
    pub fn expands(&self) -> bool {
        self.multiplier.is_some_and(|m| m > EXPANSION_THRESHOLD)
    }
}

/// Deepens a template toward the item count implied by the time budget.
///
/// For each phase, the first `floor(len * (multiplier - 1))` items get a
/// suffixed copy appended after the originals. Items are never removed and
/// original order is kept.
pub fn scale(template: Template, duration: Duration, weekly_hours: u32) -> Template {
    let plan = ScalePlan::compute(&template, duration, weekly_hours);
    debug!(
        "scaling: {} hours, target {} items, base {} items, multiplier {:?}",
        plan.total_hours, plan.target_items, plan.base_items, plan.multiplier
    );

    let Some(multiplier) = plan.multiplier.filter(|_| plan.expands()) else {
        return template;
    };

    let mut template = template;
    for phase in &mut template.phases {
        let extra = (phase.items.len() as f64 * (multiplier - 1.0)) as usize;
        let deepened: Vec<String> = phase
            .items
            .iter()
            .take(extra)
            .map(|item| format!("{item}{DEEPENED_SUFFIX}"))
            .collect();
        phase.items.extend(deepened);
    }
    template
}
