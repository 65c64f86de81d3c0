//! Builds the plan entity tree from a scaled template.

use super::templates::Template;
use crate::models::{Duration, Item, Phase, Plan};

/// Instantiates a [`Plan`] from `template`.
///
/// Every plan, phase and item gets a fresh id. Phase order is the phase's
/// position in the template and item order its position within the phase,
/// both starting at 0. All items start pending.
pub fn assemble(goal: &str, duration: Duration, weekly_hours: u32, template: Template) -> Plan {
    let mut plan = Plan::new(goal, duration, weekly_hours);

    plan.phases = template
        .phases
        .into_iter()
        .enumerate()
        .map(|(phase_order, phase_template)| {
            let mut phase = Phase::new(phase_template.name, phase_order as i64);
            let phase_id = phase.id;
            phase.items = phase_template
                .items
                .into_iter()
                .enumerate()
                .map(|(item_order, name)| Item::new(name, phase_id, item_order as i64))
                .collect();
            phase
        })
        .collect();

    plan
}
