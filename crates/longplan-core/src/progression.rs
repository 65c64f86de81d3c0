//! Progression through a plan, one current item at a time.
//!
//! The current item is the first pending item found when walking phases by
//! ascending `order` and, within each phase, items by ascending `order`.
//! Completing it is the only status transition; skipping it only moves it
//! behind the other items of its phase.

use log::{debug, warn};

use crate::models::{Item, ItemStatus, Phase, Plan, Progress};

/// A user action on the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// Mark the current item completed
    Complete,
    /// Move the current item to the end of its phase
    Skip,
}

impl Plan {
    /// Phase and item indices of the current item, in storage order.
    fn current_position(&self) -> Option<(usize, usize)> {
        let mut phases: Vec<(usize, &Phase)> = self.phases.iter().enumerate().collect();
        phases.sort_by_key(|(_, phase)| phase.order);

        phases.into_iter().find_map(|(phase_index, phase)| {
            let mut items: Vec<(usize, &Item)> = phase.items.iter().enumerate().collect();
            items.sort_by_key(|(_, item)| item.order);
            items
                .into_iter()
                .find(|(_, item)| item.is_pending())
                .map(|(item_index, _)| (phase_index, item_index))
        })
    }

    /// Returns the current item, or `None` once no pending item remains.
    pub fn current_item(&self) -> Option<&Item> {
        self.current_position()
            .map(|(phase, item)| &self.phases[phase].items[item])
    }

    /// Returns the phase that owns the current item.
    pub fn current_phase(&self) -> Option<&Phase> {
        let item = self.current_item()?;
        self.phases.iter().find(|phase| phase.id == item.phase_id)
    }

    /// Marks the current item completed.
    ///
    /// Returns `false` without touching the plan when there is no current
    /// item; callers should treat that as a no-op rather than an error.
    pub fn complete_current(&mut self) -> bool {
        let Some((phase, item)) = self.current_position() else {
            return false;
        };
        let item = &mut self.phases[phase].items[item];
        item.status = ItemStatus::Completed;
        debug!("completed item {} ({})", item.id, item.name);
        true
    }

    /// Moves the current item behind every other item of its phase.
    ///
    /// The item's order becomes the phase's maximum order plus one and its
    /// status stays pending. Orders are never renumbered, so repeated skips
    /// keep growing the value. Returns `false` when there is no current item
    /// or when the phase's maximum order cannot be exceeded.
    pub fn skip_current(&mut self) -> bool {
        let Some((phase, item)) = self.current_position() else {
            return false;
        };
        let phase = &mut self.phases[phase];
        let Some(max_order) = phase.max_item_order() else {
            return false;
        };
        let Some(order) = max_order.checked_add(1) else {
            warn!("phase {} has no order left past {max_order}", phase.id);
            return false;
        };
        let item = &mut phase.items[item];
        item.order = order;
        debug!("skipped item {} ({}) to order {}", item.id, item.name, item.order);
        true
    }

    /// Counts completed items against all items, regardless of order.
    pub fn progress(&self) -> Progress {
        let total = self.item_count();
        let completed = self
            .items()
            .filter(|item| item.status == ItemStatus::Completed)
            .count();
        Progress::new(completed, total)
    }

    /// Whether no pending item remains.
    pub fn is_complete(&self) -> bool {
        self.current_position().is_none()
    }

    /// Applies `action` to the current item, returning whether anything
    /// changed.
    pub fn apply(&mut self, action: PlanAction) -> bool {
        match action {
            PlanAction::Complete => self.complete_current(),
            PlanAction::Skip => self.skip_current(),
        }
    }
}
