//! Display implementations for domain models.

use std::fmt;

use crate::models::{Category, Duration, Item, ItemStatus, Phase, Plan, Progress};

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} weeks)", self.label(), self.weeks())
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} ({}%)", self.completed, self.total, self.percent())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} ({})", self.name, self.status.with_icon())
    }
}

impl Phase {
    /// Items in progression order.
    fn ordered_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        items.sort_by_key(|item| item.order);
        items
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let completed = self
            .items
            .iter()
            .filter(|item| item.status == ItemStatus::Completed)
            .count();
        writeln!(
            f,
            "## {}. {} ({completed}/{})",
            self.order + 1,
            self.name,
            self.items.len()
        )?;
        writeln!(f)?;

        if self.items.is_empty() {
            writeln!(f, "No items in this phase.")?;
        }
        for item in self.ordered_items() {
            write!(f, "{item}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.goal)?;
        writeln!(f)?;

        writeln!(f, "- Duration: {}", self.duration)?;
        writeln!(f, "- Weekly hours: {}", self.weekly_hours)?;
        writeln!(f, "- Progress: {}", self.progress())?;
        writeln!(f)?;

        if self.phases.is_empty() {
            writeln!(f, "No phases in this plan.")?;
            return Ok(());
        }

        let mut phases: Vec<&Phase> = self.phases.iter().collect();
        phases.sort_by_key(|phase| phase.order);
        for phase in phases {
            write!(f, "{phase}")?;
        }
        Ok(())
    }
}
