//! Plan and phase model definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Duration, Item};

/// A named, ordered group of items representing one stage of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phase {
    /// Unique identifier for the phase
    pub id: Uuid,

    /// Display name of the phase
    pub name: String,

    /// Position within the plan
    pub order: i64,

    /// Items owned by this phase
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Phase {
    /// Creates an empty phase with a fresh identity.
    pub fn new(name: impl Into<String>, order: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            order,
            items: Vec::new(),
        }
    }

    /// Highest item order in this phase, if it has any items.
    pub fn max_item_order(&self) -> Option<i64> {
        self.items.iter().map(|item| item.order).max()
    }
}

/// The root artifact produced by generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: Uuid,

    /// The goal text the plan was generated from
    pub goal: String,

    /// Chosen plan length
    pub duration: Duration,

    /// Weekly time budget in hours
    pub weekly_hours: u32,

    /// Phases owned by this plan
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl Plan {
    /// Creates an empty plan with a fresh identity.
    pub fn new(goal: impl Into<String>, duration: Duration, weekly_hours: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            goal: goal.into(),
            duration,
            weekly_hours,
            phases: Vec::new(),
        }
    }

    /// Iterates over every item of every phase in storage order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.phases.iter().flat_map(|phase| phase.items.iter())
    }

    /// Total number of items across all phases.
    pub fn item_count(&self) -> usize {
        self.items().count()
    }
}
