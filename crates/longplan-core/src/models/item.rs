//! Item model definition.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ItemStatus;

/// A single actionable task within a phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique identifier for the item
    pub id: Uuid,

    /// Display name of the item
    pub name: String,

    /// ID of the owning phase
    pub phase_id: Uuid,

    /// Position within the phase; grows past the maximum when skipped
    pub order: i64,

    /// Completion status
    pub status: ItemStatus,
}

impl Item {
    /// Creates a pending item with a fresh identity.
    pub fn new(name: impl Into<String>, phase_id: Uuid, order: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phase_id,
            order,
            status: ItemStatus::Pending,
        }
    }

    /// Whether the item can still become current.
    pub fn is_pending(&self) -> bool {
        self.status == ItemStatus::Pending
    }
}
