//! One-line notices for commands that either change the stored plan or
//! leave it alone.

use std::fmt;

/// Outcome line for an operation on the stored plan.
pub struct OperationStatus {
    pub message: String,
    /// Whether the stored plan was modified
    pub changed: bool,
}

impl OperationStatus {
    /// The operation modified the stored plan.
    pub fn changed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: true,
        }
    }

    /// The operation had nothing to act on; the stored plan is untouched.
    pub fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.changed { "Success:" } else { "Nothing to do:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let discarded = OperationStatus::changed("Plan discarded");
        assert_eq!(discarded.to_string(), "Success: Plan discarded\n");

        let noop = OperationStatus::unchanged("there is no plan to discard.");
        assert!(!noop.changed);
        assert_eq!(noop.to_string(), "Nothing to do: there is no plan to discard.\n");
    }
}
