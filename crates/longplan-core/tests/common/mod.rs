use longplan_core::{PlanStore, PlanStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a store in a fresh temporary directory
pub fn create_test_store() -> (TempDir, PlanStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_file = temp_dir.path().join("plan_data.json");
    let store = PlanStoreBuilder::new()
        .with_data_file(Some(&data_file))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}
