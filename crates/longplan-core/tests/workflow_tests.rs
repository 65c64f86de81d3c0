mod common;

use common::create_test_store;
use longplan_core::{generate, Duration, ItemStatus, PlanAction};

/// Load, act, save: the cycle every front-end action goes through.
fn act(store: &longplan_core::PlanStore, action: PlanAction) -> bool {
    let mut plan = store
        .load()
        .expect("Failed to load plan")
        .expect("Plan should exist");
    let changed = plan.apply(action);
    store.save(&plan).expect("Failed to save plan");
    changed
}

#[test]
fn test_complete_plan_workflow() {
    let (_temp_dir, store) = create_test_store();

    let plan = generate("운동 습관 만들기", Duration::ThreeMonths, 2);
    let total = plan.item_count();
    store.save(&plan).expect("Failed to save plan");

    // skip the first item, then complete everything
    assert!(act(&store, PlanAction::Skip));
    let mut completed = 0;
    while act(&store, PlanAction::Complete) {
        completed += 1;
        let progress = store.load().unwrap().unwrap().progress();
        assert_eq!(progress.completed, completed);
        assert!(progress.completed <= progress.total);
    }
    assert_eq!(completed, total);

    let finished = store.load().unwrap().unwrap();
    assert!(finished.is_complete());
    assert!(finished.current_item().is_none());
    assert!(finished
        .items()
        .all(|item| item.status == ItemStatus::Completed));

    // further actions are benign no-ops
    assert!(!act(&store, PlanAction::Complete));
    assert!(!act(&store, PlanAction::Skip));
    assert_eq!(store.load().unwrap().unwrap(), finished);
}

#[test]
fn test_skipped_item_returns_after_rest_of_phase() {
    let (_temp_dir, store) = create_test_store();
    let plan = generate("영어 공부", Duration::ThreeMonths, 5);
    let first_phase_len = plan.phases[0].items.len();
    store.save(&plan).unwrap();

    let skipped = plan.current_item().unwrap().id;
    assert!(act(&store, PlanAction::Skip));

    for _ in 1..first_phase_len {
        let current = store.load().unwrap().unwrap();
        assert_ne!(current.current_item().unwrap().id, skipped);
        assert!(act(&store, PlanAction::Complete));
    }

    let reloaded = store.load().unwrap().unwrap();
    let current = reloaded.current_item().unwrap();
    assert_eq!(current.id, skipped);
    assert_eq!(current.status, ItemStatus::Pending);
    assert_eq!(current.order, first_phase_len as i64);
}

#[test]
fn test_regenerate_discards_plan() {
    let (_temp_dir, store) = create_test_store();
    store
        .save(&generate("건강 관리", Duration::OneYear, 3))
        .unwrap();

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());

    let fresh = generate("새 목표", Duration::SixMonths, 5);
    store.save(&fresh).unwrap();
    assert_eq!(store.load().unwrap(), Some(fresh));
}
