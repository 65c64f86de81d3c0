mod common;

use std::fs;

use common::create_test_store;
use longplan_core::{generate, record, Decoded, Duration};

#[test]
fn test_stored_file_matches_record_shape() {
    let (_temp_dir, store) = create_test_store();
    let plan = generate("자격증 시험", Duration::SixMonths, 6);
    store.save(&plan).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["duration", "goal", "id", "phases", "weekly_hours"]);
    assert_eq!(value["duration"], "6months");
    assert_eq!(value["id"], plan.id.to_string());

    assert_eq!(record::decode(&raw), Decoded::Plan(plan));
}

#[test]
fn test_invalid_files_load_as_no_plan() {
    let (_temp_dir, store) = create_test_store();
    let valid = record::encode(&generate("영어", Duration::ThreeMonths, 5)).unwrap();

    let cases = [
        String::new(),
        "not json at all".to_string(),
        valid.replace("\"3months\"", "\"forever\""),
        valid.replacen("\"pending\"", "\"paused\"", 1),
        valid.replacen("\"weekly_hours\"", "\"hours\"", 1),
    ];

    for content in cases {
        fs::write(store.path(), &content).unwrap();
        assert!(
            store.load().unwrap().is_none(),
            "expected no plan for {content:?}"
        );
    }
}

#[test]
fn test_non_utf8_file_loads_as_no_plan() {
    let (_temp_dir, store) = create_test_store();
    fs::write(store.path(), [0xff, 0xfe, 0x00]).unwrap();
    assert!(store.load().unwrap().is_none());
}
