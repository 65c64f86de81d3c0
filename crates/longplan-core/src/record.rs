//! Persisted record format for plans.
//!
//! The record is the JSON form of [`Plan`]:
//!
//! ```text
//! Plan   { id, goal, duration: "3months"|"6months"|"1year", weekly_hours, phases: [Phase] }
//! Phase  { id, name, order, items: [Item] }
//! Item   { id, name, phase_id, order, status: "pending"|"completed"|"skipped" }
//! ```
//!
//! Decoding never fails outright. It reports a typed [`Decoded`] outcome and
//! leaves it to the store to treat anything but [`Decoded::Plan`] as "no
//! plan".

use std::collections::HashSet;

use crate::{error::Result, models::Plan};

/// Outcome of decoding a stored record.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Nothing was stored
    Absent,
    /// Something was stored but it is not a usable plan
    Invalid(String),
    /// A structurally valid plan
    Plan(Plan),
}

impl Decoded {
    /// The decoded plan, if any.
    pub fn into_plan(self) -> Option<Plan> {
        match self {
            Decoded::Plan(plan) => Some(plan),
            Decoded::Absent | Decoded::Invalid(_) => None,
        }
    }
}

/// Serializes a plan as pretty-printed JSON. Non-ASCII text is written as
/// is.
pub fn encode(plan: &Plan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Decodes a stored record.
///
/// Blank input is [`Decoded::Absent`]. Malformed JSON, missing fields,
/// unknown enum values, items whose `phase_id` does not match their phase,
/// and duplicate phase orders are [`Decoded::Invalid`].
pub fn decode(input: &str) -> Decoded {
    if input.trim().is_empty() {
        return Decoded::Absent;
    }

    let plan: Plan = match serde_json::from_str(input) {
        Ok(plan) => plan,
        Err(e) => return Decoded::Invalid(e.to_string()),
    };

    match check_structure(&plan) {
        Ok(()) => Decoded::Plan(plan),
        Err(reason) => Decoded::Invalid(reason),
    }
}

fn check_structure(plan: &Plan) -> std::result::Result<(), String> {
    let mut phase_orders = HashSet::new();
    for phase in &plan.phases {
        if !phase_orders.insert(phase.order) {
            return Err(format!("duplicate phase order {}", phase.order));
        }
        if let Some(item) = phase.items.iter().find(|item| item.phase_id != phase.id) {
            return Err(format!(
                "item {} refers to phase {} but belongs to phase {}",
                item.id, item.phase_id, phase.id
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generator::generate, models::Duration};

    const SAMPLE: &str = r#"{
        "id": "6f1c2a9e-3b7d-4c1e-9a55-0d2f7b8e4c11",
        "goal": "영어 공부",
        "duration": "6months",
        "weekly_hours": 4,
        "phases": [
            {
                "id": "0b9d5f3a-8e21-4d6c-a7f4-5c3e2b1a0d99",
                "name": "준비",
                "order": 0,
                "items": [
                    {
                        "id": "a3e8c7d1-2f4b-4e6a-9c0d-1b2a3c4d5e6f",
                        "name": "학습 목표 정리하기",
                        "phase_id": "0b9d5f3a-8e21-4d6c-a7f4-5c3e2b1a0d99",
                        "order": 0,
                        "status": "completed"
                    },
                    {
                        "id": "b4f9d8e2-3a5c-4f7b-8d1e-2c3b4d5e6f70",
                        "name": "교재/자료 선정하기",
                        "phase_id": "0b9d5f3a-8e21-4d6c-a7f4-5c3e2b1a0d99",
                        "order": 1,
                        "status": "skipped"
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_decode_sample_record() {
        let plan = decode(SAMPLE).into_plan().expect("sample should decode");
        assert_eq!(plan.goal, "영어 공부");
        assert_eq!(plan.duration, Duration::SixMonths);
        assert_eq!(plan.weekly_hours, 4);
        assert_eq!(plan.phases[0].items.len(), 2);
        assert_eq!(plan.progress().completed, 1);
    }

    #[test]
    fn test_encode_uses_record_field_names_and_codes() {
        let plan = generate("헬스", Duration::OneYear, 2);
        let json = encode(&plan).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["duration"], "1year");
        assert_eq!(value["weekly_hours"], 2);
        assert_eq!(value["phases"][0]["order"], 0);
        assert_eq!(value["phases"][0]["items"][0]["status"], "pending");
        assert_eq!(
            value["phases"][0]["items"][0]["phase_id"],
            value["phases"][0]["id"]
        );
        // unescaped UTF-8
        assert!(json.contains("헬스"));
    }

    #[test]
    fn test_round_trip_preserves_mutations() {
        let mut plan = generate("피아노 배우기", Duration::ThreeMonths, 5);
        plan.skip_current();
        plan.complete_current();

        let decoded = decode(&encode(&plan).unwrap());
        assert_eq!(decoded, Decoded::Plan(plan));
    }

    #[test]
    fn test_blank_input_is_absent() {
        assert_eq!(decode(""), Decoded::Absent);
        assert_eq!(decode("  \n"), Decoded::Absent);
    }

    #[test]
    fn test_malformed_input_is_invalid() {
        assert!(matches!(decode("{not json"), Decoded::Invalid(_)));
        assert!(matches!(decode("[]"), Decoded::Invalid(_)));
    }

    #[test]
    fn test_unknown_enum_values_are_invalid() {
        let bad_duration = SAMPLE.replace("\"6months\"", "\"2weeks\"");
        assert!(matches!(decode(&bad_duration), Decoded::Invalid(_)));

        let bad_status = SAMPLE.replace("\"skipped\"", "\"archived\"");
        assert!(matches!(decode(&bad_status), Decoded::Invalid(_)));
    }

    #[test]
    fn test_missing_field_is_invalid() {
        let missing_goal = SAMPLE.replace("\"goal\": \"영어 공부\",", "");
        assert!(matches!(decode(&missing_goal), Decoded::Invalid(_)));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r#"{
            "id": "6f1c2a9e-3b7d-4c1e-9a55-0d2f7b8e4c11",
            "goal": "g",
            "duration": "3months",
            "weekly_hours": 1
        }"#;
        let plan = decode(json).into_plan().unwrap();
        assert!(plan.phases.is_empty());
    }

    #[test]
    fn test_mismatched_back_reference_is_invalid() {
        let json = SAMPLE.replacen(
            "\"phase_id\": \"0b9d5f3a-8e21-4d6c-a7f4-5c3e2b1a0d99\"",
            "\"phase_id\": \"11111111-2222-4333-8444-555555555555\"",
            1,
        );
        match decode(&json) {
            Decoded::Invalid(reason) => assert!(reason.contains("refers to phase")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_phase_order_is_invalid() {
        let mut plan = generate("default goal", Duration::ThreeMonths, 5);
        plan.phases[1].order = plan.phases[0].order;
        let json = encode(&plan).unwrap();
        assert!(matches!(decode(&json), Decoded::Invalid(_)));
    }

    #[test]
    fn test_decoded_plan_with_largest_item_order_can_still_be_skipped_safely() {
        let mut plan = generate("default goal", Duration::ThreeMonths, 5);
        let last = plan.phases[0].items.len() - 1;
        plan.phases[0].items[last].order = i64::MAX;
        let json = encode(&plan).unwrap();

        let mut decoded = decode(&json).into_plan().unwrap();
        let current = decoded.current_item().map(|item| item.id);
        assert!(!decoded.skip_current());
        assert_eq!(decoded.current_item().map(|item| item.id), current);
        assert_eq!(decoded, plan);
    }
}
