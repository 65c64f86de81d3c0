//! Tests for plan generation as a whole.

use super::*;
use crate::{
    error::LongPlanError,
    models::{Category, ItemStatus},
    params::{MAX_WEEKLY_HOURS, MIN_WEEKLY_HOURS},
};

const GOALS: [&str; 8] = [
    "영어 공부",
    "토이 프로젝트 만들기",
    "피아노 배우기",
    "헬스로 근육 만들기",
    "책 100권 읽기",
    "Learn Rust",
    "x",
    "운동",
];

#[test]
fn test_every_input_yields_three_to_five_phases_and_ten_items() {
    for goal in GOALS {
        for duration in Duration::ALL {
            for weekly_hours in MIN_WEEKLY_HOURS..=MAX_WEEKLY_HOURS {
                let plan = generate(goal, duration, weekly_hours);
                assert!(
                    (3..=5).contains(&plan.phases.len()),
                    "{goal} {duration:?} {weekly_hours}"
                );
                assert!(
                    plan.item_count() >= 10,
                    "{goal} {duration:?} {weekly_hours}"
                );
            }
        }
    }
}

#[test]
fn test_generated_plan_starts_fresh() {
    let plan = generate("토이 프로젝트 만들기", Duration::SixMonths, 7);

    assert_eq!(plan.goal, "토이 프로젝트 만들기");
    assert_eq!(plan.duration, Duration::SixMonths);
    assert_eq!(plan.weekly_hours, 7);
    assert!(plan.items().all(|item| item.status == ItemStatus::Pending));
    assert_eq!(plan.progress().completed, 0);

    let first = plan.current_item().expect("fresh plan has a current item");
    assert_eq!(first.name, "프로젝트 범위 정의하기");
    assert_eq!(plan.current_phase().map(|p| p.name.as_str()), Some("기획"));
}

#[test]
fn test_study_goal_uses_study_template() {
    assert_eq!(classify("영어 공부"), Category::Study);
    let plan = generate("영어 공부", Duration::ThreeMonths, 5);
    let names: Vec<&str> = plan.phases.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["준비", "기초 학습", "심화 학습", "실전 연습", "마무리"]);
}

#[test]
fn test_undershoot_is_preserved() {
    // target 20 for 16 project items -> multiplier 1.25 keeps 16
    let plan = generate("앱 개발", Duration::ThreeMonths, 5);
    assert_eq!(plan.item_count(), 16);
}

#[test]
fn test_large_budget_deepens_items() {
    let plan = generate("그림 그리기", Duration::OneYear, 40);
    assert_eq!(plan.item_count(), 24);
    assert!(plan.items().any(|item| item.name == "기초 동작 익히기 (심화)"));
}

#[test]
fn test_generate_plan_validates_input() {
    let params = GeneratePlan {
        goal: "  코딩 테스트 준비  ".to_string(),
        duration: Duration::OneYear,
        weekly_hours: 10,
    };
    let plan = generate_plan(&params).unwrap();
    assert_eq!(plan.goal, "코딩 테스트 준비");

    let params = GeneratePlan {
        weekly_hours: 41,
        ..params
    };
    assert!(matches!(
        generate_plan(&params),
        Err(LongPlanError::InvalidInput { .. })
    ));
}
