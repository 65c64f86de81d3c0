//! Static phase/item templates, one per category.

use crate::models::Category;

/// A phase template: phase name and its seed item names.
pub type PhaseSeed = (&'static str, &'static [&'static str]);

const DEFAULT_PHASES: &[PhaseSeed] = &[
    (
        "준비",
        &["목표 구체화하기", "필요한 자료 수집하기", "환경 세팅하기", "기초 개념 파악하기"],
    ),
    (
        "기초",
        &["핵심 개념 학습하기", "기본 스킬 익히기", "간단한 예제 따라하기", "기초 연습하기"],
    ),
    (
        "심화",
        &[
            "심화 내용 학습하기",
            "실전 프로젝트 시작하기",
            "어려운 부분 집중 학습하기",
            "피드백 반영하기",
        ],
    ),
    (
        "실전",
        &["실제 적용하기", "완성도 높이기", "부족한 부분 보완하기", "결과물 정리하기"],
    ),
    ("마무리", &["전체 복습하기", "결과 정리하기", "다음 단계 계획하기"]),
];

const STUDY_PHASES: &[PhaseSeed] = &[
    ("준비", &["학습 목표 정리하기", "교재/자료 선정하기", "학습 환경 세팅하기"]),
    (
        "기초 학습",
        &["기초 이론 공부하기", "핵심 개념 정리하기", "기본 문제 풀기", "노트 정리하기"],
    ),
    (
        "심화 학습",
        &["심화 이론 공부하기", "응용 문제 풀기", "모르는 부분 집중 학습하기"],
    ),
    (
        "실전 연습",
        &["실전 문제 풀기", "시간 제한 연습하기", "오답 분석하기", "취약점 보완하기"],
    ),
    ("마무리", &["전체 복습하기", "최종 점검하기", "결과 정리하기"]),
];

const PROJECT_PHASES: &[PhaseSeed] = &[
    ("기획", &["프로젝트 범위 정의하기", "요구사항 정리하기", "구조 설계하기"]),
    ("준비", &["개발 환경 세팅하기", "필요한 기술 학습하기", "프로토타입 만들기"]),
    (
        "개발",
        &["핵심 기능 구현하기", "세부 기능 구현하기", "테스트하기", "버그 수정하기"],
    ),
    ("완성", &["UI/UX 다듬기", "문서화하기", "최종 테스트하기"]),
    ("배포", &["배포 준비하기", "배포하기", "피드백 수집하기"]),
];

const SKILL_PHASES: &[PhaseSeed] = &[
    ("탐색", &["스킬 분석하기", "학습 자료 찾기", "목표 수준 정하기"]),
    ("기초", &["기초 동작 익히기", "기본 패턴 연습하기", "매일 짧게 연습하기"]),
    ("발전", &["중급 기술 배우기", "다양한 상황 연습하기", "피드백 받기"]),
    ("숙달", &["고급 기술 배우기", "실전 적용하기", "꾸준히 유지하기"]),
];

const HEALTH_PHASES: &[PhaseSeed] = &[
    ("준비", &["현재 상태 점검하기", "목표 설정하기", "계획 세우기"]),
    ("적응", &["가볍게 시작하기", "루틴 만들기", "몸 적응시키기"]),
    ("강화", &["강도 높이기", "새로운 도전하기", "기록 측정하기"]),
    ("유지", &["루틴 유지하기", "컨디션 관리하기", "목표 달성 확인하기"]),
];

/// Returns the static seed table for a category.
pub fn seeds(category: Category) -> &'static [PhaseSeed] {
    match category {
        Category::Study => STUDY_PHASES,
        Category::Project => PROJECT_PHASES,
        Category::Skill => SKILL_PHASES,
        Category::Health => HEALTH_PHASES,
        Category::Default => DEFAULT_PHASES,
    }
}

/// One phase of a working template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTemplate {
    pub name: String,
    pub items: Vec<String>,
}

/// An owned copy of a seed table that the scaler can extend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub phases: Vec<PhaseTemplate>,
}

impl Template {
    /// Copies the static seed table for `category`.
    pub fn for_category(category: Category) -> Self {
        seeds(category).iter().copied().collect()
    }

    /// Total number of items across all phases.
    pub fn item_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.items.len()).sum()
    }
}

impl FromIterator<PhaseSeed> for Template {
    fn from_iter<I: IntoIterator<Item = PhaseSeed>>(iter: I) -> Self {
        let phases = iter
            .into_iter()
            .map(|(name, items)| PhaseTemplate {
                name: name.to_string(),
                items: items.iter().map(|item| (*item).to_string()).collect(),
            })
            .collect();
        Self { phases }
    }
}
