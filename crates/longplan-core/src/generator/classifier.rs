//! Keyword-based goal classification.

use log::debug;

use crate::models::Category;

/// Keyword lists in evaluation order. The first category with a keyword
/// contained in the goal wins, so a keyword shared by two lists ("운동")
/// resolves to the earlier one.
pub const CATEGORY_KEYWORDS: [(Category, &[&str]); 4] = [
    (
        Category::Study,
        &["공부", "학습", "시험", "자격증", "언어", "영어", "수학", "코딩"],
    ),
    (
        Category::Project,
        &["프로젝트", "개발", "만들기", "앱", "웹", "사이트", "서비스"],
    ),
    (
        Category::Skill,
        &["스킬", "기술", "악기", "그림", "운동", "요리", "피아노", "기타"],
    ),
    (
        Category::Health,
        &["운동", "다이어트", "건강", "체력", "근육", "달리기", "헬스"],
    ),
];

/// Maps a goal to a category by plain substring containment on the
/// lowercased goal. Unmatched goals fall back to [`Category::Default`].
pub fn classify(goal: &str) -> Category {
    let goal = goal.to_lowercase();
    let category = CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| goal.contains(keyword)))
        .map_or(Category::Default, |(category, _)| *category);
    debug!("classified goal {goal:?} as {}", category.as_str());
    category
}
