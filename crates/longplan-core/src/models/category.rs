//! Goal categories used to pick a plan template.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification tag derived from the goal text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Study,
    Project,
    Skill,
    Health,
    #[default]
    Default,
}

impl Category {
    /// Lowercase tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Study => "study",
            Category::Project => "project",
            Category::Skill => "skill",
            Category::Health => "health",
            Category::Default => "default",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "study" => Ok(Category::Study),
            "project" => Ok(Category::Project),
            "skill" => Ok(Category::Skill),
            "health" => Ok(Category::Health),
            "default" => Ok(Category::Default),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}
