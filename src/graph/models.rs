//! Data models for the concept graph

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display token used for categories the graph does not know about
pub const UNKNOWN_CATEGORY_COLOR: &str = "#888";

/// Topic family a concept belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Basics,
    Algorithms,
    DataStructures,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Basics,
        Category::Algorithms,
        Category::DataStructures,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Basics => "basics",
            Category::Algorithms => "algorithms",
            Category::DataStructures => "data-structures",
        }
    }

    /// Display color for the category
    pub fn color(&self) -> &'static str {
        match self {
            Category::Basics => "#6EE7B7",
            Category::Algorithms => "#93C5FD",
            Category::DataStructures => "#FCA5A5",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basics" => Ok(Category::Basics),
            "algorithms" => Ok(Category::Algorithms),
            "data-structures" => Ok(Category::DataStructures),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Returned when a category string matches none of the known categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Map a raw category name to its display color, falling back for unknown names
pub fn category_color(category: &str) -> &'static str {
    category
        .parse::<Category>()
        .map(|c| c.color())
        .unwrap_or(UNKNOWN_CATEGORY_COLOR)
}

/// A single topic in the prerequisite graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptNode {
    pub id: &'static str,
    pub name: &'static str,
    /// 1 (introductory) to 5 (expert)
    pub difficulty: u8,
    pub category: Category,
    /// Ids of the concepts that must be completed first
    pub dependencies: &'static [&'static str],
    pub description: &'static str,
}

impl ConceptNode {
    /// True when every prerequisite appears in `completed`
    pub fn is_unlocked_by<S: AsRef<str>>(&self, completed: &[S]) -> bool {
        self.dependencies
            .iter()
            .all(|dep| completed.iter().any(|c| c.as_ref() == *dep))
    }
}

/// Where a concept stands for a given learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeStatus {
    Completed,
    Current,
    Unlocked,
    Locked,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Completed => "completed",
            NodeStatus::Current => "current",
            NodeStatus::Unlocked => "unlocked",
            NodeStatus::Locked => "locked",
        }
    }
}
