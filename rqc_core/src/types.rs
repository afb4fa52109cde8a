//! Core types shared by the resolver, applier and hooks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of repeatable quest the host generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestType {
    Exploration,
    Elimination,
    Completion,
    /// Only offered by the fence category
    Pickup,
}

impl QuestType {
    /// Parse the name used in settings files and host data
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Exploration" => Some(QuestType::Exploration),
            "Elimination" => Some(QuestType::Elimination),
            "Completion" => Some(QuestType::Completion),
            "Pickup" => Some(QuestType::Pickup),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestType::Exploration => "Exploration",
            QuestType::Elimination => "Elimination",
            QuestType::Completion => "Completion",
            QuestType::Pickup => "Pickup",
        }
    }
}

impl fmt::Display for QuestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which faction a repeatable quest is offered to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Pmc,
    Scav,
}

/// One of the three repeatable quest categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestCategory {
    Daily,
    Weekly,
    Fence,
}

impl QuestCategory {
    /// All categories, in the order the host stores them
    pub fn all() -> &'static [QuestCategory] {
        &[QuestCategory::Daily, QuestCategory::Weekly, QuestCategory::Fence]
    }

    /// Position of this category in the host's repeatable quest list
    pub fn index(&self) -> usize {
        match self {
            QuestCategory::Daily => 0,
            QuestCategory::Weekly => 1,
            QuestCategory::Fence => 2,
        }
    }

    /// Quest types this category may be configured with
    pub fn allowed_types(&self) -> &'static [QuestType] {
        match self {
            QuestCategory::Daily | QuestCategory::Weekly => &[
                QuestType::Exploration,
                QuestType::Elimination,
                QuestType::Completion,
            ],
            QuestCategory::Fence => &[
                QuestType::Exploration,
                QuestType::Elimination,
                QuestType::Completion,
                QuestType::Pickup,
            ],
        }
    }

    /// Settings key holding the randomized type list for this category
    pub fn types_key(&self) -> &'static str {
        match self {
            QuestCategory::Daily => "dailyTypes",
            QuestCategory::Weekly => "weeklyTypes",
            QuestCategory::Fence => "scavTypes",
        }
    }

    pub fn side(&self) -> Side {
        match self {
            QuestCategory::Daily | QuestCategory::Weekly => Side::Pmc,
            QuestCategory::Fence => Side::Scav,
        }
    }
}

impl fmt::Display for QuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestCategory::Daily => "daily",
            QuestCategory::Weekly => "weekly",
            QuestCategory::Fence => "fence",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_type_names() {
        for ty in QuestCategory::Fence.allowed_types() {
            assert_eq!(QuestType::from_name(ty.as_str()), Some(*ty));
        }
        assert_eq!(QuestType::from_name("exploration"), None);
        assert_eq!(QuestType::from_name(""), None);
    }

    #[test]
    fn test_pickup_is_fence_only() {
        assert!(!QuestCategory::Daily.allowed_types().contains(&QuestType::Pickup));
        assert!(!QuestCategory::Weekly.allowed_types().contains(&QuestType::Pickup));
        assert!(QuestCategory::Fence.allowed_types().contains(&QuestType::Pickup));
    }

    #[test]
    fn test_category_sides() {
        assert_eq!(QuestCategory::Daily.side(), Side::Pmc);
        assert_eq!(QuestCategory::Fence.side(), Side::Scav);
    }
}
