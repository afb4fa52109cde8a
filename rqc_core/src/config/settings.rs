//! User settings as they appear in the settings file

use crate::types::QuestCategory;
use serde::{Deserialize, Serialize};

/// Settings read from `config.jsonc`
///
/// Values are kept exactly as written. Numeric and list fields that are
/// missing from the file are `None`, which every validation step rejects.
/// Levels, quest counts and timers are read as plain JSON numbers so `5.0`
/// parses; whether they are whole is checked when they are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub xp_multiplier: Option<f64>,
    pub currency_multiplier: Option<f64>,
    pub rep_multiplier: Option<f64>,
    pub skill_reward_chance_multiplier: Option<f64>,
    pub skill_point_reward_multiplier: Option<f64>,

    #[serde(default)]
    pub use_specific_quest_type: bool,
    #[serde(default)]
    pub completion_only: bool,
    #[serde(default)]
    pub exploration_only: bool,
    #[serde(default)]
    pub elimination_only: bool,

    #[serde(default)]
    pub use_random_quest_type: bool,
    pub daily_types: Option<Vec<String>>,
    pub weekly_types: Option<Vec<String>>,
    pub scav_types: Option<Vec<String>>,

    pub daily_min_player_level: Option<f64>,
    pub weekly_min_player_level: Option<f64>,
    pub scav_min_player_level: Option<f64>,

    pub daily_number_of_quests: Option<f64>,
    pub weekly_number_of_quests: Option<f64>,
    pub scav_number_of_quests: Option<f64>,

    pub daily_reset_timer: Option<f64>,
    pub weekly_reset_timer: Option<f64>,
    pub scav_reset_timer: Option<f64>,

    /// Unlock fence dailies without the Intel Center
    #[serde(default)]
    pub remove_intel_center_requirement: bool,
    /// Replace a completed repeatable immediately instead of waiting for the reset
    #[serde(default)]
    pub instantly_receive_new_repeatable: bool,
    #[serde(default)]
    pub debug_logging: bool,
}

impl Settings {
    /// Randomized type list configured for a category
    pub fn types(&self, category: QuestCategory) -> Option<&[String]> {
        match category {
            QuestCategory::Daily => self.daily_types.as_deref(),
            QuestCategory::Weekly => self.weekly_types.as_deref(),
            QuestCategory::Fence => self.scav_types.as_deref(),
        }
    }

    pub fn min_player_level(&self, category: QuestCategory) -> Option<f64> {
        match category {
            QuestCategory::Daily => self.daily_min_player_level,
            QuestCategory::Weekly => self.weekly_min_player_level,
            QuestCategory::Fence => self.scav_min_player_level,
        }
    }

    pub fn number_of_quests(&self, category: QuestCategory) -> Option<f64> {
        match category {
            QuestCategory::Daily => self.daily_number_of_quests,
            QuestCategory::Weekly => self.weekly_number_of_quests,
            QuestCategory::Fence => self.scav_number_of_quests,
        }
    }

    pub fn reset_timer(&self, category: QuestCategory) -> Option<f64> {
        match category {
            QuestCategory::Daily => self.daily_reset_timer,
            QuestCategory::Weekly => self.weekly_reset_timer,
            QuestCategory::Fence => self.scav_reset_timer,
        }
    }
}
