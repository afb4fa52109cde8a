//! Host-owned repeatable quest configuration records
//!
//! These mirror the host's quest configuration document. Fields this crate
//! does not touch are carried through untouched so a patched document can be
//! written back out.

use crate::types::{QuestCategory, QuestType, Side};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The host's quest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestConfig {
    /// Daily, weekly and fence configurations, in that order
    pub repeatable_quests: Vec<RepeatableQuestConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuestConfig {
    /// Get the configuration for a category
    pub fn category(&self, category: QuestCategory) -> Option<&RepeatableQuestConfig> {
        self.repeatable_quests.get(category.index())
    }

    /// Get the configuration for a category mutably
    pub fn category_mut(&mut self, category: QuestCategory) -> Option<&mut RepeatableQuestConfig> {
        self.repeatable_quests.get_mut(category.index())
    }

    /// Find a configuration by its name (e.g. "Daily", "Weekly", "Daily_Savage")
    pub fn by_name(&self, name: &str) -> Option<&RepeatableQuestConfig> {
        self.repeatable_quests.iter().find(|c| c.name == name)
    }
}

/// Generation parameters for one repeatable quest category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatableQuestConfig {
    pub name: String,
    pub side: Side,
    /// Quest types the generator may pick from
    pub types: Vec<QuestType>,
    /// Traders offering this category, each with its own allowed types
    pub trader_whitelist: Vec<TraderWhitelist>,
    pub reward_scaling: RewardScaling,
    pub min_player_level: u32,
    pub num_quests: u32,
    /// Seconds between resets
    pub reset_time: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A trader eligible to offer a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderWhitelist {
    pub trader_id: String,
    pub name: String,
    pub quest_types: Vec<QuestType>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reward magnitudes per reward tier, stored as parallel arrays
///
/// Arrays no multiplier touches are kept as the host wrote them. Scaled
/// arrays are written back as integers wherever the value is whole, so a
/// pass that leaves them alone does not turn `100` into `100.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardScaling {
    #[serde(default)]
    pub levels: Vec<Value>,
    #[serde(default, serialize_with = "numbers::serialize_all")]
    pub experience: Vec<f64>,
    #[serde(default, serialize_with = "numbers::serialize_all")]
    pub roubles: Vec<f64>,
    #[serde(default, serialize_with = "numbers::serialize_all")]
    pub gp_coins: Vec<f64>,
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default, serialize_with = "numbers::serialize_all")]
    pub reputation: Vec<f64>,
    #[serde(default, serialize_with = "numbers::serialize")]
    pub reward_spread: f64,
    #[serde(default, serialize_with = "numbers::serialize_all")]
    pub skill_reward_chance: Vec<f64>,
    #[serde(default, serialize_with = "numbers::serialize_all")]
    pub skill_point_reward: Vec<f64>,
}

/// Serialize whole floats as JSON integers
mod numbers {
    use serde::ser::{Serialize, SerializeSeq, Serializer};

    // Largest magnitude an f64 holds without skipping integers
    const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

    struct Number(f64);

    impl Serialize for Number {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.0.fract() == 0.0 && self.0.abs() <= EXACT_INTEGER_LIMIT {
                serializer.serialize_i64(self.0 as i64)
            } else {
                serializer.serialize_f64(self.0)
            }
        }
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        Number(*value).serialize(serializer)
    }

    pub fn serialize_all<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&Number(*value))?;
        }
        seq.end()
    }
}
