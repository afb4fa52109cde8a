//! Host-owned player profile records touched by the hooks

use crate::types::{QuestType, Side};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Hideout area type id of the Intel Center
pub const INTEL_CENTER_AREA: u32 = 11;

/// The parts of a player profile the hooks read and write
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub level: u32,
    #[serde(default)]
    pub hideout: Hideout,
    #[serde(default)]
    pub repeatable_quests: Vec<RepeatableQuestCategory>,
}

impl PlayerProfile {
    /// Level of a hideout area, 0 if it was never built
    pub fn hideout_area_level(&self, area_type: u32) -> u32 {
        self.hideout
            .areas
            .iter()
            .find(|area| area.area_type == area_type)
            .map_or(0, |area| area.level)
    }

    /// Repeatable category currently holding the active quest `quest_id`
    pub fn category_with_active_quest_mut(
        &mut self,
        quest_id: &str,
    ) -> Option<&mut RepeatableQuestCategory> {
        self.repeatable_quests
            .iter_mut()
            .find(|category| category.active_quests.iter().any(|q| q.id == quest_id))
    }

    pub fn category(&self, name: &str) -> Option<&RepeatableQuestCategory> {
        self.repeatable_quests.iter().find(|category| category.name == name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hideout {
    #[serde(default)]
    pub areas: Vec<HideoutArea>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HideoutArea {
    #[serde(rename = "type")]
    pub area_type: u32,
    pub level: u32,
}

/// A player's quests for one repeatable category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatableQuestCategory {
    pub id: String,
    pub name: String,
    /// Unix time of the next reset
    pub end_time: u64,
    pub active_quests: Vec<RepeatableQuest>,
    #[serde(default)]
    pub inactive_quests: Vec<RepeatableQuest>,
    /// Cost of replacing each active quest, keyed by quest id
    #[serde(default)]
    pub change_requirement: BTreeMap<String, ChangeRequirement>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A generated repeatable quest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatableQuest {
    #[serde(rename = "_id")]
    pub id: String,
    pub trader_id: String,
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    pub side: Side,
    #[serde(default)]
    pub change_cost: Vec<ChangeCost>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeCost {
    pub template_id: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequirement {
    pub change_cost: Vec<ChangeCost>,
    pub change_standing_cost: f64,
}
