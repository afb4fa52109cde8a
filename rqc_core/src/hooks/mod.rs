//! Host extension points and the decorators composed around them
//!
//! The host exposes its quest-completion handler, its repeatable quest
//! generator and its scav-dailies unlock rule through the traits below. The
//! decorators wrap a host implementation and add one extra step.

mod completion;
mod unlock;

pub use completion::InstantRepeatable;
pub use unlock::{FenceUnlockOverride, IntelCenterRule};

use crate::profile::{PlayerProfile, RepeatableQuest, RepeatableQuestCategory};
use crate::quest_config::RepeatableQuestConfig;
use crate::types::QuestType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Client request to hand in a quest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteQuestRequest {
    #[serde(rename = "qid")]
    pub quest_id: String,
    #[serde(default)]
    pub remove_excess_items: bool,
}

/// Profile changes sent back to the client after a completion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    /// Repeatable categories the client should refresh
    #[serde(default)]
    pub repeatable_quests: Vec<RepeatableQuestCategory>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Quest types (and per-trader types) a generator may draw from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestTypePool {
    pub types: Vec<QuestType>,
    /// Allowed types per trader id
    pub trader_types: BTreeMap<String, Vec<QuestType>>,
}

impl QuestTypePool {
    /// Build the pool from a category's live configuration
    pub fn from_config(config: &RepeatableQuestConfig) -> Self {
        QuestTypePool {
            types: config.types.clone(),
            trader_types: config
                .trader_whitelist
                .iter()
                .map(|trader| (trader.trader_id.clone(), trader.quest_types.clone()))
                .collect(),
        }
    }
}

/// The host's quest-completion handler
pub trait CompletionHandler {
    fn complete_quest(
        &self,
        profile: &mut PlayerProfile,
        request: &CompleteQuestRequest,
        session_id: &str,
    ) -> CompletionResponse;
}

impl<F> CompletionHandler for F
where
    F: Fn(&mut PlayerProfile, &CompleteQuestRequest, &str) -> CompletionResponse,
{
    fn complete_quest(
        &self,
        profile: &mut PlayerProfile,
        request: &CompleteQuestRequest,
        session_id: &str,
    ) -> CompletionResponse {
        self(profile, request, session_id)
    }
}

/// The host's repeatable quest generator
pub trait RepeatableQuestGenerator {
    /// Pool of quest types for a category at the given player level
    fn generate_quest_pool(&self, config: &RepeatableQuestConfig, _pmc_level: u32) -> QuestTypePool {
        QuestTypePool::from_config(config)
    }

    /// Generate one quest, or `None` if the pool cannot produce one
    fn generate_quest(
        &self,
        session_id: &str,
        pmc_level: u32,
        pool: &mut QuestTypePool,
        config: &RepeatableQuestConfig,
    ) -> Option<RepeatableQuest>;
}

/// The host's "has this player unlocked scav dailies" rule
pub trait ScavDailyUnlock {
    fn has_unlocked_scav_dailies(&self, profile: &PlayerProfile) -> bool;
}

impl<F> ScavDailyUnlock for F
where
    F: Fn(&PlayerProfile) -> bool,
{
    fn has_unlocked_scav_dailies(&self, profile: &PlayerProfile) -> bool {
        self(profile)
    }
}
