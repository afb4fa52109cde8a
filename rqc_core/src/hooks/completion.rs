//! InstantRepeatable - Replace a completed repeatable quest straight away

use super::{CompleteQuestRequest, CompletionHandler, CompletionResponse, RepeatableQuestGenerator};
use crate::profile::{ChangeRequirement, PlayerProfile};
use crate::quest_config::QuestConfig;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{debug, info};

/// Standing cost options for replacing a freshly generated quest
const CHANGE_STANDING_COSTS: [f64; 2] = [0.0, 0.01];

/// Completion handler decorator that generates a replacement quest
///
/// When enabled, completing an active repeatable quest appends a newly
/// generated quest of the same category before the host handler runs, and
/// the response carries the updated category so the client shows it at once.
/// When disabled, or when the quest is not an active repeatable, the host
/// handler runs alone.
pub struct InstantRepeatable<H, G> {
    inner: H,
    generator: G,
    config: Arc<QuestConfig>,
    enabled: bool,
    debug_logging: bool,
}

impl<H, G> InstantRepeatable<H, G>
where
    H: CompletionHandler,
    G: RepeatableQuestGenerator,
{
    pub fn new(inner: H, generator: G, config: Arc<QuestConfig>, enabled: bool) -> Self {
        InstantRepeatable {
            inner,
            generator,
            config,
            enabled,
            debug_logging: false,
        }
    }

    pub fn with_debug_logging(mut self, debug_logging: bool) -> Self {
        self.debug_logging = debug_logging;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Generate and append a replacement for `quest_id`
    ///
    /// Returns the name of the category that received the new quest.
    fn regenerate(&self, profile: &mut PlayerProfile, quest_id: &str, session_id: &str) -> Option<String> {
        let level = profile.level;
        let Some(category) = profile.category_with_active_quest_mut(quest_id) else {
            debug!("Quest {} is not an active repeatable quest, nothing to replace", quest_id);
            return None;
        };

        let Some(config) = self.config.by_name(&category.name) else {
            debug!("No repeatable quest config named {}", category.name);
            return None;
        };

        let mut pool = self.generator.generate_quest_pool(config, level);
        let Some(mut quest) = self.generator.generate_quest(session_id, level, &mut pool, config) else {
            debug!("Generator produced no replacement for {} quest {}", category.name, quest_id);
            return None;
        };
        quest.side = config.side;

        let standing_cost = CHANGE_STANDING_COSTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default();
        category.change_requirement.insert(
            quest.id.clone(),
            ChangeRequirement {
                change_cost: quest.change_cost.clone(),
                change_standing_cost: standing_cost,
            },
        );

        if self.debug_logging {
            info!("Generated replacement {} quest {} for {}", category.name, quest.id, quest_id);
        }
        category.active_quests.push(quest);

        Some(category.name.clone())
    }
}

impl<H, G> CompletionHandler for InstantRepeatable<H, G>
where
    H: CompletionHandler,
    G: RepeatableQuestGenerator,
{
    fn complete_quest(
        &self,
        profile: &mut PlayerProfile,
        request: &CompleteQuestRequest,
        session_id: &str,
    ) -> CompletionResponse {
        if !self.enabled {
            return self.inner.complete_quest(profile, request, session_id);
        }

        let replaced = self.regenerate(profile, &request.quest_id, session_id);
        let mut response = self.inner.complete_quest(profile, request, session_id);

        if let Some(category) = replaced.and_then(|name| profile.category(&name)) {
            response.repeatable_quests = vec![category.clone()];
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::QuestTypePool;
    use crate::profile::{ChangeCost, RepeatableQuest, RepeatableQuestCategory};
    use crate::quest_config::{fixtures, RepeatableQuestConfig};
    use crate::types::{QuestType, Side};
    use serde_json::Map;
    use std::cell::Cell;

    struct FirstTypeGenerator {
        calls: Cell<u32>,
    }

    impl RepeatableQuestGenerator for FirstTypeGenerator {
        fn generate_quest(
            &self,
            _session_id: &str,
            _pmc_level: u32,
            pool: &mut QuestTypePool,
            config: &RepeatableQuestConfig,
        ) -> Option<RepeatableQuest> {
            self.calls.set(self.calls.get() + 1);
            let quest_type = *pool.types.first()?;
            Some(RepeatableQuest {
                id: format!("generated-{}", self.calls.get()),
                trader_id: config.trader_whitelist.first()?.trader_id.clone(),
                quest_type,
                side: Side::Pmc,
                change_cost: vec![ChangeCost {
                    template_id: "5449016a4bdc2d6f028b456f".to_string(),
                    count: 5000,
                }],
                extra: Map::new(),
            })
        }
    }

    struct EmptyGenerator;

    impl RepeatableQuestGenerator for EmptyGenerator {
        fn generate_quest(
            &self,
            _session_id: &str,
            _pmc_level: u32,
            _pool: &mut QuestTypePool,
            _config: &RepeatableQuestConfig,
        ) -> Option<RepeatableQuest> {
            None
        }
    }

    fn quest(id: &str) -> RepeatableQuest {
        RepeatableQuest {
            id: id.to_string(),
            trader_id: "579dc571d53a0658a154fbec".to_string(),
            quest_type: QuestType::Completion,
            side: Side::Scav,
            change_cost: Vec::new(),
            extra: Map::new(),
        }
    }

    fn profile() -> PlayerProfile {
        PlayerProfile {
            id: "pmc1".to_string(),
            level: 30,
            repeatable_quests: vec![
                RepeatableQuestCategory {
                    name: "Daily".to_string(),
                    active_quests: vec![quest("d1"), quest("d2")],
                    ..Default::default()
                },
                RepeatableQuestCategory {
                    name: "Daily_Savage".to_string(),
                    active_quests: vec![quest("s1")],
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    /// Host handler that removes the completed quest, as the host does
    fn host_handler(
        profile: &mut PlayerProfile,
        request: &CompleteQuestRequest,
        _session_id: &str,
    ) -> CompletionResponse {
        for category in profile.repeatable_quests.iter_mut() {
            category.active_quests.retain(|q| q.id != request.quest_id);
        }
        CompletionResponse::default()
    }

    fn request(quest_id: &str) -> CompleteQuestRequest {
        CompleteQuestRequest {
            quest_id: quest_id.to_string(),
            remove_excess_items: false,
        }
    }

    #[test]
    fn test_completed_quest_is_replaced() {
        let generator = FirstTypeGenerator { calls: Cell::new(0) };
        let hook = InstantRepeatable::new(host_handler, generator, Arc::new(fixtures::quest_config()), true);

        let mut profile = profile();
        let response = hook.complete_quest(&mut profile, &request("s1"), "session");

        let scav = profile.category("Daily_Savage").unwrap();
        assert_eq!(scav.active_quests.len(), 1);
        let replacement = &scav.active_quests[0];
        assert_eq!(replacement.id, "generated-1");
        assert_eq!(replacement.side, Side::Scav);

        let requirement = &scav.change_requirement["generated-1"];
        assert_eq!(requirement.change_cost.len(), 1);
        assert!(CHANGE_STANDING_COSTS.contains(&requirement.change_standing_cost));

        assert_eq!(response.repeatable_quests.len(), 1);
        assert_eq!(&response.repeatable_quests[0], scav);
        assert_eq!(profile.category("Daily").unwrap().active_quests.len(), 2);
    }

    #[test]
    fn test_unknown_quest_falls_through() {
        let generator = FirstTypeGenerator { calls: Cell::new(0) };
        let hook = InstantRepeatable::new(host_handler, generator, Arc::new(fixtures::quest_config()), true);

        let mut profile = profile();
        let response = hook.complete_quest(&mut profile, &request("story-quest"), "session");

        assert!(response.repeatable_quests.is_empty());
        assert_eq!(hook.generator.calls.get(), 0);
        assert_eq!(profile.category("Daily").unwrap().active_quests.len(), 2);
    }

    #[test]
    fn test_disabled_only_delegates() {
        let generator = FirstTypeGenerator { calls: Cell::new(0) };
        let hook = InstantRepeatable::new(host_handler, generator, Arc::new(fixtures::quest_config()), false);

        let mut profile = profile();
        let response = hook.complete_quest(&mut profile, &request("d1"), "session");

        assert!(response.repeatable_quests.is_empty());
        assert_eq!(profile.category("Daily").unwrap().active_quests.len(), 1);
        assert_eq!(hook.generator.calls.get(), 0);
    }

    #[test]
    fn test_generator_failure_falls_through() {
        let hook = InstantRepeatable::new(host_handler, EmptyGenerator, Arc::new(fixtures::quest_config()), true);

        let mut profile = profile();
        let response = hook.complete_quest(&mut profile, &request("d2"), "session");

        assert!(response.repeatable_quests.is_empty());
        let daily = profile.category("Daily").unwrap();
        assert_eq!(daily.active_quests.len(), 1);
        assert!(daily.change_requirement.is_empty());
    }

    #[test]
    fn test_category_without_config_falls_through() {
        let generator = FirstTypeGenerator { calls: Cell::new(0) };
        let hook = InstantRepeatable::new(host_handler, generator, Arc::new(fixtures::quest_config()), true);

        let mut profile = profile();
        profile.repeatable_quests[0].name = "Monthly".to_string();
        let response = hook.complete_quest(&mut profile, &request("d1"), "session");

        assert!(response.repeatable_quests.is_empty());
        assert_eq!(hook.generator.calls.get(), 0);
    }
}
