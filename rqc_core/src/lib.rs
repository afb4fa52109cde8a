//! rqc_core - Repeatable quest settings engine
//!
//! This library provides:
//! - Settings: typed user settings loaded from JSON, JSONC or TOML
//! - QuestTypeResolver: fixed or validated per-category quest types
//! - SettingsApplier: range-checked mutation of the host quest configuration
//! - Hooks: decorators for the host's completion handler and scav unlock rule

pub mod applier;
pub mod config;
pub mod error;
pub mod hooks;
pub mod plugin;
pub mod prelude;
pub mod profile;
pub mod quest_config;
pub mod resolver;
pub mod types;

// Re-export core types for convenience
pub use applier::{ApplyReport, FieldGroup, GroupOutcome, Multiplier, SettingsApplier};
pub use config::{default_settings, load_settings, ConfigError, Settings};
pub use error::ApplyError;
pub use hooks::{
    CompleteQuestRequest, CompletionHandler, CompletionResponse, FenceUnlockOverride, InstantRepeatable,
    IntelCenterRule, QuestTypePool, RepeatableQuestGenerator, ScavDailyUnlock,
};
pub use plugin::RepeatableQuestCustomizer;
pub use profile::{PlayerProfile, RepeatableQuest, RepeatableQuestCategory};
pub use quest_config::{QuestConfig, RepeatableQuestConfig, RewardScaling, TraderWhitelist};
pub use resolver::{QuestTypeResolver, TypeAssignment, TypeMode};
pub use types::{QuestCategory, QuestType, Side};
