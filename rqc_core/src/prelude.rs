//! Prelude module for convenient imports
//!
//! ```rust
//! use rqc_core::prelude::*;
//! ```

// Settings
pub use crate::config::{default_settings, load_settings, Settings};

// Host records
pub use crate::profile::{PlayerProfile, RepeatableQuest};
pub use crate::quest_config::{QuestConfig, RepeatableQuestConfig};

// Engine
pub use crate::applier::{ApplyReport, SettingsApplier};
pub use crate::plugin::RepeatableQuestCustomizer;
pub use crate::resolver::QuestTypeResolver;

// Hooks
pub use crate::hooks::{CompletionHandler, RepeatableQuestGenerator, ScavDailyUnlock};

// Core types
pub use crate::types::{QuestCategory, QuestType, Side};
