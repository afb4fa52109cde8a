//! Plugin entry points driven by the host's load phases

use crate::applier::{ApplyReport, SettingsApplier};
use crate::config::{self, ConfigError, Settings};
use crate::hooks::{
    CompletionHandler, FenceUnlockOverride, InstantRepeatable, RepeatableQuestGenerator, ScavDailyUnlock,
};
use crate::quest_config::QuestConfig;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Name used in log lines
pub const MOD_NAME: &str = "RepeatableQuestCustomizer";

/// The repeatable quest customizer, built once from its settings
#[derive(Debug, Clone)]
pub struct RepeatableQuestCustomizer {
    settings: Settings,
}

impl RepeatableQuestCustomizer {
    pub fn new(settings: Settings) -> Self {
        RepeatableQuestCustomizer { settings }
    }

    /// Load settings from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(config::load_settings(path)?))
    }

    /// Load settings from the first settings file found in `dir`
    pub fn from_config_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = config::find_settings_file(dir)?;
        debug!("[{}] Loading settings from {:?}", MOD_NAME, path);
        Self::from_file(&path)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// One-time mutation pass over the host quest configuration
    pub fn post_db_load(&self, config: &mut QuestConfig) -> ApplyReport {
        let start = Instant::now();
        let mut report = SettingsApplier::new(&self.settings).apply(config);
        report.elapsed = start.elapsed();

        debug!("[{}] loaded...", MOD_NAME);
        info!(
            "[{}] Configuration took {:.3}ms.",
            MOD_NAME,
            report.elapsed.as_secs_f64() * 1000.0
        );
        report
    }

    /// Wrap the host completion handler with instant regeneration
    ///
    /// The wrapper only regenerates when `instantlyReceiveNewRepeatable` is on.
    pub fn completion_handler<H, G>(
        &self,
        inner: H,
        generator: G,
        config: Arc<QuestConfig>,
    ) -> InstantRepeatable<H, G>
    where
        H: CompletionHandler,
        G: RepeatableQuestGenerator,
    {
        InstantRepeatable::new(
            inner,
            generator,
            config,
            self.settings.instantly_receive_new_repeatable,
        )
        .with_debug_logging(self.settings.debug_logging)
    }

    /// Wrap the host scav-dailies unlock rule
    pub fn scav_unlock_rule<R: ScavDailyUnlock>(&self, inner: R) -> FenceUnlockOverride<R> {
        FenceUnlockOverride::new(inner, self.settings.remove_intel_center_requirement)
    }
}
