//! SettingsApplier - Validated mutation of the host quest configuration
//!
//! Every field group is validated and applied on its own. A rejected group
//! leaves the host values untouched and never blocks the other groups.

use crate::config::Settings;
use crate::error::ApplyError;
use crate::quest_config::{QuestConfig, RepeatableQuestConfig, RewardScaling};
use crate::resolver::{QuestTypeResolver, TypeAssignment};
use crate::types::QuestCategory;
use std::fmt;
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::{error, info};

/// Accepted range for every reward multiplier
pub const MULTIPLIER_RANGE: RangeInclusive<f64> = 0.01..=5.0;
/// Accepted range for quests offered per reset
pub const NUMBER_OF_QUESTS_RANGE: RangeInclusive<i64> = 1..=15;
/// Lowest accepted minimum player level
pub const MIN_PLAYER_LEVEL: i64 = 1;
/// Shortest accepted reset timer, in seconds
pub const MIN_RESET_TIMER: i64 = 3600;

/// A group of settings validated and applied together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    XpMultiplier,
    CurrencyMultiplier,
    ReputationMultiplier,
    SkillRewardChanceMultiplier,
    SkillPointRewardMultiplier,
    MinPlayerLevel,
    NumberOfQuests,
    ResetTimer,
}

/// A reward multiplier setting and the reward arrays it scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplier {
    Experience,
    Currency,
    Reputation,
    SkillRewardChance,
    SkillPointReward,
}

impl Multiplier {
    pub fn all() -> &'static [Multiplier] {
        &[
            Multiplier::Experience,
            Multiplier::Currency,
            Multiplier::Reputation,
            Multiplier::SkillRewardChance,
            Multiplier::SkillPointReward,
        ]
    }

    /// Field group errors and outcomes are reported under
    pub fn group(&self) -> FieldGroup {
        match self {
            Multiplier::Experience => FieldGroup::XpMultiplier,
            Multiplier::Currency => FieldGroup::CurrencyMultiplier,
            Multiplier::Reputation => FieldGroup::ReputationMultiplier,
            Multiplier::SkillRewardChance => FieldGroup::SkillRewardChanceMultiplier,
            Multiplier::SkillPointReward => FieldGroup::SkillPointRewardMultiplier,
        }
    }

    /// Whether scaled values are rounded to whole numbers
    ///
    /// Experience and currency are discrete amounts; reputation and skill
    /// rewards stay fractional.
    pub fn rounds(&self) -> bool {
        matches!(self, Multiplier::Experience | Multiplier::Currency)
    }

    pub fn value(&self, settings: &Settings) -> Option<f64> {
        match self {
            Multiplier::Experience => settings.xp_multiplier,
            Multiplier::Currency => settings.currency_multiplier,
            Multiplier::Reputation => settings.rep_multiplier,
            Multiplier::SkillRewardChance => settings.skill_reward_chance_multiplier,
            Multiplier::SkillPointReward => settings.skill_point_reward_multiplier,
        }
    }

    fn scaled_arrays<'a>(&self, scaling: &'a mut RewardScaling) -> Vec<&'a mut Vec<f64>> {
        match self {
            Multiplier::Experience => vec![&mut scaling.experience],
            Multiplier::Currency => vec![&mut scaling.roubles, &mut scaling.gp_coins],
            Multiplier::Reputation => vec![&mut scaling.reputation],
            Multiplier::SkillRewardChance => vec![&mut scaling.skill_reward_chance],
            Multiplier::SkillPointReward => vec![&mut scaling.skill_point_reward],
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldGroup::XpMultiplier => "XP Multiplier",
            FieldGroup::CurrencyMultiplier => "Currency Multiplier",
            FieldGroup::ReputationMultiplier => "Reputation Multiplier",
            FieldGroup::SkillRewardChanceMultiplier => "Skill Reward Chance Multiplier",
            FieldGroup::SkillPointRewardMultiplier => "Skill Point Reward Multiplier",
            FieldGroup::MinPlayerLevel => "Minimum Player Level",
            FieldGroup::NumberOfQuests => "Number of Quests",
            FieldGroup::ResetTimer => "Reset Timer",
        };
        f.write_str(name)
    }
}

/// Result of applying one field group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOutcome {
    /// Values were written to the host configuration
    Applied,
    /// Valid setting that leaves the host values as they are (multiplier of 1)
    Unchanged,
}

/// Summary of one settings pass
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    /// Field groups written to the host configuration
    pub applied: Vec<FieldGroup>,
    /// Field groups that were valid but had nothing to change
    pub unchanged: Vec<FieldGroup>,
    /// Categories whose quest types were replaced
    pub quest_types: Vec<QuestCategory>,
    /// Everything that was rejected, one entry per skipped group or category
    pub errors: Vec<ApplyError>,
    /// Wall time of the pass
    pub elapsed: Duration,
}

impl ApplyReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors reported for a field group
    pub fn errors_for(&self, group: FieldGroup) -> usize {
        self.errors
            .iter()
            .filter(|e| matches!(e, ApplyError::Validation { group: g, .. } if *g == group))
            .count()
    }

    fn record(&mut self, group: FieldGroup, result: Result<GroupOutcome, ApplyError>) {
        match result {
            Ok(GroupOutcome::Applied) => self.applied.push(group),
            Ok(GroupOutcome::Unchanged) => self.unchanged.push(group),
            Err(e) => self.reject(e),
        }
    }

    fn reject(&mut self, err: ApplyError) {
        error!("{}", err);
        self.errors.push(err);
    }
}

/// Applies validated settings to the host quest configuration
pub struct SettingsApplier<'a> {
    settings: &'a Settings,
}

impl<'a> SettingsApplier<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        SettingsApplier { settings }
    }

    /// Run every field group against the configuration
    pub fn apply(&self, config: &mut QuestConfig) -> ApplyReport {
        let mut report = ApplyReport::default();

        self.apply_quest_types(config, &mut report);

        for multiplier in Multiplier::all() {
            report.record(multiplier.group(), self.apply_multiplier(*multiplier, config));
        }
        report.record(FieldGroup::MinPlayerLevel, self.apply_min_player_level(config));
        report.record(FieldGroup::NumberOfQuests, self.apply_number_of_quests(config));
        report.record(FieldGroup::ResetTimer, self.apply_reset_timer(config));

        report
    }

    /// Replace the allowed quest types of every category that resolves
    pub fn apply_quest_types(&self, config: &mut QuestConfig, report: &mut ApplyReport) {
        let resolved = match QuestTypeResolver::new(self.settings).resolve_all() {
            Ok(resolved) => resolved,
            Err(e) => {
                report.reject(e);
                return;
            }
        };

        for (category, assignment) in resolved {
            let assignment = match assignment {
                Ok(assignment) => assignment,
                Err(e) => {
                    report.reject(e);
                    continue;
                }
            };

            match config.category_mut(category) {
                Some(target) => {
                    self.assign_types(category, target, &assignment);
                    report.quest_types.push(category);
                }
                None => report.reject(ApplyError::MissingCategory(category)),
            }
        }
    }

    fn assign_types(
        &self,
        category: QuestCategory,
        target: &mut RepeatableQuestConfig,
        assignment: &TypeAssignment,
    ) {
        target.types = assignment.types();
        if self.settings.debug_logging {
            info!("Setting {} repeatable quest types: {:?}", category, target.types);
        }

        for (index, trader) in target.trader_whitelist.iter_mut().enumerate() {
            trader.quest_types = assignment.trader_types(category, index);
            if self.settings.debug_logging {
                info!(
                    "Set [{}] Trader [{}] Quest Types to: {:?}",
                    target.name, trader.name, trader.quest_types
                );
            }
        }
    }

    /// Scale the reward arrays a multiplier covers, in every category
    pub fn apply_multiplier(
        &self,
        multiplier: Multiplier,
        config: &mut QuestConfig,
    ) -> Result<GroupOutcome, ApplyError> {
        let group = multiplier.group();
        let factor = validate_multiplier(group, multiplier.value(self.settings))?;
        if factor == 1.0 {
            return Ok(GroupOutcome::Unchanged);
        }

        for target in config.repeatable_quests.iter_mut() {
            for values in multiplier.scaled_arrays(&mut target.reward_scaling) {
                scale_rewards(values, factor, multiplier.rounds());
            }
            if self.settings.debug_logging {
                info!("{} set for: [{}]. Scaling: {:?}", group, target.name, target.reward_scaling);
            }
        }

        Ok(GroupOutcome::Applied)
    }

    /// Set the minimum player level of all three categories
    pub fn apply_min_player_level(&self, config: &mut QuestConfig) -> Result<GroupOutcome, ApplyError> {
        let levels = self.joint_values(FieldGroup::MinPlayerLevel, config, Settings::min_player_level, |v| {
            v >= MIN_PLAYER_LEVEL && v <= u32::MAX as i64
        })?;

        for (category, level) in levels {
            if let Some(target) = config.category_mut(category) {
                target.min_player_level = level as u32;
                self.log_joint(FieldGroup::MinPlayerLevel, target, level);
            }
        }
        Ok(GroupOutcome::Applied)
    }

    /// Set the number of quests offered per reset for all three categories
    pub fn apply_number_of_quests(&self, config: &mut QuestConfig) -> Result<GroupOutcome, ApplyError> {
        let counts = self.joint_values(FieldGroup::NumberOfQuests, config, Settings::number_of_quests, |v| {
            NUMBER_OF_QUESTS_RANGE.contains(&v)
        })?;

        for (category, count) in counts {
            if let Some(target) = config.category_mut(category) {
                target.num_quests = count as u32;
                self.log_joint(FieldGroup::NumberOfQuests, target, count);
            }
        }
        Ok(GroupOutcome::Applied)
    }

    /// Set the reset timer of all three categories
    pub fn apply_reset_timer(&self, config: &mut QuestConfig) -> Result<GroupOutcome, ApplyError> {
        let timers = self.joint_values(FieldGroup::ResetTimer, config, Settings::reset_timer, |v| {
            v >= MIN_RESET_TIMER
        })?;

        for (category, seconds) in timers {
            if let Some(target) = config.category_mut(category) {
                target.reset_time = seconds as u64;
                self.log_joint(FieldGroup::ResetTimer, target, seconds);
            }
        }
        Ok(GroupOutcome::Applied)
    }

    /// Collect one whole value per category, all of which must pass `valid`
    fn joint_values(
        &self,
        group: FieldGroup,
        config: &QuestConfig,
        value_of: fn(&Settings, QuestCategory) -> Option<f64>,
        valid: impl Fn(i64) -> bool,
    ) -> Result<Vec<(QuestCategory, i64)>, ApplyError> {
        let mut values = Vec::with_capacity(3);
        for category in QuestCategory::all() {
            let raw = value_of(self.settings, *category);
            let value = raw.and_then(whole_number).filter(|v| valid(*v)).ok_or_else(|| {
                ApplyError::validation(
                    group,
                    format!(
                        "{} value {} is not a whole number or is out of acceptable range.",
                        category,
                        describe(raw)
                    ),
                )
            })?;
            if config.category(*category).is_none() {
                return Err(ApplyError::MissingCategory(*category));
            }
            values.push((*category, value));
        }
        Ok(values)
    }

    fn log_joint(&self, group: FieldGroup, target: &RepeatableQuestConfig, value: i64) {
        if self.settings.debug_logging {
            info!("{} set for: [{}]. Value: {}", group, target.name, value);
        }
    }
}

/// Check a multiplier is present and inside [`MULTIPLIER_RANGE`]
pub fn validate_multiplier(group: FieldGroup, value: Option<f64>) -> Result<f64, ApplyError> {
    match value {
        Some(v) if MULTIPLIER_RANGE.contains(&v) => Ok(v),
        other => Err(ApplyError::validation(
            group,
            format!(
                "Must be between 0.01 - 5, got {}. Value out of acceptable range.",
                describe(other)
            ),
        )),
    }
}

/// Multiply every reward tier by `factor`
pub fn scale_rewards(values: &mut [f64], factor: f64, round: bool) {
    for value in values.iter_mut() {
        let scaled = *value * factor;
        *value = if round { scaled.round() } else { scaled };
    }
}

/// `value` as an integer when it has no fractional part
fn whole_number(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

fn describe<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "nothing".to_string(), |v| v.to_string())
}
