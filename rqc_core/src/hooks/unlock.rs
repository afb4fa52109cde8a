//! Scav daily unlock rule and its override

use super::ScavDailyUnlock;
use crate::profile::{PlayerProfile, INTEL_CENTER_AREA};

/// The host's default rule: scav dailies unlock with the Intel Center
#[derive(Debug, Clone, Copy, Default)]
pub struct IntelCenterRule;

impl ScavDailyUnlock for IntelCenterRule {
    fn has_unlocked_scav_dailies(&self, profile: &PlayerProfile) -> bool {
        profile.hideout_area_level(INTEL_CENTER_AREA) >= 1
    }
}

/// Unlock rule decorator that can drop the Intel Center requirement
#[derive(Debug, Clone)]
pub struct FenceUnlockOverride<R> {
    inner: R,
    remove_requirement: bool,
}

impl<R: ScavDailyUnlock> FenceUnlockOverride<R> {
    pub fn new(inner: R, remove_requirement: bool) -> Self {
        FenceUnlockOverride {
            inner,
            remove_requirement,
        }
    }
}

impl<R: ScavDailyUnlock> ScavDailyUnlock for FenceUnlockOverride<R> {
    fn has_unlocked_scav_dailies(&self, profile: &PlayerProfile) -> bool {
        self.remove_requirement || self.inner.has_unlocked_scav_dailies(profile)
    }
}
