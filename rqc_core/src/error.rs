//! Errors raised while applying settings to the host configuration
//!
//! None of these abort the pass. The affected group is skipped, the error is
//! logged and collected into the [`ApplyReport`](crate::applier::ApplyReport).

use crate::applier::FieldGroup;
use crate::types::QuestCategory;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplyError {
    #[error("Unable to set {group}. {reason}")]
    Validation { group: FieldGroup, reason: String },
    #[error("Unable to set quest types. {0}")]
    Resolution(String),
    #[error("Host quest config has no {0} category")]
    MissingCategory(QuestCategory),
}

impl ApplyError {
    pub fn validation(group: FieldGroup, reason: impl Into<String>) -> Self {
        ApplyError::Validation {
            group,
            reason: reason.into(),
        }
    }

    pub fn resolution(reason: impl Into<String>) -> Self {
        ApplyError::Resolution(reason.into())
    }
}
