//! Quest type resolution
//!
//! Decides which quest types each category is allowed to generate, either a
//! single forced type or a validated per-category list.

use crate::config::Settings;
use crate::error::ApplyError;
use crate::types::{QuestCategory, QuestType};

/// Whitelist position of the trader that cannot offer elimination quests
pub const NO_ELIMINATION_TRADER_INDEX: usize = 4;

/// How quest types are selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMode {
    /// One type forced for every category
    Fixed(QuestType),
    /// A validated list per category
    Randomized,
}

/// Quest types resolved for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeAssignment {
    Fixed(QuestType),
    Randomized(Vec<QuestType>),
}

impl TypeAssignment {
    /// Types for the category as a whole
    pub fn types(&self) -> Vec<QuestType> {
        match self {
            TypeAssignment::Fixed(ty) => vec![*ty],
            TypeAssignment::Randomized(types) => types.clone(),
        }
    }

    /// Types for the trader at `index` of the category's whitelist
    pub fn trader_types(&self, category: QuestCategory, index: usize) -> Vec<QuestType> {
        let restricted = category != QuestCategory::Fence && index == NO_ELIMINATION_TRADER_INDEX;
        if !restricted {
            return self.types();
        }

        match self {
            TypeAssignment::Fixed(QuestType::Elimination) => Vec::new(),
            TypeAssignment::Fixed(ty) => vec![*ty],
            TypeAssignment::Randomized(types) => types
                .iter()
                .copied()
                .filter(|ty| *ty != QuestType::Elimination)
                .collect(),
        }
    }
}

/// Resolved assignment (or the reason it was rejected) per category
pub type CategoryAssignments = Vec<(QuestCategory, Result<TypeAssignment, ApplyError>)>;

/// Resolves quest types from user settings
pub struct QuestTypeResolver<'a> {
    settings: &'a Settings,
}

impl<'a> QuestTypeResolver<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        QuestTypeResolver { settings }
    }

    /// Work out the selection mode
    ///
    /// Exactly one of the two mode flags must be set, and in fixed mode
    /// exactly one of the `*Only` flags.
    pub fn mode(&self) -> Result<TypeMode, ApplyError> {
        let s = self.settings;
        match (s.use_specific_quest_type, s.use_random_quest_type) {
            (true, false) => self.fixed_type().map(TypeMode::Fixed).ok_or_else(|| {
                ApplyError::resolution(
                    "Exactly one of completionOnly, explorationOnly or eliminationOnly must be enabled. Loading default quest types instead.",
                )
            }),
            (false, true) => Ok(TypeMode::Randomized),
            (true, true) => Err(ApplyError::resolution(
                "useSpecificQuestType and useRandomQuestType are both enabled. No changes have been made to any quest types.",
            )),
            (false, false) => Err(ApplyError::resolution(
                "Neither useSpecificQuestType nor useRandomQuestType is enabled. No changes have been made to any quest types.",
            )),
        }
    }

    /// The single forced type, if exactly one `*Only` flag is set
    pub fn fixed_type(&self) -> Option<QuestType> {
        let s = self.settings;
        let flags = [
            (s.completion_only, QuestType::Completion),
            (s.exploration_only, QuestType::Exploration),
            (s.elimination_only, QuestType::Elimination),
        ];

        let mut enabled = flags.iter().filter(|(on, _)| *on).map(|(_, ty)| *ty);
        match (enabled.next(), enabled.next()) {
            (Some(ty), None) => Some(ty),
            _ => None,
        }
    }

    /// Resolve the assignment for every category
    ///
    /// The outer error covers problems that affect all categories at once
    /// (mode flags, fixed type flags). In randomized mode each category is
    /// validated on its own.
    pub fn resolve_all(&self) -> Result<CategoryAssignments, ApplyError> {
        let mode = self.mode()?;
        Ok(QuestCategory::all()
            .iter()
            .map(|category| (*category, self.resolve_with(mode, *category)))
            .collect())
    }

    /// Resolve the assignment for one category
    pub fn resolve(&self, category: QuestCategory) -> Result<TypeAssignment, ApplyError> {
        let mode = self.mode()?;
        self.resolve_with(mode, category)
    }

    fn resolve_with(
        &self,
        mode: TypeMode,
        category: QuestCategory,
    ) -> Result<TypeAssignment, ApplyError> {
        match mode {
            TypeMode::Fixed(ty) => Ok(TypeAssignment::Fixed(ty)),
            TypeMode::Randomized => {
                let names = self.settings.types(category).ok_or_else(|| {
                    ApplyError::resolution(format!(
                        "Validation failed for [{}]. Setting is missing.",
                        category.types_key()
                    ))
                })?;
                validate_types(category, names).map(TypeAssignment::Randomized)
            }
        }
    }
}

/// Validate a user supplied type list for a category
///
/// The list must be non-empty, contain only types the category allows and
/// contain no duplicates.
pub fn validate_types(category: QuestCategory, names: &[String]) -> Result<Vec<QuestType>, ApplyError> {
    let key = category.types_key();
    if names.is_empty() {
        return Err(ApplyError::resolution(format!(
            "Validation failed for [{}]. At least one quest type is required.",
            key
        )));
    }

    let mut types = Vec::with_capacity(names.len());
    for name in names {
        let ty = QuestType::from_name(name)
            .filter(|ty| category.allowed_types().contains(ty))
            .ok_or_else(|| {
                ApplyError::resolution(format!(
                    "Validation failed for [{}]. '{}' is not a valid {} quest type.",
                    key, name, category
                ))
            })?;

        if types.contains(&ty) {
            return Err(ApplyError::resolution(format!(
                "Validation failed for [{}]. '{}' is listed more than once.",
                key, name
            )));
        }
        types.push(ty);
    }

    Ok(types)
}
