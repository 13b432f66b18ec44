//! Error types for the mechanics engine.

use crate::spell_slots::SpellLevel;

/// Errors that can occur during mechanics operations.
///
/// Derived-statistic calculations never fail; these errors only surface
/// when parsing labels supplied by callers or when spending a resource
/// that is not there.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A skill name could not be matched to any standard skill.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// An ability name could not be matched to either ability set.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// A die tag such as "d8" could not be parsed.
    #[error("invalid die: {0}")]
    InvalidDie(String),

    /// A spell level outside 1-9 was requested.
    #[error("invalid spell level: {0}")]
    InvalidSpellLevel(u8),

    /// A spell slot was spent at a level with none remaining.
    #[error("no {0} spell slots available")]
    NoSlotAvailable(SpellLevel),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
