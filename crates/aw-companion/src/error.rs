//! Error types for the character facade.

use aw_mechanics::MechError;
use thiserror::Error;

/// Result type for facade operations.
pub type CompanionResult<T> = Result<T, CompanionError>;

/// Errors raised while building or adjusting a dual-system character.
///
/// Derived queries on the facade never fail; these only come from parsing
/// caller-supplied records and labels.
#[derive(Debug, Error)]
pub enum CompanionError {
    /// A mechanics label (skill, ability, die) was rejected.
    #[error(transparent)]
    Mechanics(#[from] MechError),

    /// A rules-system name was not recognised.
    #[error("unknown rules system: {0}")]
    UnknownSystem(String),

    /// A character or config document was not valid JSON for its shape.
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}
