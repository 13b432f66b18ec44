//! Dual-system character facade for the Awakened campaign companion.
//!
//! Wraps a native character record and its standard-system counterpart in
//! a single [`DualSystemCharacter`] whose queries answer from whichever
//! rules system is active. Configuration comes from [`CompanionConfig`].

pub mod character;
pub mod config;
pub mod error;
pub mod native;
pub mod status;
pub mod system;

pub use character::{DualSystemCharacter, SHARED_SKILLS, shared_skill};
pub use config::CompanionConfig;
pub use error::{CompanionError, CompanionResult};
pub use native::NativeCharacter;
pub use status::{CharacterStatus, DeathSaveSummary, HitPointReadout, SpellSlotStatus};
pub use system::RulesSystem;
