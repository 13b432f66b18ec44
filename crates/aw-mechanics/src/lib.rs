//! Rules-system mechanics for the Awakened campaign companion.
//!
//! Provides the two parallel ability-score models (the native six-attribute
//! system and the standard d20 system), derived statistics for the standard
//! system, the concentration state machine, and the spell-slot and
//! death-save collaborators the character facade reads from.
//!
//! Every operation is a pure function over immutable values. The only
//! randomness enters through a caller-supplied [`DieRoller`].

pub mod ability;
pub mod concentration;
pub mod death_saves;
pub mod dice;
pub mod error;
pub mod spell_slots;
pub mod stats;

pub use ability::{Ability, AbilityScores, NativeAbilities, NativeAbility, to_native, to_standard};
pub use concentration::{
    ActiveConcentration, ConcentrationEffect, ConcentrationSave, ConcentrationState,
    ConcentrationStatus, DamageCheck, DamageOutcome,
};
pub use death_saves::{DeathSaveState, DeathSaveStatus, DeathSaveTracker, LifeCondition};
pub use dice::{Die, DieRoller, FixedRoller, RollMode};
pub use error::{MechError, MechResult};
pub use spell_slots::{
    SlotCount, SpellLedger, SpellLevel, SpellProgression, SpellSlotState, SpellcastingClass,
};
pub use stats::{
    Armor, ArmorCategory, Encumbrance, SavingThrowProficiency, Skill, SkillProficiency,
    StandardCharacter,
};
