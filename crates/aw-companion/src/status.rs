//! Read model aggregating a character for display.

use aw_mechanics::{ConcentrationStatus, LifeCondition, SlotCount, SpellLevel};
use serde::Serialize;

use crate::system::RulesSystem;

/// Hit points as reported in the status aggregate.
///
/// Hit points are not derived by the facade yet, so the only value is an
/// explicit marker rather than a number that looks real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HitPointReadout {
    /// Not derived from the stats calculator.
    NotWired,
}

/// One spell level's slot counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpellSlotStatus {
    /// Spell level.
    pub level: SpellLevel,
    /// Counts at that level.
    #[serde(flatten)]
    pub count: SlotCount,
}

/// Death-save readout built from the tracker's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeathSaveSummary {
    /// Dead wins over stable; otherwise dying.
    pub condition: LifeCondition,
    /// Successful saves.
    pub successes: u32,
    /// Failed saves.
    pub failures: u32,
}

/// Everything a character sheet header shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterStatus {
    /// Active rules system.
    pub system: RulesSystem,
    /// Shared level.
    pub level: u32,
    /// Hit points.
    pub hit_points: HitPointReadout,
    /// Unarmored, shieldless armor class under the active system.
    pub armor_class: i32,
    /// Concentration projection.
    pub concentration: ConcentrationStatus,
    /// Slots for spell levels 1 through 9.
    pub spell_slots: Vec<SpellSlotStatus>,
    /// Death-save readout.
    pub death_saves: DeathSaveSummary,
}
