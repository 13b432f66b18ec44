//! Spell slot ledgers.
//!
//! The character facade treats the ledger as an opaque collaborator behind
//! the [`SpellLedger`] trait: it builds one through the trait's factory and
//! only ever reads per-level slot counts from it. [`SpellSlotState`] is the
//! default ledger, covering full, half, third, pact and artificer
//! progressions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ability::Ability;
use crate::error::{MechError, MechResult};

/// A spell level from 1 to 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpellLevel(u8);

impl SpellLevel {
    /// Highest spell level.
    pub const MAX: u8 = 9;

    /// Every spell level, lowest first.
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Validate a spell level.
    pub fn new(level: u8) -> MechResult<Self> {
        if (1..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(MechError::InvalidSpellLevel(level))
        }
    }

    /// The numeric level.
    pub fn get(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for SpellLevel {
    type Error = MechError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<SpellLevel> for u8 {
    fn from(level: SpellLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for SpellLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level {}", self.0)
    }
}

/// How a class gains spell slots with level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellProgression {
    /// Full casters (wizard, cleric, ...).
    Full,
    /// Half casters (paladin, ranger): full table at half level, rounded up.
    Half,
    /// Third casters: full table at a third of level, rounded up.
    Third,
    /// Pact magic: a few slots, all at the pact level.
    Pact,
    /// Artificers: full table at half level, rounded up.
    Artificer,
}

/// The spellcasting profile a ledger is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingClass {
    /// Class name.
    pub name: String,
    /// Spellcasting ability.
    pub ability: Ability,
    /// Slot progression.
    pub progression: SpellProgression,
}

impl SpellcastingClass {
    /// Create a spellcasting profile.
    pub fn new(name: impl Into<String>, ability: Ability, progression: SpellProgression) -> Self {
        Self {
            name: name.into(),
            ability,
            progression,
        }
    }
}

/// Slot counts for one spell level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotCount {
    /// Slots granted.
    pub total: u32,
    /// Slots spent.
    pub used: u32,
    /// Slots left.
    pub available: u32,
}

/// Read surface of a spell slot ledger.
pub trait SpellLedger {
    /// Build a fresh ledger for a caster of the given level.
    fn initialize(level: u32, class: &SpellcastingClass) -> Self
    where
        Self: Sized;

    /// Counts for one spell level.
    fn slot(&self, level: SpellLevel) -> SlotCount;

    /// Counts for all nine levels, lowest first.
    fn status(&self) -> [SlotCount; 9] {
        SpellLevel::ALL.map(|level| self.slot(level))
    }
}

type SlotRow = [u32; 9];

const NO_SLOTS: SlotRow = [0; 9];

/// Slots per spell level for a full caster, indexed by class level - 1.
const FULL_CASTER: [SlotRow; 20] = [
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 2, 1, 1],
];

/// `(pact slot level, pact slots)` by class level - 1.
const PACT_MAGIC: [(u8, u32); 20] = [
    (1, 1),
    (1, 1),
    (2, 2),
    (2, 2),
    (3, 2),
    (3, 2),
    (4, 2),
    (4, 2),
    (5, 2),
    (5, 2),
    (5, 3),
    (5, 3),
    (5, 3),
    (5, 3),
    (5, 3),
    (5, 3),
    (5, 3),
    (5, 3),
    (5, 3),
    (5, 3),
];

fn full_caster_row(level: u32) -> SlotRow {
    level
        .checked_sub(1)
        .and_then(|i| FULL_CASTER.get(i as usize))
        .copied()
        .unwrap_or(NO_SLOTS)
}

fn pact_row(level: u32) -> SlotRow {
    let mut row = NO_SLOTS;
    if let Some(&(pact_level, slots)) = level
        .checked_sub(1)
        .and_then(|i| PACT_MAGIC.get(i as usize))
    {
        row[usize::from(pact_level - 1)] = slots;
    }
    row
}

fn slots_for(level: u32, progression: SpellProgression) -> SlotRow {
    match progression {
        SpellProgression::Full => full_caster_row(level),
        SpellProgression::Half | SpellProgression::Artificer => full_caster_row(level.div_ceil(2)),
        SpellProgression::Third => full_caster_row(level.div_ceil(3)),
        SpellProgression::Pact => pact_row(level),
    }
}

/// The default spell slot ledger.
///
/// Available slots are always derived as `total - used`, so the three
/// counts can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpellSlotState {
    total: SlotRow,
    used: SlotRow,
}

impl SpellSlotState {
    /// Slots granted at a level.
    pub fn total(&self, level: SpellLevel) -> u32 {
        self.total[level.index()]
    }

    /// Slots spent at a level.
    pub fn used(&self, level: SpellLevel) -> u32 {
        self.used[level.index()]
    }

    /// Slots left at a level.
    pub fn available(&self, level: SpellLevel) -> u32 {
        self.total(level).saturating_sub(self.used(level))
    }

    /// True if at least one slot of this level is left.
    pub fn can_cast(&self, level: SpellLevel) -> bool {
        self.available(level) > 0
    }

    /// Spend one slot of the given level.
    pub fn use_slot(mut self, level: SpellLevel) -> MechResult<Self> {
        if !self.can_cast(level) {
            return Err(MechError::NoSlotAvailable(level));
        }
        self.used[level.index()] += 1;
        debug!(level = level.get(), left = self.available(level), "spell slot spent");
        Ok(self)
    }

    /// Recover every slot (long rest).
    pub fn restore_all(mut self) -> Self {
        self.used = NO_SLOTS;
        debug!("all spell slots restored");
        self
    }

    /// Recover the slots of the highest level that has any (short rest
    /// for pact casters, whose slots all sit at one level).
    pub fn restore_pact(mut self) -> Self {
        if let Some(level) = SpellLevel::ALL.into_iter().rev().find(|&l| self.total(l) > 0) {
            self.used[level.index()] = 0;
            debug!(level = level.get(), "pact slots restored");
        }
        self
    }

    /// The highest level with a slot left.
    pub fn highest_available(&self) -> Option<SpellLevel> {
        SpellLevel::ALL.into_iter().rev().find(|&l| self.can_cast(l))
    }
}

impl SpellLedger for SpellSlotState {
    fn initialize(level: u32, class: &SpellcastingClass) -> Self {
        Self {
            total: slots_for(level, class.progression),
            used: NO_SLOTS,
        }
    }

    fn slot(&self, level: SpellLevel) -> SlotCount {
        SlotCount {
            total: self.total(level),
            used: self.used(level),
            available: self.available(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lvl(n: u8) -> SpellLevel {
        SpellLevel::new(n).unwrap()
    }

    fn caster(progression: SpellProgression) -> SpellcastingClass {
        SpellcastingClass::new("Test", Ability::Intelligence, progression)
    }

    fn totals(state: &SpellSlotState) -> Vec<u32> {
        state.status().iter().map(|s| s.total).collect()
    }

    #[test]
    fn spell_level_bounds() {
        assert!(SpellLevel::new(0).is_err());
        assert!(SpellLevel::new(10).is_err());
        assert_eq!(lvl(9).get(), 9);
        assert_eq!(lvl(3).to_string(), "level 3");
    }

    #[test]
    fn full_caster_level_five() {
        let s = SpellSlotState::initialize(5, &caster(SpellProgression::Full));
        assert_eq!(totals(&s), vec![4, 3, 2, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn full_caster_level_twenty() {
        let s = SpellSlotState::initialize(20, &caster(SpellProgression::Full));
        assert_eq!(totals(&s), vec![4, 3, 3, 3, 3, 2, 2, 1, 1]);
    }

    #[test]
    fn out_of_table_levels_have_no_slots() {
        for level in [0, 21, 99] {
            let s = SpellSlotState::initialize(level, &caster(SpellProgression::Full));
            assert!(totals(&s).iter().all(|&t| t == 0));
        }
    }

    #[test]
    fn half_and_third_casters_round_up() {
        let half = SpellSlotState::initialize(5, &caster(SpellProgression::Half));
        assert_eq!(totals(&half), vec![4, 2, 0, 0, 0, 0, 0, 0, 0]);
        let artificer = SpellSlotState::initialize(5, &caster(SpellProgression::Artificer));
        assert_eq!(totals(&artificer), totals(&half));
        let third = SpellSlotState::initialize(7, &caster(SpellProgression::Third));
        assert_eq!(totals(&third), vec![4, 2, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn pact_slots_sit_at_pact_level() {
        let s = SpellSlotState::initialize(11, &caster(SpellProgression::Pact));
        assert_eq!(totals(&s), vec![0, 0, 0, 0, 3, 0, 0, 0, 0]);
        let s = SpellSlotState::initialize(1, &caster(SpellProgression::Pact));
        assert_eq!(totals(&s), vec![1, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn using_slots_until_empty() {
        let s = SpellSlotState::initialize(3, &caster(SpellProgression::Full));
        let s = s.use_slot(lvl(2)).unwrap();
        assert_eq!(
            s.slot(lvl(2)),
            SlotCount {
                total: 2,
                used: 1,
                available: 1
            }
        );
        let s = s.use_slot(lvl(2)).unwrap();
        assert!(!s.can_cast(lvl(2)));
        let err = s.use_slot(lvl(2)).unwrap_err();
        assert_eq!(err.to_string(), "no level 2 spell slots available");
    }

    #[test]
    fn restore_all_clears_usage() {
        let s = SpellSlotState::initialize(3, &caster(SpellProgression::Full))
            .use_slot(lvl(1))
            .unwrap()
            .use_slot(lvl(2))
            .unwrap()
            .restore_all();
        assert_eq!(s.available(lvl(1)), 4);
        assert_eq!(s.available(lvl(2)), 2);
    }

    #[test]
    fn restore_pact_only_touches_highest_level() {
        let s = SpellSlotState::initialize(3, &caster(SpellProgression::Full))
            .use_slot(lvl(1))
            .unwrap()
            .use_slot(lvl(2))
            .unwrap()
            .restore_pact();
        assert_eq!(s.used(lvl(1)), 1);
        assert_eq!(s.used(lvl(2)), 0);
    }

    #[test]
    fn highest_available() {
        let s = SpellSlotState::initialize(3, &caster(SpellProgression::Full));
        assert_eq!(s.highest_available(), Some(lvl(2)));
        let s = s.use_slot(lvl(2)).unwrap().use_slot(lvl(2)).unwrap();
        assert_eq!(s.highest_available(), Some(lvl(1)));
        assert_eq!(SpellSlotState::default().highest_available(), None);
    }

    #[test]
    fn spell_level_serde() {
        let json = serde_json::to_string(&lvl(4)).unwrap();
        assert_eq!(json, "4");
        assert!(serde_json::from_str::<SpellLevel>("0").is_err());
    }
}
