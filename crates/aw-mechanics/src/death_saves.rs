//! Death saving throws at 0 hit points.
//!
//! Like the spell ledger, the facade only reads this through the
//! [`DeathSaveTracker`] trait. [`DeathSaveState`] is the default tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::{DieRoller, RollMode};

/// Total a death save must reach to succeed.
pub const DEATH_SAVE_DC: i32 = 10;
/// Successes (or failures) that settle the outcome.
pub const SAVES_TO_SETTLE: u32 = 3;
/// Damage at 0 HP that kills outright.
pub const INSTANT_DEATH_DAMAGE: i32 = 20;

/// Read surface of a death-save tracker.
pub trait DeathSaveTracker {
    /// A fresh tracker with no saves recorded.
    fn initialize() -> Self
    where
        Self: Sized;

    /// The character has died.
    fn is_dead(&self) -> bool;

    /// The character is stable.
    fn is_stable(&self) -> bool;

    /// Successful saves so far.
    fn successes(&self) -> u32;

    /// Failed saves so far.
    fn failures(&self) -> u32;
}

/// The default death-save tracker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeathSaveState {
    successes: u32,
    failures: u32,
    stable: bool,
    dead: bool,
    last_damage_at: Option<DateTime<Utc>>,
    damage_since_last_save: i32,
}

/// Outcome of one death saving throw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeathSaveResult {
    /// The kept d20.
    pub roll: u32,
    /// Modifier applied.
    pub modifier: i32,
    /// Roll plus modifier.
    pub total: i32,
    /// Whether the save counted as a success.
    pub success: bool,
    /// Natural 20.
    pub critical_success: bool,
    /// Natural 1.
    pub critical_failure: bool,
    /// The tracker afterwards.
    pub state: DeathSaveState,
}

/// Where a dying character stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeCondition {
    /// Still making saves.
    Dying,
    /// Stable but unconscious.
    Stable,
    /// Dead.
    Dead,
}

impl std::fmt::Display for LifeCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Dying => "dying",
            Self::Stable => "stable",
            Self::Dead => "dead",
        };
        f.write_str(label)
    }
}

/// Display projection of a tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathSaveStatus {
    /// Current condition.
    pub condition: LifeCondition,
    /// Successful saves.
    pub successes: u32,
    /// Failed saves.
    pub failures: u32,
    /// Human-readable summary.
    pub message: String,
}

/// Rough odds of surviving the remaining saves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurvivalOdds {
    /// Chance of reaching three successes.
    pub survival: f64,
    /// Complement of `survival`.
    pub death: f64,
}

impl DeathSaveState {
    /// When damage at 0 HP was last recorded.
    pub fn last_damage_at(&self) -> Option<DateTime<Utc>> {
        self.last_damage_at
    }

    /// Damage taken at 0 HP since the last save.
    pub fn damage_since_last_save(&self) -> i32 {
        self.damage_since_last_save
    }

    fn add_successes(mut self, n: u32) -> Self {
        self.successes = (self.successes + n).min(SAVES_TO_SETTLE);
        self
    }

    fn add_failures(mut self, n: u32) -> Self {
        self.failures = (self.failures + n).min(SAVES_TO_SETTLE);
        if self.failures >= SAVES_TO_SETTLE {
            self.dead = true;
        }
        self
    }

    /// Roll a death save.
    ///
    /// A natural 20 counts as two successes and stabilises; a natural 1
    /// counts as two failures. Otherwise the total must reach 10.
    pub fn roll(
        self,
        modifier: i32,
        mode: RollMode,
        roller: &mut impl DieRoller,
    ) -> DeathSaveResult {
        let roll = roller.roll_d20(mode);
        let total = i32::try_from(roll).unwrap_or(i32::MAX) + modifier;
        let critical_success = roll == 20;
        let critical_failure = roll == 1;
        let success = critical_success || (!critical_failure && total >= DEATH_SAVE_DC);

        let mut state = if critical_success {
            let mut s = self.add_successes(2);
            s.stable = true;
            s
        } else if critical_failure {
            self.add_failures(2)
        } else if success {
            let mut s = self.add_successes(1);
            if s.successes >= SAVES_TO_SETTLE {
                s.stable = true;
            }
            s
        } else {
            self.add_failures(1)
        };
        state.damage_since_last_save = 0;

        debug!(
            roll,
            total,
            success,
            successes = state.successes,
            failures = state.failures,
            "death save"
        );

        DeathSaveResult {
            roll,
            modifier,
            total,
            success,
            critical_success,
            critical_failure,
            state,
        }
    }

    /// Take damage while at 0 HP: a failed save, or death outright for a
    /// hit of 20 or more.
    pub fn take_damage_at_zero_hp(mut self, damage: i32, at: DateTime<Utc>) -> Self {
        if damage >= INSTANT_DEATH_DAMAGE {
            debug!(damage, "massive damage at 0 HP");
            self.dead = true;
            return self;
        }
        let mut state = self.add_failures(1);
        state.last_damage_at = Some(at);
        state.damage_since_last_save += damage;
        state
    }

    /// Any positive healing at 0 HP resets the tracker.
    pub fn heal_at_zero_hp(self, healing: i32) -> Self {
        if healing > 0 { Self::default() } else { self }
    }

    /// Mark the character stable.
    pub fn stabilize(mut self) -> Self {
        self.stable = true;
        self
    }

    /// Reset after regaining consciousness.
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// True while saves are still being rolled.
    pub fn needs_death_saves(&self) -> bool {
        !self.dead
            && !self.stable
            && self.successes < SAVES_TO_SETTLE
            && self.failures < SAVES_TO_SETTLE
    }

    /// Project the tracker for display.
    pub fn status(&self) -> DeathSaveStatus {
        let (condition, message) = if self.dead {
            (LifeCondition::Dead, "Character is dead.".to_string())
        } else if self.stable {
            (
                LifeCondition::Stable,
                "Character is stable but unconscious.".to_string(),
            )
        } else if self.successes >= SAVES_TO_SETTLE {
            (LifeCondition::Stable, "Character has stabilized.".to_string())
        } else if self.failures >= SAVES_TO_SETTLE {
            (LifeCondition::Dead, "Character has died.".to_string())
        } else {
            (
                LifeCondition::Dying,
                format!(
                    "Character is dying ({} successes, {} failures).",
                    self.successes, self.failures
                ),
            )
        };
        DeathSaveStatus {
            condition,
            successes: self.successes,
            failures: self.failures,
            message,
        }
    }

    /// Estimate survival odds, treating each remaining save as an
    /// independent roll and ignoring natural 1s and 20s.
    pub fn survival_odds(&self, modifier: i32, advantage: bool) -> SurvivalOdds {
        let needed = SAVES_TO_SETTLE.saturating_sub(self.successes);
        let allowed = SAVES_TO_SETTLE.saturating_sub(self.failures);
        if needed == 0 {
            return SurvivalOdds {
                survival: 1.0,
                death: 0.0,
            };
        }
        if allowed == 0 {
            return SurvivalOdds {
                survival: 0.0,
                death: 1.0,
            };
        }

        let threshold = DEATH_SAVE_DC - modifier;
        let single = (f64::from(21 - threshold) / 20.0).clamp(0.0, 1.0);
        let per_save = if advantage {
            1.0 - (1.0 - single).powi(2)
        } else {
            single
        };
        let survival = per_save.powi(i32::try_from(needed).unwrap_or(i32::MAX));
        SurvivalOdds {
            survival,
            death: 1.0 - survival,
        }
    }
}

impl DeathSaveTracker for DeathSaveState {
    fn initialize() -> Self {
        Self::default()
    }

    fn is_dead(&self) -> bool {
        self.dead
    }

    fn is_stable(&self) -> bool {
        self.stable
    }

    fn successes(&self) -> u32 {
        self.successes
    }

    fn failures(&self) -> u32 {
        self.failures
    }
}
