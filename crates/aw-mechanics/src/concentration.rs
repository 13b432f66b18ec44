//! Concentration: sustaining one timed effect through combat.
//!
//! The state is either idle or holding exactly one active effect with at
//! least one round left. Transitions consume the old state and return the
//! new one:
//!
//! - [`ConcentrationState::start`] begins (or replaces) an effect.
//! - [`ConcentrationState::maintain`] runs once at the start of the
//!   concentrating character's turn, spends a round and clears the round's
//!   damage. The effect ends when no rounds remain.
//! - [`ConcentrationState::take_damage`] accumulates damage for the round.
//!   Ten or more in one round breaks concentration outright, before any save
//!   is considered. Below that, an effect with a DC asks for a save, which
//!   is resolved separately by [`ConcentrationState::make_save`].
//! - [`ConcentrationState::end`] drops the effect voluntarily.
//!
//! Round boundaries are not detected here; the turn orchestrator must call
//! `maintain` exactly once per round before attributing that round's damage.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::dice::{Die, DieRoller};

/// Damage in a single round that breaks concentration without a save.
pub const INSTANT_BREAK_DAMAGE: i32 = 10;

/// A spell or ability that requires concentration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcentrationEffect {
    /// Stable identifier of the effect.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Total duration in rounds.
    pub duration: u32,
    /// DC of the Constitution save damage calls for, if any.
    #[serde(default)]
    pub save_dc: Option<i32>,
    /// When `Some(true)`, any damage at all ends the effect.
    #[serde(default)]
    pub breaks_on_damage: Option<bool>,
}

impl ConcentrationEffect {
    /// Create an effect with no description, DC or damage flag.
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            duration,
            save_dc: None,
            breaks_on_damage: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the save DC.
    pub fn with_save_dc(mut self, dc: i32) -> Self {
        self.save_dc = Some(dc);
        self
    }

    /// Set whether any damage ends the effect.
    pub fn with_breaks_on_damage(mut self, breaks: bool) -> Self {
        self.breaks_on_damage = Some(breaks);
        self
    }

    fn breaks_on_any_damage(&self) -> bool {
        self.breaks_on_damage.unwrap_or(false)
    }
}

/// An effect currently being concentrated on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveConcentration {
    /// The effect being sustained.
    pub effect: ConcentrationEffect,
    /// Rounds left; always at least 1 while active.
    pub remaining_rounds: u32,
    /// Damage accumulated since the start of the current round.
    pub damage_this_round: i32,
}

/// Whether a character is concentrating, and on what.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConcentrationState {
    /// Not concentrating.
    #[default]
    Idle,
    /// Sustaining an effect.
    Active(ActiveConcentration),
}

/// How a hit affected concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// There was nothing to break.
    NotConcentrating,
    /// Concentration holds with no further action.
    Held,
    /// Concentration holds for now; the caller should resolve a save.
    SaveRequired {
        /// DC of the Constitution save.
        dc: i32,
    },
    /// Concentration was lost.
    Broken,
}

impl DamageOutcome {
    /// True when the hit ended concentration.
    pub fn broke(self) -> bool {
        matches!(self, Self::Broken)
    }
}

/// The state after taking damage, with what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageCheck {
    /// The resulting state.
    pub state: ConcentrationState,
    /// What the damage did.
    pub outcome: DamageOutcome,
}

/// The result of a concentration saving throw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcentrationSave {
    /// Whether the save met the DC.
    pub success: bool,
    /// The natural d20.
    pub roll: u32,
    /// Roll plus modifier.
    pub total: i32,
    /// The resulting state.
    pub state: ConcentrationState,
}

/// Read-only projection for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum ConcentrationStatus {
    /// Nothing is being concentrated on.
    NotConcentrating,
    /// An effect is being concentrated on.
    Concentrating {
        /// Name of the effect.
        effect_name: String,
        /// Rounds left.
        remaining_rounds: u32,
        /// Description of the effect.
        description: String,
    },
}

impl ConcentrationStatus {
    /// True while an effect is held.
    pub fn is_concentrating(&self) -> bool {
        matches!(self, Self::Concentrating { .. })
    }
}

impl ConcentrationState {
    /// The initial, idle state.
    pub fn new() -> Self {
        Self::Idle
    }

    /// True while an effect is held.
    pub fn is_concentrating(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// The active effect, if any.
    pub fn active(&self) -> Option<&ActiveConcentration> {
        match self {
            Self::Idle => None,
            Self::Active(active) => Some(active),
        }
    }

    /// Damage taken so far this round (0 when idle).
    pub fn damage_this_round(&self) -> i32 {
        self.active().map_or(0, |a| a.damage_this_round)
    }

    /// Begin concentrating, silently replacing whatever was held before.
    ///
    /// An effect with a zero-round duration has nothing to sustain, so the
    /// state comes back idle.
    pub fn start(self, effect: ConcentrationEffect) -> Self {
        if let Self::Active(previous) = &self {
            debug!(
                replaced = %previous.effect.name,
                effect = %effect.name,
                "concentration replaced"
            );
        }
        if effect.duration == 0 {
            trace!(effect = %effect.name, "zero-duration effect, not concentrating");
            return Self::Idle;
        }
        debug!(effect = %effect.name, rounds = effect.duration, "concentration started");
        Self::Active(ActiveConcentration {
            remaining_rounds: effect.duration,
            damage_this_round: 0,
            effect,
        })
    }

    /// Spend one round. Ends the effect when its last round is spent;
    /// otherwise clears the round's damage.
    pub fn maintain(self) -> Self {
        let Self::Active(mut active) = self else {
            trace!("maintain while idle");
            return Self::Idle;
        };
        active.remaining_rounds = active.remaining_rounds.saturating_sub(1);
        if active.remaining_rounds == 0 {
            debug!(effect = %active.effect.name, "concentration expired");
            return Self::Idle;
        }
        active.damage_this_round = 0;
        Self::Active(active)
    }

    /// Record damage and check whether concentration survives it.
    pub fn take_damage(self, amount: i32) -> DamageCheck {
        let Self::Active(mut active) = self else {
            return DamageCheck {
                state: Self::Idle,
                outcome: DamageOutcome::NotConcentrating,
            };
        };

        let total = active.damage_this_round + amount;
        let outcome = if total <= 0 {
            DamageOutcome::Held
        } else if total >= INSTANT_BREAK_DAMAGE || active.effect.breaks_on_any_damage() {
            DamageOutcome::Broken
        } else if let Some(dc) = active.effect.save_dc {
            DamageOutcome::SaveRequired { dc }
        } else {
            DamageOutcome::Held
        };

        if outcome.broke() {
            debug!(effect = %active.effect.name, damage = total, "concentration broken by damage");
            return DamageCheck {
                state: Self::Idle,
                outcome,
            };
        }

        active.damage_this_round = total;
        DamageCheck {
            state: Self::Active(active),
            outcome,
        }
    }

    /// Stop concentrating. Always succeeds.
    pub fn end(self) -> Self {
        if let Self::Active(active) = &self {
            debug!(effect = %active.effect.name, "concentration ended voluntarily");
        }
        Self::Idle
    }

    /// Roll a Constitution save: `d20 + modifier >= dc`.
    ///
    /// Failure drops the effect. Success keeps it and clears the round's
    /// damage.
    pub fn make_save(
        self,
        con_save_modifier: i32,
        dc: i32,
        roller: &mut impl DieRoller,
    ) -> ConcentrationSave {
        let roll = roller.roll(Die::D20);
        let total = i32::try_from(roll).unwrap_or(i32::MAX) + con_save_modifier;
        let success = total >= dc;

        let state = match self {
            Self::Active(mut active) if success => {
                active.damage_this_round = 0;
                Self::Active(active)
            }
            Self::Active(active) => {
                debug!(effect = %active.effect.name, roll, total, dc, "concentration save failed");
                Self::Idle
            }
            Self::Idle => Self::Idle,
        };

        ConcentrationSave {
            success,
            roll,
            total,
            state,
        }
    }

    /// Project the state for display.
    pub fn status(&self) -> ConcentrationStatus {
        match self {
            Self::Idle => ConcentrationStatus::NotConcentrating,
            Self::Active(active) => ConcentrationStatus::Concentrating {
                effect_name: active.effect.name.clone(),
                remaining_rounds: active.remaining_rounds,
                description: active.effect.description.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedRoller;

    fn bless(duration: u32) -> ConcentrationEffect {
        ConcentrationEffect::new("bless", "Bless", duration).with_description("+1d4 to attacks")
    }

    #[test]
    fn starts_idle() {
        let s = ConcentrationState::new();
        assert!(!s.is_concentrating());
        assert_eq!(s.damage_this_round(), 0);
        assert_eq!(s.status(), ConcentrationStatus::NotConcentrating);
    }

    #[test]
    fn start_sets_remaining_to_duration() {
        let s = ConcentrationState::new().start(bless(10));
        let active = s.active().unwrap();
        assert_eq!(active.remaining_rounds, 10);
        assert_eq!(active.damage_this_round, 0);
    }

    #[test]
    fn start_replaces_existing_effect() {
        let s = ConcentrationState::new()
            .start(bless(10))
            .start(ConcentrationEffect::new("haste", "Haste", 3));
        assert_eq!(s.active().unwrap().effect.id, "haste");
        assert_eq!(s.active().unwrap().remaining_rounds, 3);
    }

    #[test]
    fn zero_duration_stays_idle() {
        let s = ConcentrationState::new().start(bless(0));
        assert!(!s.is_concentrating());
    }

    #[test]
    fn instant_break_ignores_dc() {
        let s = ConcentrationState::new().start(bless(10).with_save_dc(5));
        let check = s.take_damage(10);
        assert_eq!(check.outcome, DamageOutcome::Broken);
        assert!(check.outcome.broke());
        assert_eq!(check.state, ConcentrationState::Idle);
    }

    #[test]
    fn damage_accumulates_within_a_round() {
        let s = ConcentrationState::new().start(bless(10));
        let first = s.take_damage(6);
        assert_eq!(first.outcome, DamageOutcome::Held);
        assert_eq!(first.state.damage_this_round(), 6);
        let second = first.state.take_damage(4);
        assert!(second.outcome.broke());
        assert!(!second.state.is_concentrating());
    }

    #[test]
    fn maintain_resets_round_damage() {
        let s = ConcentrationState::new()
            .start(bless(10))
            .take_damage(6)
            .state
            .maintain();
        assert_eq!(s.damage_this_round(), 0);
        assert_eq!(s.active().unwrap().remaining_rounds, 9);
        let check = s.take_damage(6);
        assert_eq!(check.outcome, DamageOutcome::Held);
    }

    #[test]
    fn sub_threshold_damage_with_dc_asks_for_save() {
        let s = ConcentrationState::new().start(bless(10).with_save_dc(12));
        let check = s.take_damage(4);
        assert_eq!(check.outcome, DamageOutcome::SaveRequired { dc: 12 });
        assert!(!check.outcome.broke());
        assert!(check.state.is_concentrating());
    }

    #[test]
    fn non_positive_damage_never_breaks() {
        let s = ConcentrationState::new().start(bless(10).with_breaks_on_damage(true));
        let check = s.take_damage(0);
        assert_eq!(check.outcome, DamageOutcome::Held);
        assert!(check.state.is_concentrating());
    }

    #[test]
    fn fragile_effect_breaks_on_any_damage() {
        let s = ConcentrationState::new().start(bless(10).with_breaks_on_damage(true));
        assert!(s.take_damage(1).outcome.broke());
    }

    #[test]
    fn damage_while_idle_is_a_no_op() {
        let check = ConcentrationState::new().take_damage(50);
        assert_eq!(check.outcome, DamageOutcome::NotConcentrating);
        assert_eq!(check.state, ConcentrationState::Idle);
    }

    #[test]
    fn failed_save_drops_effect() {
        let s = ConcentrationState::new().start(bless(10)).take_damage(4).state;
        assert!(s.is_concentrating());
        let mut roller = FixedRoller::always(20);
        let save = s.make_save(0, 99, &mut roller);
        assert!(!save.success);
        assert_eq!(save.state, ConcentrationState::Idle);
    }

    #[test]
    fn successful_save_clears_round_damage() {
        let s = ConcentrationState::new().start(bless(10)).take_damage(7).state;
        let mut roller = FixedRoller::new([8]);
        let save = s.make_save(2, 10, &mut roller);
        assert!(save.success);
        assert_eq!(save.roll, 8);
        assert_eq!(save.total, 10);
        assert_eq!(save.state.damage_this_round(), 0);
        assert_eq!(save.state.active().unwrap().remaining_rounds, 10);
    }

    #[test]
    fn natural_end_after_last_round() {
        let s = ConcentrationState::new().start(bless(1)).maintain();
        assert_eq!(s, ConcentrationState::Idle);
    }

    #[test]
    fn maintain_counts_down_to_idle() {
        let mut s = ConcentrationState::new().start(bless(3));
        s = s.maintain();
        assert_eq!(s.active().unwrap().remaining_rounds, 2);
        s = s.maintain();
        assert_eq!(s.active().unwrap().remaining_rounds, 1);
        s = s.maintain();
        assert!(!s.is_concentrating());
        assert_eq!(s.maintain(), ConcentrationState::Idle);
    }

    #[test]
    fn end_always_idles() {
        assert_eq!(
            ConcentrationState::new().start(bless(5)).end(),
            ConcentrationState::Idle
        );
        assert_eq!(ConcentrationState::new().end(), ConcentrationState::Idle);
    }

    #[test]
    fn status_projection() {
        let s = ConcentrationState::new().start(bless(4)).maintain();
        assert_eq!(
            s.status(),
            ConcentrationStatus::Concentrating {
                effect_name: "Bless".to_string(),
                remaining_rounds: 3,
                description: "+1d4 to attacks".to_string(),
            }
        );
        assert!(s.status().is_concentrating());
    }
}
