//! Derived statistics for the standard d20 system.
//!
//! Everything here is a pure function of a [`StandardCharacter`] (or a bare
//! score). Nothing fails: a skill or save with no training record counts as
//! untrained with no bonus.

pub mod armor;
pub mod character;
pub mod skill;

pub use armor::{Armor, ArmorCategory, armor_class, armor_class_for_modifier};
pub use character::{SavingThrowProficiency, SkillProficiency, StandardCharacter};
pub use skill::Skill;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::dice::Die;

/// Pounds of carrying capacity per point of Strength.
pub const CARRY_PER_STRENGTH: i32 = 15;

/// Ability modifier: `floor((score - 10) / 2)`, rounding toward negative
/// infinity so that 9 gives -1 and 7 gives -2.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Proficiency bonus for a level: +2 at 1-4, rising by one every four levels.
pub fn proficiency_bonus(level: u32) -> i32 {
    let level = i32::try_from(level).unwrap_or(i32::MAX);
    (level - 1).div_euclid(4) + 2
}

/// Modifier for one ability of a character.
pub fn modifier_for(character: &StandardCharacter, ability: Ability) -> i32 {
    ability_modifier(character.abilities.get(ability))
}

/// Skill modifier: governing ability modifier, plus the proficiency bonus
/// when proficient, plus it again for expertise, plus any flat bonus.
pub fn skill_modifier(character: &StandardCharacter, skill: Skill) -> i32 {
    let record = character.skill_proficiency(skill);
    let pb = character.proficiency_bonus();
    let mut total = modifier_for(character, skill.ability()) + record.bonus;
    if record.proficient {
        total += pb;
    }
    if record.expertise {
        total += pb;
    }
    total
}

/// Saving throw modifier: ability modifier, plus the proficiency bonus when
/// proficient, plus any flat bonus.
pub fn saving_throw_modifier(character: &StandardCharacter, ability: Ability) -> i32 {
    let record = character.saving_throw_proficiency(ability);
    let prof = if record.proficient {
        character.proficiency_bonus()
    } else {
        0
    };
    modifier_for(character, ability) + prof + record.bonus
}

/// Maximum hit points with the average-die progression.
///
/// Level 1 takes the full die face plus the Constitution modifier. Every
/// level after that adds `floor(face / 2) + 1` plus the modifier; nothing is
/// rolled. Level 0 is treated like level 1.
pub fn hit_points_with_con(level: u32, hit_die: Die, con_mod: i32) -> i32 {
    let first = hit_die.face() + con_mod;
    let later_levels = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
    first.saturating_add(later_levels.saturating_mul(hit_die.average() + con_mod))
}

/// Maximum hit points using the character's level and Constitution.
pub fn hit_points(character: &StandardCharacter, hit_die: Die) -> i32 {
    hit_points_with_con(
        character.level(),
        hit_die,
        modifier_for(character, Ability::Constitution),
    )
}

/// Passive Perception: 10 + Perception modifier.
pub fn passive_perception(character: &StandardCharacter) -> i32 {
    10 + skill_modifier(character, Skill::Perception)
}

/// Passive Investigation: 10 + Investigation modifier.
pub fn passive_investigation(character: &StandardCharacter) -> i32 {
    10 + skill_modifier(character, Skill::Investigation)
}

/// Passive Insight: 10 + Insight modifier.
pub fn passive_insight(character: &StandardCharacter) -> i32 {
    10 + skill_modifier(character, Skill::Insight)
}

/// Carrying capacity in pounds.
pub fn carrying_capacity(character: &StandardCharacter) -> i32 {
    character.abilities.strength * CARRY_PER_STRENGTH
}

/// Load thresholds derived from carrying capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encumbrance {
    /// 33% of capacity, rounded down.
    pub light: i32,
    /// 66% of capacity, rounded down.
    pub medium: i32,
    /// Full capacity.
    pub heavy: i32,
}

impl Encumbrance {
    /// Thresholds for a given capacity.
    pub fn for_capacity(capacity: i32) -> Self {
        Self {
            light: (capacity * 33).div_euclid(100),
            medium: (capacity * 66).div_euclid(100),
            heavy: capacity,
        }
    }
}

/// Encumbrance thresholds for a character.
pub fn encumbrance_thresholds(character: &StandardCharacter) -> Encumbrance {
    Encumbrance::for_capacity(carrying_capacity(character))
}
