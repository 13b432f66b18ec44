//! The standard-system character block.

use serde::{Deserialize, Serialize};

use super::proficiency_bonus;
use super::skill::Skill;
use crate::ability::{Ability, AbilityScores};

/// Training in one skill.
///
/// Expertise is expected to imply proficiency, but nothing enforces it:
/// the calculator applies whichever bonuses are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProficiency {
    /// The skill this record covers.
    pub skill: Skill,
    /// Adds the proficiency bonus.
    pub proficient: bool,
    /// Adds the proficiency bonus a second time.
    pub expertise: bool,
    /// Flat bonus from items, feats and the like.
    #[serde(default)]
    pub bonus: i32,
}

impl SkillProficiency {
    /// An untrained record with no bonus.
    pub fn untrained(skill: Skill) -> Self {
        Self {
            skill,
            proficient: false,
            expertise: false,
            bonus: 0,
        }
    }

    /// A proficient record.
    pub fn proficient(skill: Skill) -> Self {
        Self {
            proficient: true,
            ..Self::untrained(skill)
        }
    }

    /// A proficient record with expertise.
    pub fn expertise(skill: Skill) -> Self {
        Self {
            proficient: true,
            expertise: true,
            ..Self::untrained(skill)
        }
    }

    /// Set the flat bonus.
    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }
}

/// Training in one saving throw. There is no expertise for saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingThrowProficiency {
    /// The ability the save is made with.
    pub ability: Ability,
    /// Adds the proficiency bonus.
    pub proficient: bool,
    /// Flat bonus.
    #[serde(default)]
    pub bonus: i32,
}

impl SavingThrowProficiency {
    /// An untrained save with no bonus.
    pub fn untrained(ability: Ability) -> Self {
        Self {
            ability,
            proficient: false,
            bonus: 0,
        }
    }

    /// A proficient save.
    pub fn proficient(ability: Ability) -> Self {
        Self {
            proficient: true,
            ..Self::untrained(ability)
        }
    }

    /// Set the flat bonus.
    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }
}

/// A character expressed in the standard d20 system.
///
/// The proficiency bonus is stored alongside the level it derives from.
/// [`StandardCharacter::set_level`] is the only way to change the level and
/// it always recomputes the bonus, so the two stay in step unless a caller
/// deliberately overrides the bonus with
/// [`StandardCharacter::with_proficiency_bonus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardCharacter {
    level: u32,
    /// Ability scores.
    pub abilities: AbilityScores,
    /// Skill training records.
    #[serde(default)]
    pub skill_proficiencies: Vec<SkillProficiency>,
    /// Saving throw training records.
    #[serde(default)]
    pub saving_throw_proficiencies: Vec<SavingThrowProficiency>,
    proficiency_bonus: i32,
    /// Class label.
    pub class: String,
    /// Subclass label.
    #[serde(default)]
    pub subclass: Option<String>,
    /// Race label.
    #[serde(default)]
    pub race: Option<String>,
    /// Background label.
    #[serde(default)]
    pub background: Option<String>,
}

impl StandardCharacter {
    /// Create an untrained character whose proficiency bonus follows `level`.
    pub fn new(level: u32, abilities: AbilityScores, class: impl Into<String>) -> Self {
        Self {
            level,
            abilities,
            skill_proficiencies: Vec::new(),
            saving_throw_proficiencies: Vec::new(),
            proficiency_bonus: proficiency_bonus(level),
            class: class.into(),
            subclass: None,
            race: None,
            background: None,
        }
    }

    /// Set the subclass label.
    pub fn with_subclass(mut self, subclass: Option<String>) -> Self {
        self.subclass = subclass;
        self
    }

    /// Set the race label.
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    /// Set the background label.
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Replace the stored proficiency bonus without touching the level.
    pub fn with_proficiency_bonus(mut self, bonus: i32) -> Self {
        self.proficiency_bonus = bonus;
        self
    }

    /// Character level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The stored proficiency bonus.
    pub fn proficiency_bonus(&self) -> i32 {
        self.proficiency_bonus
    }

    /// Change level and resynchronise the proficiency bonus.
    pub fn set_level(&mut self, level: u32) {
        self.level = level;
        self.proficiency_bonus = proficiency_bonus(level);
    }

    /// The training record for a skill, or an untrained one if absent.
    pub fn skill_proficiency(&self, skill: Skill) -> SkillProficiency {
        self.skill_proficiencies
            .iter()
            .find(|p| p.skill == skill)
            .copied()
            .unwrap_or_else(|| SkillProficiency::untrained(skill))
    }

    /// The training record for a save, or an untrained one if absent.
    pub fn saving_throw_proficiency(&self, ability: Ability) -> SavingThrowProficiency {
        self.saving_throw_proficiencies
            .iter()
            .find(|p| p.ability == ability)
            .copied()
            .unwrap_or_else(|| SavingThrowProficiency::untrained(ability))
    }

    /// Record skill training, replacing any record for the same skill.
    pub fn add_skill_proficiency(&mut self, proficiency: SkillProficiency) {
        self.skill_proficiencies.retain(|p| p.skill != proficiency.skill);
        self.skill_proficiencies.push(proficiency);
    }

    /// Record save training, replacing any record for the same ability.
    pub fn add_saving_throw_proficiency(&mut self, proficiency: SavingThrowProficiency) {
        self.saving_throw_proficiencies.retain(|p| p.ability != proficiency.ability);
        self.saving_throw_proficiencies.push(proficiency);
    }
}
