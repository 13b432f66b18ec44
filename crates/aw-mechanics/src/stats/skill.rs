//! The eighteen standard skills and their governing abilities.

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::error::MechError;

/// A standard-system skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Skill {
    /// Athletics (Strength).
    Athletics,
    /// Acrobatics (Dexterity).
    Acrobatics,
    /// Sleight of Hand (Dexterity).
    SleightOfHand,
    /// Stealth (Dexterity).
    Stealth,
    /// Arcana (Intelligence).
    Arcana,
    /// History (Intelligence).
    History,
    /// Investigation (Intelligence).
    Investigation,
    /// Nature (Intelligence).
    Nature,
    /// Religion (Intelligence).
    Religion,
    /// Animal Handling (Wisdom).
    AnimalHandling,
    /// Insight (Wisdom).
    Insight,
    /// Medicine (Wisdom).
    Medicine,
    /// Perception (Wisdom).
    Perception,
    /// Survival (Wisdom).
    Survival,
    /// Deception (Charisma).
    Deception,
    /// Intimidation (Charisma).
    Intimidation,
    /// Performance (Charisma).
    Performance,
    /// Persuasion (Charisma).
    Persuasion,
}

impl Skill {
    /// Every skill, grouped by governing ability.
    pub const ALL: [Self; 18] = [
        Self::Athletics,
        Self::Acrobatics,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Arcana,
        Self::History,
        Self::Investigation,
        Self::Nature,
        Self::Religion,
        Self::AnimalHandling,
        Self::Insight,
        Self::Medicine,
        Self::Perception,
        Self::Survival,
        Self::Deception,
        Self::Intimidation,
        Self::Performance,
        Self::Persuasion,
    ];

    /// The one ability that governs this skill.
    pub const fn ability(self) -> Ability {
        match self {
            Self::Athletics => Ability::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Ability::Dexterity,
            Self::Arcana | Self::History | Self::Investigation | Self::Nature | Self::Religion => {
                Ability::Intelligence
            }
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Ability::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Charisma
            }
        }
    }

    /// Kebab-case identifier, e.g. `sleight-of-hand`.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Athletics => "athletics",
            Self::Acrobatics => "acrobatics",
            Self::SleightOfHand => "sleight-of-hand",
            Self::Stealth => "stealth",
            Self::Arcana => "arcana",
            Self::History => "history",
            Self::Investigation => "investigation",
            Self::Nature => "nature",
            Self::Religion => "religion",
            Self::AnimalHandling => "animal-handling",
            Self::Insight => "insight",
            Self::Medicine => "medicine",
            Self::Perception => "perception",
            Self::Survival => "survival",
            Self::Deception => "deception",
            Self::Intimidation => "intimidation",
            Self::Performance => "performance",
            Self::Persuasion => "persuasion",
        }
    }

    /// Parse a skill name. Case, spaces, underscores and hyphens are
    /// interchangeable, so "Sleight of Hand" and "sleight_of_hand" both match.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        Self::ALL.into_iter().find(|skill| skill.id() == normalized)
    }
}

impl std::str::FromStr for Skill {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| MechError::UnknownSkill(s.to_string()))
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn governing_abilities() {
        assert_eq!(Skill::Athletics.ability(), Ability::Strength);
        assert_eq!(Skill::Stealth.ability(), Ability::Dexterity);
        assert_eq!(Skill::SleightOfHand.ability(), Ability::Dexterity);
        assert_eq!(Skill::Arcana.ability(), Ability::Intelligence);
        assert_eq!(Skill::Investigation.ability(), Ability::Intelligence);
        assert_eq!(Skill::Perception.ability(), Ability::Wisdom);
        assert_eq!(Skill::AnimalHandling.ability(), Ability::Wisdom);
        assert_eq!(Skill::Persuasion.ability(), Ability::Charisma);
    }

    #[test]
    fn skills_per_ability() {
        let count = |a: Ability| Skill::ALL.iter().filter(|s| s.ability() == a).count();
        assert_eq!(count(Ability::Strength), 1);
        assert_eq!(count(Ability::Dexterity), 3);
        assert_eq!(count(Ability::Constitution), 0);
        assert_eq!(count(Ability::Intelligence), 5);
        assert_eq!(count(Ability::Wisdom), 5);
        assert_eq!(count(Ability::Charisma), 4);
    }

    #[test]
    fn parse_is_forgiving() {
        assert_eq!(Skill::parse("Sleight of Hand"), Some(Skill::SleightOfHand));
        assert_eq!(Skill::parse("animal_handling"), Some(Skill::AnimalHandling));
        assert_eq!(Skill::parse(" PERCEPTION "), Some(Skill::Perception));
        assert_eq!(Skill::parse("hacking"), None);
    }

    #[test]
    fn ids_round_trip() {
        for skill in Skill::ALL {
            assert_eq!(Skill::parse(&skill.to_string()), Some(skill));
        }
    }

    #[test]
    fn from_str_error() {
        let err = "cooking".parse::<Skill>().unwrap_err();
        assert_eq!(err.to_string(), "unknown skill: cooking");
    }
}
