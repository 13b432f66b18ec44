//! The two parallel six-attribute ability models.
//!
//! The native system (Strength, Agility, Vitality, Intellect, Sense,
//! Presence) and the standard d20 system (Strength, Dexterity,
//! Constitution, Intelligence, Wisdom, Charisma) describe the same
//! character. Each native attribute corresponds to exactly one standard
//! ability, so conversion only relabels scores: nothing is scaled or
//! rounded and the two conversions are mutual inverses.

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// Score used for any ability the source data leaves out.
pub const DEFAULT_SCORE: i32 = 10;

/// One of the six standard d20 abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Strength (STR).
    Strength,
    /// Dexterity (DEX).
    Dexterity,
    /// Constitution (CON).
    Constitution,
    /// Intelligence (INT).
    Intelligence,
    /// Wisdom (WIS).
    Wisdom,
    /// Charisma (CHA).
    Charisma,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// The native attribute this ability mirrors.
    pub const fn native(self) -> NativeAbility {
        match self {
            Self::Strength => NativeAbility::Strength,
            Self::Dexterity => NativeAbility::Agility,
            Self::Constitution => NativeAbility::Vitality,
            Self::Intelligence => NativeAbility::Intellect,
            Self::Wisdom => NativeAbility::Sense,
            Self::Charisma => NativeAbility::Presence,
        }
    }

    /// Three-letter abbreviation.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Parse a full name or abbreviation, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "str" => Some(Self::Strength),
            "dexterity" | "dex" => Some(Self::Dexterity),
            "constitution" | "con" => Some(Self::Constitution),
            "intelligence" | "int" => Some(Self::Intelligence),
            "wisdom" | "wis" => Some(Self::Wisdom),
            "charisma" | "cha" => Some(Self::Charisma),
            _ => None,
        }
    }
}

impl std::str::FromStr for Ability {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| MechError::UnknownAbility(s.to_string()))
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        };
        f.write_str(name)
    }
}

/// One of the six native-system attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeAbility {
    /// Strength (STR).
    Strength,
    /// Agility (AGI), mirrored by Dexterity.
    Agility,
    /// Vitality (VIT), mirrored by Constitution.
    Vitality,
    /// Intellect (INT), mirrored by Intelligence.
    Intellect,
    /// Sense (SENSE), mirrored by Wisdom.
    Sense,
    /// Presence (PRE), mirrored by Charisma.
    Presence,
}

impl NativeAbility {
    /// All native attributes in sheet order.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Agility,
        Self::Vitality,
        Self::Intellect,
        Self::Sense,
        Self::Presence,
    ];

    /// The standard ability this attribute mirrors.
    pub const fn standard(self) -> Ability {
        match self {
            Self::Strength => Ability::Strength,
            Self::Agility => Ability::Dexterity,
            Self::Vitality => Ability::Constitution,
            Self::Intellect => Ability::Intelligence,
            Self::Sense => Ability::Wisdom,
            Self::Presence => Ability::Charisma,
        }
    }

    /// The short tag the native character records use.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Agility => "AGI",
            Self::Vitality => "VIT",
            Self::Intellect => "INT",
            Self::Sense => "SENSE",
            Self::Presence => "PRE",
        }
    }

    /// Parse a full name or native tag, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "str" => Some(Self::Strength),
            "agility" | "agi" => Some(Self::Agility),
            "vitality" | "vit" => Some(Self::Vitality),
            "intellect" | "int" => Some(Self::Intellect),
            "sense" => Some(Self::Sense),
            "presence" | "pre" => Some(Self::Presence),
            _ => None,
        }
    }
}

impl std::str::FromStr for NativeAbility {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| MechError::UnknownAbility(s.to_string()))
    }
}

impl std::fmt::Display for NativeAbility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Strength => "Strength",
            Self::Agility => "Agility",
            Self::Vitality => "Vitality",
            Self::Intellect => "Intellect",
            Self::Sense => "Sense",
            Self::Presence => "Presence",
        };
        f.write_str(name)
    }
}

/// Standard-system ability scores.
///
/// Deserialising a record with missing abilities fills them with 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityScores {
    /// Strength score.
    #[serde(alias = "STR", alias = "Strength")]
    pub strength: i32,
    /// Dexterity score.
    #[serde(alias = "DEX", alias = "Dexterity")]
    pub dexterity: i32,
    /// Constitution score.
    #[serde(alias = "CON", alias = "Constitution")]
    pub constitution: i32,
    /// Intelligence score.
    #[serde(alias = "INT", alias = "Intelligence")]
    pub intelligence: i32,
    /// Wisdom score.
    #[serde(alias = "WIS", alias = "Wisdom")]
    pub wisdom: i32,
    /// Charisma score.
    #[serde(alias = "CHA", alias = "Charisma")]
    pub charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        let s = DEFAULT_SCORE;
        Self {
            strength: s,
            dexterity: s,
            constitution: s,
            intelligence: s,
            wisdom: s,
            charisma: s,
        }
    }
}

impl AbilityScores {
    /// Build scores from `(ability, score)` pairs; unlisted abilities are 10.
    /// A later pair for the same ability overwrites an earlier one.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Ability, i32)>) -> Self {
        let mut scores = Self::default();
        for (ability, score) in pairs {
            scores.set(ability, score);
        }
        scores
    }

    /// The score for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Overwrite the score for one ability.
    pub fn set(&mut self, ability: Ability, score: i32) {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        };
        *slot = score;
    }

    /// Iterate `(ability, score)` in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

/// Native-system attribute scores.
///
/// Deserialising a record with missing attributes fills them with 10, so
/// a partial native record never leaves a hole in the converted vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeAbilities {
    /// Strength score.
    #[serde(alias = "STR", alias = "Strength")]
    pub strength: i32,
    /// Agility score.
    #[serde(alias = "AGI", alias = "Agility")]
    pub agility: i32,
    /// Vitality score.
    #[serde(alias = "VIT", alias = "Vitality")]
    pub vitality: i32,
    /// Intellect score.
    #[serde(alias = "INT", alias = "Intellect")]
    pub intellect: i32,
    /// Sense score.
    #[serde(alias = "SENSE", alias = "Sense")]
    pub sense: i32,
    /// Presence score.
    #[serde(alias = "PRE", alias = "Presence")]
    pub presence: i32,
}

impl Default for NativeAbilities {
    fn default() -> Self {
        let s = DEFAULT_SCORE;
        Self {
            strength: s,
            agility: s,
            vitality: s,
            intellect: s,
            sense: s,
            presence: s,
        }
    }
}

impl NativeAbilities {
    /// Build scores from `(attribute, score)` pairs; unlisted attributes are 10.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (NativeAbility, i32)>) -> Self {
        let mut scores = Self::default();
        for (ability, score) in pairs {
            scores.set(ability, score);
        }
        scores
    }

    /// The score for one attribute.
    pub fn get(&self, ability: NativeAbility) -> i32 {
        match ability {
            NativeAbility::Strength => self.strength,
            NativeAbility::Agility => self.agility,
            NativeAbility::Vitality => self.vitality,
            NativeAbility::Intellect => self.intellect,
            NativeAbility::Sense => self.sense,
            NativeAbility::Presence => self.presence,
        }
    }

    /// Overwrite the score for one attribute.
    pub fn set(&mut self, ability: NativeAbility, score: i32) {
        let slot = match ability {
            NativeAbility::Strength => &mut self.strength,
            NativeAbility::Agility => &mut self.agility,
            NativeAbility::Vitality => &mut self.vitality,
            NativeAbility::Intellect => &mut self.intellect,
            NativeAbility::Sense => &mut self.sense,
            NativeAbility::Presence => &mut self.presence,
        };
        *slot = score;
    }

    /// Iterate `(attribute, score)` in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (NativeAbility, i32)> + '_ {
        NativeAbility::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

/// Relabel native scores as standard abilities.
pub fn to_standard(native: &NativeAbilities) -> AbilityScores {
    AbilityScores::from_pairs(native.iter().map(|(a, score)| (a.standard(), score)))
}

/// Relabel standard scores as native attributes.
pub fn to_native(standard: &AbilityScores) -> NativeAbilities {
    NativeAbilities::from_pairs(standard.iter().map(|(a, score)| (a.native(), score)))
}
