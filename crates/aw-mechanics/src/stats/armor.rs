//! Armor class under the standard system's armor categories.

use serde::{Deserialize, Serialize};

use super::ability_modifier;
use super::character::StandardCharacter;

/// Armor class before any modifier is applied.
pub const BASE_ARMOR_CLASS: i32 = 10;
/// Highest Dexterity contribution medium armor allows.
pub const MEDIUM_ARMOR_DEX_CAP: i32 = 2;
/// Flat bonus a shield adds.
pub const SHIELD_BONUS: i32 = 2;

/// Worn armor weight class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorCategory {
    /// No armor, or anything unrecognised.
    #[default]
    None,
    /// Light armor.
    Light,
    /// Medium armor.
    Medium,
    /// Heavy armor.
    Heavy,
}

impl ArmorCategory {
    /// Parse an armor label. Unknown labels fall back to [`ArmorCategory::None`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            "medium" => Self::Medium,
            "heavy" => Self::Heavy,
            _ => Self::None,
        }
    }

    /// How much of the Dexterity modifier this category lets through.
    pub fn dex_contribution(self, dex_mod: i32) -> i32 {
        match self {
            Self::None | Self::Light => dex_mod,
            Self::Medium => dex_mod.min(MEDIUM_ARMOR_DEX_CAP),
            Self::Heavy => 0,
        }
    }
}

impl std::fmt::Display for ArmorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::None => "none",
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        };
        f.write_str(label)
    }
}

/// What a character is wearing for AC purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Armor {
    /// Armor weight class.
    pub category: ArmorCategory,
    /// Whether a shield is carried.
    pub shield: bool,
    /// Natural armor bonus, added unconditionally.
    pub natural: i32,
}

impl Armor {
    /// Armor of the given category, no shield, no natural armor.
    pub fn new(category: ArmorCategory) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Add a shield.
    pub fn with_shield(mut self, shield: bool) -> Self {
        self.shield = shield;
        self
    }

    /// Set the natural armor bonus.
    pub fn with_natural(mut self, natural: i32) -> Self {
        self.natural = natural;
        self
    }
}

/// Armor class from an explicit Dexterity modifier.
pub fn armor_class_for_modifier(dex_mod: i32, armor: &Armor) -> i32 {
    let shield = if armor.shield { SHIELD_BONUS } else { 0 };
    BASE_ARMOR_CLASS + armor.category.dex_contribution(dex_mod) + shield + armor.natural
}

/// Armor class using the character's own Dexterity.
pub fn armor_class(character: &StandardCharacter, armor: &Armor) -> i32 {
    armor_class_for_modifier(ability_modifier(character.abilities.dexterity), armor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ac(category: ArmorCategory, shield: bool) -> i32 {
        armor_class_for_modifier(4, &Armor::new(category).with_shield(shield))
    }

    #[test]
    fn category_matrix_with_dex_plus_four() {
        assert_eq!(ac(ArmorCategory::Light, false), 14);
        assert_eq!(ac(ArmorCategory::Medium, false), 12);
        assert_eq!(ac(ArmorCategory::Heavy, false), 10);
        assert_eq!(ac(ArmorCategory::None, false), 14);
    }

    #[test]
    fn shield_adds_two_everywhere() {
        for category in [
            ArmorCategory::None,
            ArmorCategory::Light,
            ArmorCategory::Medium,
            ArmorCategory::Heavy,
        ] {
            assert_eq!(ac(category, true), ac(category, false) + 2);
        }
    }

    #[test]
    fn medium_cap_does_not_raise_negative_dex() {
        let armor = Armor::new(ArmorCategory::Medium);
        assert_eq!(armor_class_for_modifier(-1, &armor), 9);
    }

    #[test]
    fn natural_armor_stacks() {
        let armor = Armor::new(ArmorCategory::Heavy)
            .with_shield(true)
            .with_natural(3);
        assert_eq!(armor_class_for_modifier(5, &armor), 15);
    }

    #[test]
    fn parse_falls_back_to_none() {
        assert_eq!(ArmorCategory::parse("Medium"), ArmorCategory::Medium);
        assert_eq!(ArmorCategory::parse("mithral"), ArmorCategory::None);
        assert_eq!(ArmorCategory::parse(""), ArmorCategory::None);
    }
}
