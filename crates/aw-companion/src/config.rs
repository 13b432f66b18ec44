//! Configuration for building dual-system characters.

use aw_mechanics::{Ability, SpellProgression, SpellcastingClass};
use serde::{Deserialize, Serialize};

use crate::error::CompanionResult;
use crate::system::RulesSystem;

/// Defaults applied when a native record is turned into a dual-system
/// character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// System that answers queries until the user switches.
    pub default_system: RulesSystem,
    /// Profile the spell ledger is built from.
    pub spellcasting: SpellcastingClass,
    /// Standard class when the native record has no job.
    pub default_class: String,
    /// Standard race label.
    pub default_race: String,
    /// Standard background label.
    pub default_background: String,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            default_system: RulesSystem::Native,
            spellcasting: SpellcastingClass::new(
                "Mage",
                Ability::Intelligence,
                SpellProgression::Full,
            ),
            default_class: "Commoner".to_string(),
            default_race: "Human".to_string(),
            default_background: "Adventurer".to_string(),
        }
    }
}

impl CompanionConfig {
    /// Set the starting rules system.
    pub fn with_system(mut self, system: RulesSystem) -> Self {
        self.default_system = system;
        self
    }

    /// Set the spellcasting profile.
    pub fn with_spellcasting(mut self, spellcasting: SpellcastingClass) -> Self {
        self.spellcasting = spellcasting;
        self
    }

    /// Set the fallback class label.
    pub fn with_default_class(mut self, class: impl Into<String>) -> Self {
        self.default_class = class.into();
        self
    }

    /// Set the race label.
    pub fn with_default_race(mut self, race: impl Into<String>) -> Self {
        self.default_race = race.into();
        self
    }

    /// Set the background label.
    pub fn with_default_background(mut self, background: impl Into<String>) -> Self {
        self.default_background = background.into();
        self
    }

    /// Load a config document; omitted keys keep their defaults.
    pub fn from_json(json: &str) -> CompanionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = CompanionConfig::default();
        assert_eq!(cfg.default_system, RulesSystem::Native);
        assert_eq!(cfg.spellcasting.name, "Mage");
        assert_eq!(cfg.spellcasting.progression, SpellProgression::Full);
        assert_eq!(cfg.default_class, "Commoner");
        assert_eq!(cfg.default_race, "Human");
        assert_eq!(cfg.default_background, "Adventurer");
    }

    #[test]
    fn builder_methods() {
        let cfg = CompanionConfig::default()
            .with_system(RulesSystem::Hybrid)
            .with_spellcasting(SpellcastingClass::new(
                "Warlock",
                Ability::Charisma,
                SpellProgression::Pact,
            ))
            .with_default_class("Hunter")
            .with_default_race("Elf")
            .with_default_background("Sage");
        assert_eq!(cfg.default_system, RulesSystem::Hybrid);
        assert_eq!(cfg.spellcasting.progression, SpellProgression::Pact);
        assert_eq!(cfg.default_class, "Hunter");
        assert_eq!(cfg.default_race, "Elf");
        assert_eq!(cfg.default_background, "Sage");
    }

    #[test]
    fn from_json_partial() {
        let cfg = CompanionConfig::from_json(
            r#"{
                "default_system": "dnd5e",
                "spellcasting": {"name": "Paladin", "ability": "charisma", "progression": "half"}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.default_system, RulesSystem::Standard);
        assert_eq!(cfg.spellcasting.ability, Ability::Charisma);
        assert_eq!(cfg.default_class, "Commoner");
    }
}
