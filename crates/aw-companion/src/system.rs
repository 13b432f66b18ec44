//! Which rule system answers derived queries.

use serde::{Deserialize, Serialize};

use crate::error::CompanionError;

/// The rule system a character's derived numbers come from.
///
/// `Hybrid` reads ability scores like `Native` but is not routed to the
/// standard formulas for armor class or skills either; every query spells
/// out its own arm for it so that changing that is a visible decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RulesSystem {
    /// The game's own six-attribute system.
    #[default]
    #[serde(alias = "solo-leveling")]
    Native,
    /// The standard d20 system.
    #[serde(alias = "dnd5e")]
    Standard,
    /// Both at once.
    Hybrid,
}

impl RulesSystem {
    /// Parse a system name. Accepts the legacy labels `solo-leveling` and
    /// `dnd5e` as well as the canonical ones.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "native" | "solo-leveling" => Some(Self::Native),
            "standard" | "dnd5e" | "5e" | "d20" => Some(Self::Standard),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

impl std::str::FromStr for RulesSystem {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CompanionError::UnknownSystem(s.to_string()))
    }
}

impl std::fmt::Display for RulesSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Native => "native",
            Self::Standard => "standard",
            Self::Hybrid => "hybrid",
        };
        f.write_str(label)
    }
}
