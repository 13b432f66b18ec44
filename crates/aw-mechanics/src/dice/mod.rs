//! Dice types and die rollers.
//!
//! Hit dice and the d20 are the only dice the rules engine needs, but the
//! full polyhedral set is modelled so content data can name any of them.

pub mod roller;

pub use roller::{DieRoller, FixedRoller};

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// The face value of the die as a signed number, for HP arithmetic.
    pub fn face(self) -> i32 {
        i32::try_from(self.sides()).unwrap_or(i32::MAX)
    }

    /// Average roll rounded up the way level-up hit points use it:
    /// `floor(sides / 2) + 1`.
    pub fn average(self) -> i32 {
        self.face() / 2 + 1
    }

    /// Parse a die from a tag like "d8", "D12" or "8".
    ///
    /// Hit dice in content data are usually written with the `d` prefix,
    /// but a bare face count is accepted as well.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let digits = s.strip_prefix('d').unwrap_or(&s);
        match digits.parse::<u32>().ok()? {
            4 => Some(Self::D4),
            6 => Some(Self::D6),
            8 => Some(Self::D8),
            10 => Some(Self::D10),
            12 => Some(Self::D12),
            20 => Some(Self::D20),
            100 => Some(Self::D100),
            n if n >= 2 => Some(Self::Custom(n)),
            _ => None,
        }
    }
}

impl std::str::FromStr for Die {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| MechError::InvalidDie(s.to_string()))
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// How a d20 check is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RollMode {
    /// A single die.
    #[default]
    Normal,
    /// Roll twice, keep the higher.
    Advantage,
    /// Roll twice, keep the lower.
    Disadvantage,
}

impl RollMode {
    /// Combine advantage and disadvantage flags; having both cancels out.
    pub fn from_flags(advantage: bool, disadvantage: bool) -> Self {
        match (advantage, disadvantage) {
            (true, false) => Self::Advantage,
            (false, true) => Self::Disadvantage,
            _ => Self::Normal,
        }
    }
}
