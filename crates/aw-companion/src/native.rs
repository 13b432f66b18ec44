//! The native-system character record the facade is built from.

use aw_mechanics::NativeAbilities;
use serde::{Deserialize, Serialize};

use crate::error::CompanionResult;

fn default_level() -> u32 {
    1
}

/// The slice of a native character the rules engine reads.
///
/// Everything else about the native character lives in the native layer.
/// Missing fields default: level 1, every attribute 10, no job or path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCharacter {
    /// Character level, shared by both systems.
    #[serde(default = "default_level")]
    pub level: u32,
    /// Native attribute scores.
    #[serde(default)]
    pub abilities: NativeAbilities,
    /// Job label, used as the standard class.
    #[serde(default)]
    pub job: Option<String>,
    /// Path label, used as the standard subclass.
    #[serde(default)]
    pub path: Option<String>,
}

impl NativeCharacter {
    /// A record with no job or path.
    pub fn new(level: u32, abilities: NativeAbilities) -> Self {
        Self {
            level,
            abilities,
            job: None,
            path: None,
        }
    }

    /// Set the job label.
    pub fn with_job(mut self, job: impl Into<String>) -> Self {
        self.job = Some(job.into());
        self
    }

    /// Set the path label.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Parse a native record from JSON.
    pub fn from_json(json: &str) -> CompanionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
