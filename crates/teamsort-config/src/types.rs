//! Configuration types.
//!
//! Every section is optional in TOML. Unset fields stay `None` so that
//! [`crate::merge_configs`] can tell "not configured" apart from "configured
//! to the default"; accessor methods apply the built-in defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::errors::ConfigError;

/// Root configuration, as read from `config.toml`.
///
/// ```toml
/// [store]
/// backend = "redb"
/// path = "/var/lib/teamsort/teams.redb"
///
/// [operators]
/// ids = [123456789]
///
/// [[teams]]
/// name = "Elves"
/// motto = "Eternity behind us, victory within us!"
/// image = "assets/elves.jpg"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamsortConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub operators: OperatorConfig,

    /// Ordered team roster. The position of a team is its stored index, so a
    /// roster must never be reordered while assignments exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<TeamConfig>>,
}

impl TeamsortConfig {
    /// The configured roster, or the built-in five teams when none is set.
    pub fn teams(&self) -> Vec<TeamConfig> {
        self.teams.clone().unwrap_or_else(defaults::default_teams)
    }
}

/// Which assignment store backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-lifetime map. Nothing survives a restart.
    Memory,
    /// Embedded redb database on disk.
    #[default]
    Redb,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::Redb => write!(f, "redb"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "redb" => Ok(StoreBackend::Redb),
            other => Err(ConfigError::InvalidConfiguration {
                message: format!("Invalid store backend '{}'. Valid options: memory, redb", other),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<StoreBackend>,

    /// Database file for the redb backend. Defaults to `~/.teamsort/teams.redb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn backend(&self) -> StoreBackend {
        self.backend.unwrap_or_default()
    }
}

/// Static operator identifiers allowed to reset all assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
}

impl OperatorConfig {
    pub fn ids(&self) -> &[i64] {
        self.ids.as_deref().unwrap_or(&[])
    }
}

/// One entry of the team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,

    #[serde(default)]
    pub motto: String,

    /// Visual asset shown alongside the team. Relative paths are resolved by
    /// the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

impl TeamConfig {
    pub fn new(name: impl Into<String>, motto: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            motto: motto.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<PathBuf>) -> Self {
        self.image = Some(image.into());
        self
    }
}
