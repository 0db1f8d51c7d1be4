//! Team roster.
//!
//! A team's position in the roster is its canonical identifier. Stored
//! assignments only hold that position, so the roster order must stay fixed
//! for as long as assignments exist.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use teamsort_config::TeamConfig;

/// Position of a team in the roster.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TeamIndex(usize);

impl TeamIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for TeamIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for TeamIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub motto: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

impl Team {
    /// Display string handed back to the collaborator: name, then motto.
    pub fn caption(&self) -> String {
        if self.motto.is_empty() {
            self.name.clone()
        } else {
            format!("{}\n{}", self.name, self.motto)
        }
    }
}

impl From<TeamConfig> for Team {
    fn from(config: TeamConfig) -> Self {
        Self {
            name: config.name.trim().to_string(),
            motto: config.motto.trim().to_string(),
            image: config.image,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Team roster is empty: at least one team is required")]
    Empty,
}

/// Ordered, non-empty list of teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRoster {
    teams: Vec<Team>,
}

impl TeamRoster {
    pub fn new(teams: Vec<Team>) -> Result<Self, RosterError> {
        if teams.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { teams })
    }

    pub fn from_config(teams: Vec<TeamConfig>) -> Result<Self, RosterError> {
        Self::new(teams.into_iter().map(Team::from).collect())
    }

    /// Number of teams. Never zero.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn get(&self, index: TeamIndex) -> Option<&Team> {
        self.teams.get(index.get())
    }

    pub fn iter(&self) -> impl Iterator<Item = (TeamIndex, &Team)> {
        self.teams
            .iter()
            .enumerate()
            .map(|(i, team)| (TeamIndex(i), team))
    }
}
