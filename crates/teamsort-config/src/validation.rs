//! Configuration validation logic.
//!
//! The roster is checked once at startup. Every later component assumes it
//! is non-empty, so an empty roster must never get past this point.

use std::collections::HashSet;

use crate::errors::ConfigError;
use crate::types::{StoreBackend, TeamsortConfig};

/// Validate a TeamsortConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - The roster must contain at least one team
/// - Team names must be non-blank and unique (case-insensitive)
/// - A store path set alongside the memory backend is ignored (warning only)
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` describing the first failed rule.
pub fn validate_config(config: &TeamsortConfig) -> Result<(), ConfigError> {
    let teams = config.teams();

    if teams.is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "Roster must contain at least one team".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (index, team) in teams.iter().enumerate() {
        let name = team.name.trim();
        if name.is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("Team #{} has an empty name", index),
            });
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("Duplicate team name '{}'", name),
            });
        }
    }

    if config.store.backend() == StoreBackend::Memory && config.store.path.is_some() {
        tracing::warn!(
            event = "config.validation.path_ignored",
            "store.path is ignored by the memory backend"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TeamConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TeamsortConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_roster_rejected() {
        let config = TeamsortConfig {
            teams: Some(vec![]),
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("at least one team"));
    }

    #[test]
    fn test_blank_team_name_rejected() {
        let config = TeamsortConfig {
            teams: Some(vec![TeamConfig::new("Red", ""), TeamConfig::new("  ", "")]),
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Team #1 has an empty name"));
    }

    #[test]
    fn test_duplicate_team_name_rejected() {
        let config = TeamsortConfig {
            teams: Some(vec![TeamConfig::new("Red", ""), TeamConfig::new("red", "")]),
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Duplicate team name 'red'"));
    }

    #[test]
    fn test_single_team_roster_is_valid() {
        let config = TeamsortConfig {
            teams: Some(vec![TeamConfig::new("Everyone", "")]),
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
