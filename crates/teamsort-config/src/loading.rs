//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in roster, redb backend, no operators
//! 2. **User config** - `~/.teamsort/config.toml`
//! 3. **Project config** - `./.teamsort/config.toml`
//! 4. **Environment** - `TEAMSORT_OPERATOR_IDS`, `TEAMSORT_STORE`, `TEAMSORT_DB_PATH`

use crate::errors::ConfigError;
use crate::types::{OperatorConfig, StoreConfig, TeamsortConfig};
use crate::validation::validate_config;
use std::fs;
use std::path::{Path, PathBuf};

/// Comma-separated operator ids. Replaces `[operators] ids` when set.
pub const ENV_OPERATOR_IDS: &str = "TEAMSORT_OPERATOR_IDS";
/// Store backend override (`memory` or `redb`).
pub const ENV_STORE: &str = "TEAMSORT_STORE";
/// Database path override for the redb backend.
pub const ENV_DB_PATH: &str = "TEAMSORT_DB_PATH";

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files and the environment.
///
/// # Errors
///
/// Returns an error if a config file cannot be parsed, an environment
/// override is malformed, or validation fails. Missing config files are not
/// errors.
pub fn load_hierarchy() -> Result<TeamsortConfig, Box<dyn std::error::Error>> {
    let paths = teamsort_paths::TeamsortPaths::resolve().map_err(|e| e.to_string())?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(
        &paths.user_config(),
        &teamsort_paths::TeamsortPaths::project_config(&project_root),
    )
}

/// Load and merge the given user and project config files, then apply
/// environment overrides and validate.
pub fn load_hierarchy_from(
    user_config: &Path,
    project_config: &Path,
) -> Result<TeamsortConfig, Box<dyn std::error::Error>> {
    let mut config = TeamsortConfig::default();

    for path in [user_config, project_config] {
        match load_config_file(path) {
            Ok(file_config) => config = merge_configs(config, file_config),
            Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
            Err(_) => {
                tracing::debug!(
                    event = "config.file_not_found",
                    path = %path.display()
                );
            }
        }
    }

    let config = apply_env_overrides(config)?;

    validate_config(&config)?;

    tracing::debug!(
        event = "config.load_completed",
        backend = %config.store.backend(),
        teams = config.teams().len(),
        operators = config.operators.ids().len()
    );

    Ok(config)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &Path) -> Result<TeamsortConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)))?;
    let config: TeamsortConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// The roster is replaced wholesale, never merged entry by entry: team
/// indices are positional, so splicing two rosters would shift them.
pub fn merge_configs(base: TeamsortConfig, override_config: TeamsortConfig) -> TeamsortConfig {
    TeamsortConfig {
        store: StoreConfig {
            backend: override_config.store.backend.or(base.store.backend),
            path: override_config.store.path.or(base.store.path),
        },
        operators: OperatorConfig {
            ids: override_config.operators.ids.or(base.operators.ids),
        },
        teams: override_config.teams.or(base.teams),
    }
}

/// Parse a comma-separated operator list.
///
/// Spaces are removed and entries that are not plain digits are skipped,
/// so `"12, 34,abc"` yields `[12, 34]`. Other whitespace (tabs, newlines)
/// makes an entry invalid.
pub fn parse_operator_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(|part| part.replace(' ', ""))
        .filter(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|part| part.parse::<i64>().ok())
        .collect()
}

/// Apply `TEAMSORT_*` environment overrides on top of file configuration.
pub fn apply_env_overrides(mut config: TeamsortConfig) -> Result<TeamsortConfig, ConfigError> {
    if let Ok(raw) = std::env::var(ENV_OPERATOR_IDS) {
        let ids = parse_operator_ids(&raw);
        if ids.is_empty() && !raw.trim().is_empty() {
            tracing::warn!(
                event = "config.env.operator_ids_ignored",
                value = %raw,
                "No numeric operator ids found"
            );
        }
        config.operators.ids = Some(ids);
    }

    if let Ok(raw) = std::env::var(ENV_STORE)
        && !raw.trim().is_empty()
    {
        config.store.backend = Some(raw.parse()?);
    }

    if let Ok(raw) = std::env::var(ENV_DB_PATH)
        && !raw.trim().is_empty()
    {
        config.store.path = Some(PathBuf::from(raw));
    }

    Ok(config)
}
