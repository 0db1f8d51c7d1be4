//! # teamsort-config
//!
//! TOML configuration types, loading, and validation for teamsort.
//!
//! Single source of truth for the team roster, store backend selection and
//! the static operator list. Depends only on `teamsort-paths`.

mod defaults;
mod loading;
mod validation;

pub mod errors;
pub mod types;

// Public API re-exports
pub use defaults::default_teams;
pub use errors::ConfigError;
pub use loading::{
    ENV_DB_PATH, ENV_OPERATOR_IDS, ENV_STORE, apply_env_overrides, load_hierarchy,
    load_hierarchy_from, merge_configs, parse_operator_ids,
};
pub use types::{OperatorConfig, StoreBackend, StoreConfig, TeamConfig, TeamsortConfig};
pub use validation::validate_config;

impl TeamsortConfig {
    /// Load configuration from the hierarchy of config files and environment.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
