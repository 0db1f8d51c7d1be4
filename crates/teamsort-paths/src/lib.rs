use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found: set the $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.teamsort/` directory layout.
///
/// Single source of truth for every path under `~/.teamsort/`. Use `resolve()`
/// in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct TeamsortPaths {
    base_dir: PathBuf,
}

impl TeamsortPaths {
    /// Resolve paths from the user's home directory (`~/.teamsort`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            base_dir: home.join(".teamsort"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base `~/.teamsort` directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    // --- Top-level files ---

    /// Embedded assignment database used by the `redb` store backend.
    pub fn assignments_db(&self) -> PathBuf {
        self.base_dir.join("teams.redb")
    }

    pub fn user_config(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }

    // --- Parameterized paths ---

    /// Resolve a team image reference. Relative references are taken from
    /// the base directory, so `assets/elves.jpg` maps to
    /// `~/.teamsort/assets/elves.jpg`.
    pub fn resolve_asset(&self, image: &Path) -> PathBuf {
        if image.is_absolute() {
            image.to_path_buf()
        } else {
            self.base_dir.join(image)
        }
    }

    // --- Static helpers (no self) ---

    /// Project-level config: `<project_root>/.teamsort/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".teamsort").join("config.toml")
    }
}
