use std::path::PathBuf;

use tracing::error;

use teamsort_config::TeamsortConfig;
use teamsort_core::errors::log_app_error;
use teamsort_core::{Team, TeamService};
use teamsort_paths::TeamsortPaths;

use crate::color;

/// Load configuration, reporting failures to the user.
///
/// Unlike most settings, a broken roster must not silently fall back to the
/// defaults: stored team indices would then point at different teams.
pub fn load_config() -> Result<TeamsortConfig, Box<dyn std::error::Error>> {
    TeamsortConfig::load_hierarchy().map_err(|e| {
        eprintln!("{} {}", color::error("Could not load config:"), e);
        eprintln!(
            "  {}",
            color::hint(
                "Tip: Check ~/.teamsort/config.toml and ./.teamsort/config.toml for syntax errors."
            )
        );
        error!(event = "cli.config.load_failed", error = %e);
        e
    })
}

/// Load configuration and open the configured store.
pub fn open_service() -> Result<(TeamService, TeamsortPaths), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let paths = TeamsortPaths::resolve()?;

    match TeamService::from_config(&config, &paths.assignments_db()) {
        Ok(service) => Ok((service, paths)),
        Err(e) => {
            eprintln!("{} {}", color::error("Could not open team store:"), e);
            error!(event = "cli.store.open_failed", error = %e);
            log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Image path for `team`, if it references a file that exists.
pub fn existing_image(team: &Team, paths: &TeamsortPaths) -> Option<PathBuf> {
    team.image
        .as_deref()
        .map(|image| paths.resolve_asset(image))
        .filter(|path| path.is_file())
}

/// Print a team card: name, motto, and image when available.
pub fn print_team_card(team: &Team, paths: &TeamsortPaths) {
    println!("{}", color::team(&team.name));
    if !team.motto.is_empty() {
        println!("{}", team.motto);
    }
    if let Some(image) = existing_image(team, paths) {
        println!("  {} {}", color::muted("Image:"), image.display());
    }
}

/// Check if user confirmation input indicates acceptance.
/// Accepts "y" or "yes" (case-insensitive).
pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}

/// "1 assignment" / "3 assignments".
pub fn format_assignments(count: usize) -> String {
    if count == 1 {
        "1 assignment".to_string()
    } else {
        format!("{} assignments", count)
    }
}
