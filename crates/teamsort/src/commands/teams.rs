use clap::ArgMatches;
use tracing::info;

use teamsort_core::TeamRoster;
use teamsort_paths::TeamsortPaths;

use super::helpers::{existing_image, load_config};
use super::json_types::RosterEntry;
use crate::color;

pub(crate) fn handle_teams_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.teams_started", json_output = json_output);

    // The roster comes from config alone; the store is never opened.
    let config = load_config()?;
    let roster = TeamRoster::from_config(config.teams())?;
    let paths = TeamsortPaths::resolve()?;

    if json_output {
        let entries: Vec<RosterEntry> = roster
            .iter()
            .map(|(index, team)| RosterEntry {
                index: index.get(),
                name: team.name.clone(),
                motto: team.motto.clone(),
                image: existing_image(team, &paths).map(|p| p.display().to_string()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (index, team) in roster.iter() {
            println!("{:>2}. {}", index, color::team(&team.name));
            if !team.motto.is_empty() {
                println!("    {}", color::muted(&team.motto));
            }
        }
    }

    info!(event = "cli.teams_completed", count = roster.len());

    Ok(())
}
