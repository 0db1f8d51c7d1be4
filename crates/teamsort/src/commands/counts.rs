use clap::ArgMatches;
use tracing::{error, info};

use teamsort_core::errors::log_app_error;

use super::helpers::{format_assignments, open_service};
use super::json_types::{CountsOutput, TeamCount};
use crate::color;

pub(crate) fn handle_counts_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.counts_started", json_output = json_output);

    let (service, _paths) = open_service()?;

    let counts = match service.team_counts() {
        Ok(counts) => counts,
        Err(e) => {
            eprintln!("{} {}", color::error("Could not read team counts:"), e);
            error!(event = "cli.counts_failed", error = %e);
            log_app_error(&e);
            return Err(e.into());
        }
    };

    let teams: Vec<TeamCount> = service
        .roster()
        .iter()
        .zip(counts.iter().copied())
        .map(|((index, team), count)| TeamCount {
            index: index.get(),
            name: team.name.clone(),
            count,
        })
        .collect();
    let total: usize = counts.iter().sum();

    if json_output {
        let output = CountsOutput { teams, total };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let width = teams.iter().map(|t| t.name.len()).max().unwrap_or(0);
        for entry in &teams {
            println!(
                "{:>2}. {}  {}",
                entry.index,
                color::team(&format!("{:<width$}", entry.name)),
                entry.count
            );
        }
        println!("{}", color::muted(&format!("Total: {}", format_assignments(total))));
    }

    info!(event = "cli.counts_completed", total = total);

    Ok(())
}
