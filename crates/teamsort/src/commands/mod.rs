use clap::ArgMatches;
use tracing::error;

mod counts;
mod helpers;
mod join;
mod json_types;
mod reset;
mod team;
mod teams;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        event = "cli.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );

    match matches.subcommand() {
        Some(("join", sub_matches)) => join::handle_join_command(sub_matches),
        Some(("team", sub_matches)) => team::handle_team_command(sub_matches),
        Some(("counts", sub_matches)) => counts::handle_counts_command(sub_matches),
        Some(("teams", sub_matches)) => teams::handle_teams_command(sub_matches),
        Some(("reset", sub_matches)) => reset::handle_reset_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
