use clap::ArgMatches;
use tracing::{error, info};

use teamsort_core::UserId;
use teamsort_core::errors::log_app_error;

use super::helpers::{existing_image, open_service, print_team_card};
use super::json_types::PlacementOutput;
use crate::color;

pub(crate) fn handle_team_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let user_id = matches
        .get_one::<i64>("user-id")
        .copied()
        .map(UserId::new)
        .ok_or("User id argument is required")?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.team_started", user_id = %user_id);

    let (service, paths) = open_service()?;

    let placement = match service.lookup(user_id) {
        Ok(placement) => placement,
        Err(e) => {
            eprintln!("{} {}", color::error("Could not look up team:"), e);
            error!(event = "cli.team_failed", user_id = %user_id, error = %e);
            log_app_error(&e);
            return Err(e.into());
        }
    };

    match (&placement, json_output) {
        (Some(placement), true) => {
            let record = service.assignment(user_id)?;
            let image = existing_image(&placement.team, &paths).map(|p| p.display().to_string());
            let output = PlacementOutput::from_placement(placement, image, record.as_ref());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (None, true) => {
            let output = PlacementOutput::unassigned(user_id.get());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (Some(placement), false) => print_team_card(&placement.team, &paths),
        (None, false) => {
            println!("User {} has not joined a team yet.", user_id);
            eprintln!(
                "  {}",
                color::hint(&format!("Hint: Run `teamsort join {}` to pick one.", user_id))
            );
        }
    }

    info!(
        event = "cli.team_completed",
        user_id = %user_id,
        assigned = placement.is_some()
    );

    Ok(())
}
