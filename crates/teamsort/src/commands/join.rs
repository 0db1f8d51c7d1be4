use clap::ArgMatches;
use tracing::{error, info};

use teamsort_core::errors::log_app_error;
use teamsort_core::{UserId, UserProfile};

use super::helpers::{existing_image, open_service, print_team_card};
use super::json_types::PlacementOutput;
use crate::color;

pub(crate) fn handle_join_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let user_id = matches
        .get_one::<i64>("user-id")
        .copied()
        .map(UserId::new)
        .ok_or("User id argument is required")?;
    let json_output = matches.get_flag("json");
    let profile = UserProfile::new(
        matches.get_one::<String>("username").cloned(),
        matches.get_one::<String>("full-name").cloned(),
    );

    info!(event = "cli.join_started", user_id = %user_id);

    let (service, paths) = open_service()?;

    let placement = match service.allocate_and_record(user_id, profile) {
        Ok(placement) => placement,
        Err(e) => {
            eprintln!("{} {}", color::error("Could not assign a team:"), e);
            error!(event = "cli.join_failed", user_id = %user_id, error = %e);
            log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        let record = service.assignment(user_id)?;
        let image = existing_image(&placement.team, &paths).map(|p| p.display().to_string());
        let output = PlacementOutput::from_placement(&placement, image, record.as_ref());
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if placement.newly_assigned {
            println!("{}", color::success("Welcome! You have joined:"));
        } else {
            println!("{}", color::muted("You are already a member of:"));
        }
        print_team_card(&placement.team, &paths);
    }

    info!(
        event = "cli.join_completed",
        user_id = %user_id,
        team_index = %placement.team_index,
        newly_assigned = placement.newly_assigned
    );

    Ok(())
}
