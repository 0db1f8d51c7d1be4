use std::io::{self, Write};

use clap::ArgMatches;
use tracing::{error, info};

use teamsort_core::errors::log_app_error;
use teamsort_core::UserId;

use super::helpers::{format_assignments, is_confirmation_accepted, open_service};
use crate::color;

pub(crate) fn handle_reset_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let operator = matches
        .get_one::<i64>("operator")
        .copied()
        .map(UserId::new)
        .ok_or("Operator argument is required")?;
    let skip_confirmation = matches.get_flag("yes");

    info!(event = "cli.reset_started", operator = %operator);

    let (service, _paths) = open_service()?;

    if let Err(e) = service.authorize_operator(operator) {
        eprintln!("{}", color::error("Only operators can reset assignments."));
        eprintln!(
            "  {}",
            color::hint("Hint: Add the id to [operators] ids or TEAMSORT_OPERATOR_IDS.")
        );
        error!(event = "cli.reset_unauthorized", operator = %operator);
        log_app_error(&e);
        return Err(e.into());
    }

    if !skip_confirmation {
        let counts = service.team_counts()?;
        let total: usize = counts.iter().sum();

        println!(
            "{} This removes {} and cannot be undone.",
            color::warning("Warning:"),
            format_assignments(total)
        );
        print!("Reset all team assignments? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !is_confirmation_accepted(&input) {
            println!("Cancelled.");
            info!(event = "cli.reset_cancelled", operator = %operator);
            return Ok(());
        }
    }

    match service.reset_all() {
        Ok(removed) => {
            println!(
                "{} Removed {}.",
                color::success("Reset complete."),
                format_assignments(removed)
            );
            info!(
                event = "cli.reset_completed",
                operator = %operator,
                removed = removed
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not reset assignments:"), e);
            error!(event = "cli.reset_failed", operator = %operator, error = %e);
            log_app_error(&e);
            Err(e.into())
        }
    }
}
