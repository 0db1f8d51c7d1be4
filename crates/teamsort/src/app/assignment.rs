use clap::{Arg, Command};

use super::global::{json_arg, user_id_arg};

pub fn join_command() -> Command {
    Command::new("join")
        .about("Assign a user to a team (returns the existing team if already assigned)")
        .arg(user_id_arg())
        .arg(
            Arg::new("username")
                .long("username")
                .help("Platform username, stored for display only"),
        )
        .arg(
            Arg::new("full-name")
                .long("full-name")
                .help("Full name, stored for display only"),
        )
        .arg(json_arg())
}

pub fn team_command() -> Command {
    Command::new("team")
        .about("Show the team a user belongs to")
        .arg(user_id_arg())
        .arg(json_arg())
}
