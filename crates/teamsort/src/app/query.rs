use clap::Command;

use super::global::json_arg;

pub fn counts_command() -> Command {
    Command::new("counts")
        .about("Show how many users each team has")
        .arg(json_arg())
}

pub fn teams_command() -> Command {
    Command::new("teams")
        .about("List the team roster in index order")
        .arg(json_arg())
}
