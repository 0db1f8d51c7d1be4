mod admin;
mod assignment;
mod global;
mod query;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(assignment::join_command())
        .subcommand(assignment::team_command())
        .subcommand(query::counts_command())
        .subcommand(query::teams_command())
        .subcommand(admin::reset_command())
}
