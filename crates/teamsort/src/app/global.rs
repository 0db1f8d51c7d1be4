use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("teamsort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assign users to balanced, sticky teams")
        .long_about("teamsort places every user in exactly one team of a fixed roster, always picking one of the least-populated teams. Assignments are stored durably and never change until an operator resets them all.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}

/// Positional `<user-id>` argument shared by several commands.
pub fn user_id_arg() -> Arg {
    Arg::new("user-id")
        .help("Platform user identifier")
        .required(true)
        .index(1)
        .value_parser(clap::value_parser!(i64))
        .allow_negative_numbers(true)
}

pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}
