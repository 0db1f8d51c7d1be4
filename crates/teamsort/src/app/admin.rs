use clap::{Arg, ArgAction, Command};

pub fn reset_command() -> Command {
    Command::new("reset")
        .about("Remove every team assignment (operators only)")
        .arg(
            Arg::new("operator")
                .long("operator")
                .help("Operator user id requesting the reset")
                .required(true)
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Skip the confirmation prompt")
                .action(ArgAction::SetTrue),
        )
}
