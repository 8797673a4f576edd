use clap::{Arg, Command};

pub const VALIDATE_CMD: &str = "validate";

pub fn create_validate_cli() -> Command {
    Command::new(VALIDATE_CMD)
        .about("Check the header and contents of every curated mutation list in a directory.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("mutation_dir")
                .required(true)
                .help("Directory of curated mutation lists"),
        )
}
