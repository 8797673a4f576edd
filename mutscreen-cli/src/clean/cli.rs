use clap::{Arg, Command};

pub const CLEAN_CMD: &str = "clean";

pub fn create_clean_cli() -> Command {
    Command::new(CLEAN_CMD)
        .about("Drop rows without a value in the fourth column from every TSV file in a directory.")
        .arg_required_else_help(true)
        .arg(Arg::new("input_dir").required(true))
        .arg(Arg::new("output_dir").required(true))
}
