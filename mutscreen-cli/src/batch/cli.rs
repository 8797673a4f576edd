use clap::{Arg, Command};

pub const BATCH_CMD: &str = "batch";

fn dir_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).required(true).help(help)
}

pub fn create_batch_cli() -> Command {
    Command::new(BATCH_CMD)
        .about("Screen every dataset found in a datasets directory.")
        .arg_required_else_help(true)
        .arg(dir_arg("tsv-dir", "Directory of cleaned sample tables"))
        .arg(dir_arg("mutations-dir", "Directory of curated mutation lists"))
        .arg(dir_arg(
            "datasets",
            "Directory whose subdirectories name the datasets to screen",
        ))
        .arg(dir_arg("output-dir", "Directory the summaries are written to"))
}
