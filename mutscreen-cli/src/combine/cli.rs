use clap::{Arg, Command};

pub const COMBINE_CMD: &str = "combine";

pub fn create_combine_cli() -> Command {
    Command::new(COMBINE_CMD)
        .about("Merge per-dataset summaries into Mutation_List.csv and Mutation_Counts.csv.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input-dir")
                .long("input-dir")
                .required(true)
                .help("Directory holding the _summary.csv and _freq_summary.csv files"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .required(true)
                .help("Directory the combined tables are written to"),
        )
}
