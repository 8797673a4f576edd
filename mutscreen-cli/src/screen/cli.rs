use clap::{Arg, Command};

use mutscreen_io::consts::DEFAULT_OUTPUT_PREFIX;

pub const SCREEN_CMD: &str = "screen";

pub fn create_screen_cli() -> Command {
    Command::new(SCREEN_CMD)
        .about("Screen a sample table against a curated mutation list.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .required(true)
                .help("Tab-separated sample table (seqName, aaSubstitutions, ...)"),
        )
        .arg(
            Arg::new("mutations")
                .short('m')
                .long("mutations")
                .required(false)
                .help("Curated mutation list (Gene, AminoAcid, Combination, Reason_for_Inclusion)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value(DEFAULT_OUTPUT_PREFIX)
                .help("Prefix of the _summary.csv and _freq_summary.csv outputs"),
        )
}
