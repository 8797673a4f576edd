use clap::{Arg, Command};

pub const PREPARE_CMD: &str = "prepare";

pub fn create_prepare_cli() -> Command {
    Command::new(PREPARE_CMD)
        .about("Copy consensus FASTA files (.fa, .consensus.fasta, .irma.fasta) into one directory as .fasta.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input_dir")
                .short('i')
                .long("input_dir")
                .required(true)
                .help("Directory of consensus FASTA files"),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output_dir")
                .required(true)
                .help("Directory the renamed files are copied to"),
        )
}
