mod batch;
mod clean;
mod combine;
mod prepare;
mod screen;
mod validate;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "mutscreen";
    pub const DEFAULT_LOG_FILTER: &str = "info";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Screen sequenced viral samples for curated amino-acid mutations, infer reference calls, and summarise mutation frequencies.")
        .subcommand_required(true)
        .subcommand(screen::cli::create_screen_cli())
        .subcommand(batch::cli::create_batch_cli())
        .subcommand(validate::cli::create_validate_cli())
        .subcommand(combine::cli::create_combine_cli())
        .subcommand(clean::cli::create_clean_cli())
        .subcommand(prepare::cli::create_prepare_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(consts::DEFAULT_LOG_FILTER),
    )
    .init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SCREEN ONE DATASET
        //
        Some((screen::cli::SCREEN_CMD, matches)) => {
            screen::handlers::run_screen(matches)?;
        }

        //
        // BATCH
        //
        Some((batch::cli::BATCH_CMD, matches)) => {
            batch::handlers::run_batch(matches)?;
        }

        //
        // VALIDATE CURATED LISTS
        //
        Some((validate::cli::VALIDATE_CMD, matches)) => {
            validate::handlers::run_validate(matches)?;
        }

        //
        // COMBINE SUMMARIES
        //
        Some((combine::cli::COMBINE_CMD, matches)) => {
            combine::handlers::run_combine(matches)?;
        }

        //
        // CLEAN CALLER OUTPUT
        //
        Some((clean::cli::CLEAN_CMD, matches)) => {
            clean::handlers::run_clean(matches)?;
        }

        //
        // PREPARE FASTA
        //
        Some((prepare::cli::PREPARE_CMD, matches)) => {
            prepare::handlers::run_prepare(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_well_formed() {
        build_parser().debug_assert();
    }

    #[test]
    fn test_screen_args() {
        let matches = build_parser()
            .try_get_matches_from(["mutscreen", "screen", "-i", "s.tsv", "-m", "c.csv"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, screen::cli::SCREEN_CMD);
        assert_eq!(sub.get_one::<String>("input").unwrap(), "s.tsv");
        assert_eq!(sub.get_one::<String>("mutations").unwrap(), "c.csv");
        assert_eq!(
            sub.get_one::<String>("output").unwrap(),
            mutscreen_io::consts::DEFAULT_OUTPUT_PREFIX
        );
    }

    #[test]
    fn test_batch_requires_all_dirs() {
        let result = build_parser().try_get_matches_from([
            "mutscreen",
            "batch",
            "--tsv-dir",
            "tsv",
            "--mutations-dir",
            "mut",
        ]);
        assert!(result.is_err());
    }
}
