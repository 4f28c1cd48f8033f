use std::process;

use anyhow::Result;
use clap::Parser;
use wordbook_config::Config;

pub mod cli;
pub mod commands;
pub mod logging;


use self::cli::{Cli, Command};

fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbosity(), cli.log_json);

    if let Err(e) = run(cli) {
        tracing::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;

    match &cli.command {
        Command::Convert(args) => {
            args.apply(&mut config);
            let summary = commands::convert(&config)?;
            println!(
                "Wrote {} entries to {} ({} skipped)",
                summary.entries,
                config.source.output.display(),
                summary.skipped
            );
        }
        Command::Patch(args) => {
            args.apply(&mut config);
            let report = commands::patch_document(&config, args.dry_run)?;
            println!(
                "Added {} phonetics, {} still missing",
                report.substituted,
                report.missing.len()
            );
        }
        Command::Dupes(args) => {
            args.apply(&mut config);
            let report = commands::dupes(&config, args)?;
            print!("{}", commands::format_dupes(&config.dupes.column, &report));
        }
    }

    Ok(())
}
