use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use regcred::cli;
use regcred::logging::{self, Verbosity};
use regcred::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let config = args.load_config()?;
    tracing::info!(
        source = %config.source(),
        format = args.format.as_str(),
        "using docker config"
    );

    let chain = config.chain();
    let hostname = match args.hostname.trim() {
        "" => chain.default_registry().to_string(),
        host => host.to_string(),
    };

    match chain.resolve(&hostname) {
        Some(credential) => {
            println!(
                "{}",
                OutputFormatter::format(&credential, args.format, args.show_secret)?
            );
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("no credential found for {hostname}");
            Ok(ExitCode::FAILURE)
        }
    }
}
