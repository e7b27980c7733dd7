//! Cardinal CLI: press calculator keys from the command line
//!
//! ## Usage
//!
//! ```bash
//! cardinal run 5 '*' 4 + 2 =       # 22
//! cardinal run 9 sqrt              # 3
//! echo "1 / 3 =" | cardinal run    # one rendering per input line
//! cardinal --format json ops       # operation table as JSON
//! ```

use cardinal::prelude::OperationTable;
use cardinal_cli::{Cli, CliConfig, CliError, CliResult, Commands, KeyRunner, Renderer, Verbosity};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_tracing(&config)?;
    tracing::debug!(?config, "configuration resolved");

    let renderer = Renderer::new(config.format, config.color.should_color());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run(args) => {
            let mut runner = KeyRunner::new(renderer);
            if args.keys.is_empty() {
                runner.run_lines(io::stdin().lock(), &mut out)?;
            } else {
                runner.run_args(&args.keys, &mut out)?;
            }
        }
        Commands::Ops => {
            writeln!(out, "{}", renderer.operations(OperationTable::builtin())?)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet))
        .with_color(cli.color.clone().into())
        .with_format(cli.format.clone().into())
}

/// Logs go to stderr; `RUST_LOG` overrides the level chosen by -v/-q
fn init_tracing(config: &CliConfig) -> CliResult<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.verbosity.log_level().into())
        .from_env()
        .map_err(|e| CliError::config(format!("invalid RUST_LOG: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(config.color.should_color())
        .init();
    Ok(())
}
