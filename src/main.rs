use sol_replace::cli::CliArgs;
use sol_replace::util::{init_logging, parse_level, LoggingConfig};
use sol_replace::{RealFileSystem, RewriteSummary, Rewriter, VERSION};

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging(logging_config_from_args(&args));

    debug!("sol-replace v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match run() {
        Ok(summary) => {
            debug!(?summary, "Finished");
            0
        }
        Err(err) => {
            debug!(error = ?err, "Rewrite aborted");
            eprintln!("Error: {:#}", err);
            1
        }
    };

    process::exit(exit_code);
}

fn run() -> Result<RewriteSummary> {
    Rewriter::in_current_dir(RealFileSystem::new())
        .run()
        .context("Failed to rewrite .sol files")
}

fn logging_config_from_args(args: &CliArgs) -> LoggingConfig {
    let mut config = LoggingConfig::from_env();

    if let Some(level_str) = &args.log_level {
        config.level = parse_level(level_str);
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }

    config
}
