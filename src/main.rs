mod cli;

use vid_to_gif::{app, config};
use vtg_av::{ConversionSummary, ToolRegistry};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "vid_to_gif=debug,vtg_av=debug,vtg_core=debug".to_string()
        } else {
            "vid_to_gif=info,vtg_av=info,vtg_core=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let hint = e
                .downcast_ref::<vtg_core::Error>()
                .and_then(vtg_core::Error::hint);
            match hint {
                Some(hint) => eprintln!("Error: {e:#} ({hint})"),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ConversionSummary> {
    let config = config::load_config_or_default(cli.config.as_deref())?;
    let tools = ToolRegistry::discover(&config.tools);
    let request = cli.to_request(&config.defaults);

    app::preflight(&tools, &request)?;

    app::convert(&tools, &request).context("converting video to GIF")
}
