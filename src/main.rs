//! Ordspor CLI entry point.

use anyhow::Result;
use clap::Parser;
use ordspor::cli::{commands, Cli, Commands};
use ordspor::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("ordspor={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Align {
            transcript,
            timings,
            output,
            min_ratio,
            window_size,
            similarity,
        } => {
            commands::run_align(
                transcript,
                timings,
                output.clone(),
                *min_ratio,
                *window_size,
                similarity.clone(),
                &settings,
            )?;
        }

        Commands::Segment {
            timings,
            output,
            vocabulary,
        } => {
            commands::run_segment(timings, output.clone(), *vocabulary, &settings)?;
        }

        Commands::Words {
            input,
            is_file,
            output,
        } => {
            commands::run_words(input, *is_file, output.clone())?;
        }

        Commands::Config { action } => {
            commands::run_config(action, &settings)?;
        }
    }

    Ok(())
}
