//! CLI entrypoint for rival-challenge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use challenge_application::{
    NoProgress, RunChallengeUseCase, TeamDatasetProvider, TurnProgressNotifier,
};
use challenge_domain::AnswerEngine;
use challenge_infrastructure::{
    ConfigLoader, FileConfig, FileTeamDatasetProvider, HttpChallengeService,
    JsonlTranscriptLogger,
};
use challenge_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting rival-challenge");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    // === Dependency Injection ===
    // Dataset must load before any conversation begins
    let dataset = FileTeamDatasetProvider::new(&config.challenge.dataset_path)
        .load()
        .context("Failed to load team dataset")?;
    let engine = AnswerEngine::new(Arc::new(dataset));

    let service = Arc::new(HttpChallengeService::new(
        &config.service.base_url,
        config.timeout(),
    )?);

    let mut use_case =
        RunChallengeUseCase::new(service, engine).with_params(config.challenge_params());

    if let Some(path) = &config.challenge.transcript_path {
        match JsonlTranscriptLogger::new(path) {
            Some(logger) => {
                info!("Writing transcript to {}", logger.path().display());
                use_case = use_case.with_transcript(Arc::new(logger));
            }
            None => warn!("Transcript disabled: could not open {}", path),
        }
    }

    let progress: Box<dyn TurnProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if cli.plain {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    match use_case.execute_with_progress(progress.as_ref()).await {
        Ok(outcome) => {
            if !cli.quiet {
                println!("{}", ConsoleFormatter::format_outcome(&outcome));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_failure(&e));
            Err(e.into())
        }
    }
}

/// Initialize logging based on verbosity level, optionally teeing to a file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .context("--log-file must name a file")?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Explicit CLI flags take precedence over every config source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(dataset) = &cli.dataset {
        config.challenge.dataset_path = dataset.display().to_string();
    }
    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
    }
    if let Some(name) = &cli.name {
        config.participant.name = name.clone();
    }
    if let Some(email) = &cli.email {
        config.participant.email = email.clone();
    }
    if let Some(max_turns) = cli.max_turns {
        config.challenge.max_turns = max_turns;
    }
    if let Some(timeout) = cli.timeout {
        config.service.timeout_seconds = timeout;
    }
    if let Some(transcript) = &cli.transcript {
        config.challenge.transcript_path = Some(transcript.display().to_string());
    }
}
