//! CLI entrypoint for dog-quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use dog_quiz_application::{BreedRepository, BuildQuizUseCase, QuizController};
use dog_quiz_infrastructure::{
    ConfigLoader, DogCeoClient, FileConfig, HttpImageLoader, build_http_client,
};
use dog_quiz_presentation::{Cli, ConsoleFormatter, OutputConfig, QuizRepl, ReplConfig};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Flushes buffered file logs when dropped at the end of main
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    info!("Starting dog-quiz against {}", config.api.base_url);

    // === Dependency Injection ===
    let http = build_http_client(config.api.timeout()).context("Failed to create HTTP client")?;
    let api = Arc::new(DogCeoClient::new(http.clone(), &config.api.base_url));
    let image_loader = Arc::new(HttpImageLoader::new(http));
    let repository = Arc::new(BreedRepository::new(api));
    let use_case = BuildQuizUseCase::new(repository, image_loader);

    // Starts loading the first quiz right away
    let controller = QuizController::start(use_case, config.quiz.to_quiz_params());

    let output = OutputConfig {
        color: config.output.color && !cli.no_color,
        image_preview: config.output.image_preview && !cli.no_preview,
        preview_width: config.output.preview_width,
    };
    let repl = QuizRepl::new(controller, ConsoleFormatter::new(output)).with_config(ReplConfig {
        show_progress: !cli.quiet,
        rounds: cli.rounds,
    });

    let score = repl.run().await?;
    info!(
        answered = score.answered(),
        first_try = score.first_try(),
        "Session finished"
    );

    Ok(())
}

/// Install the tracing subscriber.
///
/// `-v` picks the level (`RUST_LOG` wins when set). Logs go to stderr, or
/// to a daily-rotated file under `--log-dir`.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &cli.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "dog-quiz.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }
    Ok(config)
}
