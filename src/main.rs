//! linkdeck binary entrypoint kept minimal. The full runtime lives in `app`.

use std::sync::OnceLock;

use clap::Parser;

use linkdeck::args::{Args, determine_log_level};
use linkdeck::{app, theme};

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing logger writing to ~/.config/linkdeck/logs/linkdeck.log
    {
        let mut log_path = theme::logs_dir();
        log_path.push("linkdeck.log");
        let level = determine_log_level(&args);
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    tracing::info!(dry_run = args.dry_run, "linkdeck starting");
    if let Err(err) = app::run(&args).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("linkdeck: {err}");
        std::process::exit(1);
    }
    tracing::info!("linkdeck exited");
}
