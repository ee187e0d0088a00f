//! Main entry point for the application.
//!
//! This module initializes logging, loads environment variables and
//! configuration, builds the task coordinator and the log/status sink, and
//! hands control to the interactive menu loop.

mod cli;
mod config;
mod constants;
mod core;
mod errors;
mod event;
mod llm;
mod tasks;
mod ui;
mod utils;

use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

use crate::core::{Coordinator, LogLevel, Sink};
use crate::llm::LlmClient;
use crate::tasks::TaskContext;
use crate::ui::{App, ConsoleFrontend};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Load configuration, falling back to defaults on error
/// 3. Initialize logging system
/// 4. Load environment variables
/// 5. Ensure the configured directories exist
/// 6. Build the LLM client, sink and coordinator, then run the menu loop
#[tokio::main]
async fn main() {
    let cli = cli::Cli::try_parse().expect("Failed to parse CLI arguments");

    let (config, config_error) = config::load_config_or_default(Path::new(&cli.config));

    let level = cli
        .logging_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());
    let logs_dir = (!cli.no_log_file).then(|| config.paths.logs.as_path());
    utils::init_logging(level, logs_dir);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    for dir in config.paths.all() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!("Could not create directory {}: {}", dir.display(), e);
        }
    }

    let llm = match LlmClient::new(&config.llm) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("LLM backend unavailable: {}", e);
            None
        }
    };

    let mut sink = Sink::new(
        config.logging.max_lines,
        config.paths.logs.clone(),
        Box::new(ConsoleFrontend::new()),
    );
    sink.append("Application started successfully", LogLevel::Success);
    if let Some(err) = config_error {
        sink.append(
            &format!("Using default configuration: {}", err),
            LogLevel::Warning,
        );
    }
    match &llm {
        Some(_) => sink.append(
            &format!("LLM backend: {}", config.llm.provider),
            LogLevel::Info,
        ),
        None => sink.append(
            "LLM assistant disabled: no usable backend",
            LogLevel::Warning,
        ),
    }

    let ctx = Arc::new(TaskContext { config, llm });
    let mut app = App::new(Coordinator::new(), sink, ctx);
    app.run().await;
}
