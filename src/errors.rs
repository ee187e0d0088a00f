use thiserror::Error;

/// Errors produced by a task while it runs.
///
/// These are converted into a `Failed` outcome at the worker boundary and
/// never propagate further up; the interactive layer only ever sees the
/// short message plus the rendered diagnostic detail.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("scrape failed: {0}")]
    Scrape(String),
}

impl TaskError {
    /// Renders the full diagnostic text for the result surface: the error
    /// itself followed by its source chain, one frame per line.
    pub fn detail(&self) -> String {
        let mut lines = vec![self.to_string()];
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            lines.push(format!("caused by: {}", err));
            source = err.source();
        }
        lines.join("\n")
    }
}

/// Errors raised while loading the YAML configuration.
///
/// Callers fall back to the documented defaults and log a warning instead of
/// aborting startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
