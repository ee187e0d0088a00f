use clap::Parser;

/// Command line interface for the application
#[derive(Parser)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value_t = String::from("config.yaml"))]
    pub config: String,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Overrides the level from the configuration file
    #[arg(long)]
    pub logging_level: Option<String>,

    /// Disables the rotating log file; diagnostics go to stdout only
    #[arg(long)]
    pub no_log_file: bool,
}
