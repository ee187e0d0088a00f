mod parser;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use parser::{load_config, load_config_or_default};

/// Top-level application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Application identity shown by the interactive frontend
    #[serde(default)]
    pub app: AppInfo,
    /// Output and working directories
    #[serde(default)]
    pub paths: PathsConfig,
    /// LLM backend selection and per-provider settings
    #[serde(default)]
    pub llm: LlmConfig,
    /// Diagnostic logging and activity-log settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Which tools the interactive menu offers
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Application identity
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppInfo {
    /// Display name used by the interactive frontend
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Version string shown next to the name
    #[serde(default = "default_app_version")]
    pub version: String,
}

/// Directories the application writes into
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PathsConfig {
    /// Directory where generated documents are written
    #[serde(default = "default_documents_dir")]
    pub documents_output: PathBuf,
    /// Directory where generated presentation outlines are written
    #[serde(default = "default_presentations_dir")]
    pub presentations_output: PathBuf,
    /// Directory for saved log snapshots and the diagnostic log file
    #[serde(default = "default_logs_dir")]
    pub logs: PathBuf,
    /// Scratch directory for intermediate files
    #[serde(default = "default_temp_dir")]
    pub temp: PathBuf,
}

impl PathsConfig {
    /// All configured directories, for startup creation
    pub fn all(&self) -> [&Path; 4] {
        [
            &self.documents_output,
            &self.presentations_output,
            &self.logs,
            &self.temp,
        ]
    }
}

/// LLM backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmConfig {
    /// Which backend answers LLM requests ("openai" or "lm_studio")
    #[serde(default = "default_llm_provider")]
    pub provider: String,
    /// Settings for the OpenAI backend
    #[serde(default)]
    pub openai: OpenAiConfig,
    /// Settings for the local LM Studio backend
    #[serde(default)]
    pub lm_studio: LmStudioConfig,
}

/// Settings for the OpenAI backend
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OpenAiConfig {
    /// API key; when absent the OPENAI_API_KEY environment variable is used
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model identifier to request
    #[serde(default = "default_openai_model")]
    pub model: String,
}

/// Settings for the local LM Studio backend
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LmStudioConfig {
    /// Base URL of the local OpenAI-compatible server
    #[serde(default = "default_lm_studio_url")]
    pub base_url: String,
    /// Model identifier passed through to the server
    #[serde(default = "default_lm_studio_model")]
    pub model: String,
}

/// Diagnostic logging and activity-log settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Verbosity of the diagnostic tracing output
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Maximum number of entries kept in the activity log buffer
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

/// Interactive menu enablement per tool; everything is on by default
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolsConfig {
    /// Document generation
    #[serde(default = "default_true")]
    pub documents: bool,
    /// Presentation outline generation
    #[serde(default = "default_true")]
    pub presentations: bool,
    /// Web page extraction
    #[serde(default = "default_true")]
    pub scraper: bool,
    /// Text assistant (LLM-backed operations)
    #[serde(default = "default_true")]
    pub assistant: bool,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            documents_output: default_documents_dir(),
            presentations_output: default_presentations_dir(),
            logs: default_logs_dir(),
            temp: default_temp_dir(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            openai: OpenAiConfig::default(),
            lm_studio: LmStudioConfig::default(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_openai_model(),
        }
    }
}

impl Default for LmStudioConfig {
    fn default() -> Self {
        Self {
            base_url: default_lm_studio_url(),
            model: default_lm_studio_model(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_lines: default_max_lines(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            documents: true,
            presentations: true,
            scraper: true,
            assistant: true,
        }
    }
}

fn default_app_name() -> String {
    "Escriba".to_string()
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_documents_dir() -> PathBuf {
    PathBuf::from("./documents")
}

fn default_presentations_dir() -> PathBuf {
    PathBuf::from("./presentations")
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_temp_dir() -> PathBuf {
    PathBuf::from("./temp")
}

fn default_llm_provider() -> String {
    "lm_studio".to_string()
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_lm_studio_url() -> String {
    "http://localhost:1234/v1".to_string()
}

fn default_lm_studio_model() -> String {
    "local-model".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_lines() -> usize {
    1000
}

fn default_true() -> bool {
    true
}
