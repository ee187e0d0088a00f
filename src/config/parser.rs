use super::AppConfig;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

/// Loads and parses the application configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Path to the YAML configuration file
///
/// # Returns
///
/// * `Result<AppConfig, ConfigError>` - The parsed configuration on success,
///   or an error if reading or parsing fails
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let yaml_str = fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&yaml_str)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Loads the configuration, falling back to the documented defaults when the
/// file is missing or cannot be parsed.
///
/// The error, if any, is returned alongside the defaults so the caller can
/// surface a warning in the activity log once the sink exists.
pub fn load_config_or_default(path: &Path) -> (AppConfig, Option<ConfigError>) {
    match load_config(path) {
        Ok(config) => (config, None),
        Err(err) => {
            warn!("Using default configuration: {}", err);
            (AppConfig::default(), Some(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let (config, err) = load_config_or_default(&dir.path().join("nope.yaml"));
        assert!(err.is_some());
        assert_eq!(config.logging.max_lines, 1000);
        assert_eq!(config.llm.provider, "lm_studio");
    }

    #[test]
    fn invalid_yaml_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "app: [not, a, mapping").unwrap();

        let (config, err) = load_config_or_default(&path);
        assert!(matches!(err, Some(ConfigError::Yaml(_))));
        assert_eq!(config.app.name, "Escriba");
    }

    #[test]
    fn valid_file_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "logging:\n  max_lines: 7\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.logging.max_lines, 7);
    }
}
