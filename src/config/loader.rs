use std::path::Path;

use super::{AppConfig, ConfigError};

/// Load configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_load_missing_config() {
        let result = load_config("/nonexistent/config.yaml");
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let file = write_temp("invalid: yaml: content: [");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_valid() {
        let file = write_temp(
            r#"
server:
  port: 8077
  host: "127.0.0.1"

upstream:
  url: "http://localhost:9999"
  model: "gemini-test"
  timeout_seconds: 15
  api_key_env: "MY_GEMINI_KEY"

logging:
  format: "json"
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.port, 8077);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.upstream.url, "http://localhost:9999");
        assert_eq!(config.upstream.model, "gemini-test");
        assert_eq!(config.upstream.timeout_seconds, 15);
        assert_eq!(config.upstream.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_config_partial_uses_defaults() {
        let file = write_temp(
            r#"
upstream:
  model: "gemini-other"
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upstream.model, "gemini-other");
        assert_eq!(config.upstream.url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.upstream.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_config_from_file() {
        let result = AppConfig::from_file("/nonexistent/path.yaml");
        assert!(result.is_err());
    }
}
