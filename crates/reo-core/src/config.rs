use crate::error::ConfigError;
use crate::types::{SpeechOptions, TtsOptions};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub speech: SpeechConfig,

    #[serde(default)]
    pub phrase: Vec<PhraseConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SpeechConfig {
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default)]
    pub recognition: SpeechOptions,

    #[serde(default)]
    pub synthesis: TtsOptions,

    /// Provider-specific settings, passed through to the provider as-is.
    #[serde(default)]
    pub scripted: Option<toml::Value>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            recognition: SpeechOptions::default(),
            synthesis: TtsOptions::default(),
            scripted: None,
        }
    }
}

/// One phrase to practice: the target text and an optional language tag
/// overriding `[speech.recognition].language`.
#[derive(Debug, Deserialize, Clone)]
pub struct PhraseConfig {
    pub target: String,

    #[serde(default)]
    pub language: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_provider() -> String {
    "scripted".to_string()
}

/// Interpolate `${VAR}` patterns with environment variable values.
fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();
    let mut result = input.to_string();
    let mut errors = Vec::new();

    for cap in re.captures_iter(input) {
        let var_name = &cap[1];
        match std::env::var(var_name) {
            Ok(val) => {
                result = result.replace(&cap[0], &val);
            }
            Err(_) => {
                errors.push(var_name.to_string());
            }
        }
    }

    if let Some(first_missing) = errors.into_iter().next() {
        return Err(ConfigError::EnvVarNotFound(first_missing));
    }

    Ok(result)
}

impl AppConfig {
    /// Load configuration from a TOML file, with environment variable interpolation.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded config from {path:?}");
        Ok(config)
    }

    /// Parse configuration from a TOML string (for testing).
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let interpolated = interpolate_env_vars(s)?;
        let config: AppConfig = toml::from_str(&interpolated)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_valid_toml() {
        let toml_str = r#"
[general]
log_level = "debug"

[speech]
provider = "scripted"

[speech.recognition]
language = "ty"
continuous = false
interim_results = true
max_alternatives = 3

[speech.synthesis]
rate = 0.8
pitch = 1.1
lang = "ty"

[[phrase]]
target = "Ia ora na"

[[phrase]]
target = "Mauruuru"
language = "ty"
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.speech.provider, "scripted");
        assert_eq!(config.speech.recognition.language, "ty");
        assert!(config.speech.recognition.interim_results);
        assert_eq!(config.speech.recognition.max_alternatives, 3);
        assert_eq!(config.speech.synthesis.rate, 0.8);
        assert_eq!(config.speech.synthesis.pitch, 1.1);
        assert_eq!(config.phrase.len(), 2);
        assert_eq!(config.phrase[0].target, "Ia ora na");
        assert!(config.phrase[0].language.is_none());
        assert_eq!(config.phrase[1].language.as_deref(), Some("ty"));
    }

    #[test]
    fn test_config_default_values() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.speech.provider, "scripted");
        assert_eq!(config.speech.recognition.language, "en-US");
        assert!(!config.speech.recognition.continuous);
        assert!(!config.speech.recognition.interim_results);
        assert_eq!(config.speech.recognition.max_alternatives, 1);
        assert_eq!(config.speech.synthesis.rate, 1.0);
        assert_eq!(config.speech.synthesis.volume, 1.0);
        assert!(config.speech.synthesis.voice.is_none());
        assert!(config.phrase.is_empty());
        assert!(config.speech.scripted.is_none());
    }

    #[test]
    fn test_config_scripted_section_passthrough() {
        let toml_str = r#"
[speech.scripted]
transcripts = ["ia ora na", "mauruuru"]
delay_ms = 50
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        let scripted = config.speech.scripted.unwrap();
        assert_eq!(
            scripted.get("delay_ms").unwrap().as_integer(),
            Some(50)
        );
        assert_eq!(
            scripted.get("transcripts").unwrap().as_array().unwrap().len(),
            2
        );
    }

    #[test]
    fn test_config_env_var_interpolation() {
        std::env::set_var("REO_TEST_LANG", "ty-PF");
        let toml_str = r#"
[speech.recognition]
language = "${REO_TEST_LANG}"
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.speech.recognition.language, "ty-PF");
        std::env::remove_var("REO_TEST_LANG");
    }

    #[test]
    fn test_config_missing_env_var_error() {
        let toml_str = r#"
[general]
log_level = "${DEFINITELY_DOES_NOT_EXIST_12345}"
"#;
        let result = AppConfig::from_toml_str(toml_str);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("DEFINITELY_DOES_NOT_EXIST_12345"));
    }

    #[test]
    fn test_config_invalid_toml_error() {
        let result = AppConfig::from_toml_str("this is not valid toml [[[");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = std::env::temp_dir().join("reo_test_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.toml");
        std::fs::write(
            &path,
            r#"
[general]
log_level = "warn"

[[phrase]]
target = "Nana"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.phrase[0].target, "Nana");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_config_load_from_file_not_found() {
        let result = AppConfig::load_from_file(Path::new("/nonexistent/path.toml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("failed to read config file"));
    }
}
