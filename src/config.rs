//! Daytrip configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main daytrip configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// Web-search provider configuration
    pub search: SearchConfig,

    /// Default log level (overridden by --log-level)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks that required environment variables are set. Call this early
    /// in startup to fail fast with clear error messages.
    pub fn validate(&self) -> Result<()> {
        if std::env::var(&self.llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "LLM API key not found. Set the {} environment variable.",
                self.llm.api_key_env
            ));
        }
        if std::env::var(&self.search.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "Search API key not found. Set the {} environment variable.",
                self.search.api_key_env
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .daytrip.yml
        let local_config = PathBuf::from(".daytrip.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/daytrip/daytrip.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("daytrip").join("daytrip.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load just the log level from the config file (before full config load)
    ///
    /// Used to initialize logging before the full config is parsed, so config
    /// errors themselves get logged.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load(config_path).ok().and_then(|c| c.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// LLM provider configuration
///
/// The default targets Groq's OpenAI-compatible endpoint with the same model
/// the briefing prompt was tuned against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "openai" wire format supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env)
            .context(format!("environment variable {} is not set", self.api_key_env))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "llama3-70b-8192".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            base_url: "https://api.groq.com/openai".to_string(),
            max_tokens: 2048,
            temperature: 0.0,
            timeout_ms: 120_000,
        }
    }
}

/// Web-search provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Provider name (currently only "tavily" supported)
    pub provider: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum results per query
    #[serde(rename = "max-results")]
    pub max_results: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl SearchConfig {
    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env)
            .context(format!("environment variable {} is not set", self.api_key_env))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: "tavily".to_string(),
            api_key_env: "TAVILY_API_KEY".to_string(),
            base_url: "https://api.tavily.com".to_string(),
            max_results: 5,
            timeout_ms: 30_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model, "llama3-70b-8192");
        assert_eq!(config.search.provider, "tavily");
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();

        assert_eq!(config.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.base_url, "https://api.groq.com/openai");
        assert_eq!(config.temperature, 0.0);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
llm:
  provider: openai
  model: llama-3.3-70b-versatile
  api-key-env: MY_LLM_KEY
  base-url: https://api.example.com
  max-tokens: 1024
  timeout-ms: 60000

search:
  provider: tavily
  api-key-env: MY_SEARCH_KEY
  max-results: 3

log-level: DEBUG
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(config.llm.api_key_env, "MY_LLM_KEY");
        assert_eq!(config.llm.max_tokens, 1024);
        assert_eq!(config.search.api_key_env, "MY_SEARCH_KEY");
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.log_level.as_deref(), Some("DEBUG"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
llm:
  model: mixtral-8x7b-32768
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.llm.model, "mixtral-8x7b-32768");

        // Defaults for unspecified
        assert_eq!(config.llm.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.search.base_url, "https://api.tavily.com");
        assert_eq!(config.search.max_results, 5);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daytrip.yml");
        std::fs::write(&path, "search:\n  max-results: 7\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.search.max_results, 7);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = PathBuf::from("/nonexistent/daytrip.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    #[serial]
    fn test_get_api_key_from_env() {
        unsafe { std::env::set_var("DAYTRIP_TEST_KEY", "secret") };
        let config = LlmConfig {
            api_key_env: "DAYTRIP_TEST_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.get_api_key().unwrap(), "secret");
        unsafe { std::env::remove_var("DAYTRIP_TEST_KEY") };
    }

    #[test]
    #[serial]
    fn test_get_api_key_missing_env() {
        unsafe { std::env::remove_var("DAYTRIP_ABSENT_KEY") };
        let config = SearchConfig {
            api_key_env: "DAYTRIP_ABSENT_KEY".to_string(),
            ..Default::default()
        };
        assert!(config.get_api_key().is_err());
    }
}
