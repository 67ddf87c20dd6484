use crate::config::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::utils::error::{DogHouseError, Result};
use crate::utils::validation::{validate_api_settings, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const PLACEHOLDER_PATTERN: &str = r"\$\{([^}]+)\}";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DogHouseError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DogHouseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOGHOUSE_TOKEN})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = placeholder_regex()?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// A token given on the command line or via `DOGHOUSE_TOKEN` wins over the file.
    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token {
            self.api.token = Some(token);
        }
        self
    }

    /// Logging flags from the file, OR-ed with the ones from the command line.
    pub fn logging_flags(&self, verbose: bool, json: bool) -> (bool, bool) {
        let logging = self.logging.clone().unwrap_or_default();
        (
            verbose || logging.verbose.unwrap_or(false),
            json || logging.json.unwrap_or(false),
        )
    }
}

fn placeholder_regex() -> Result<Regex> {
    Regex::new(PLACEHOLDER_PATTERN).map_err(|e| DogHouseError::ConfigError {
        message: format!("invalid placeholder pattern: {}", e),
    })
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(token) = &self.api.token {
            if let Some(caps) = placeholder_regex()?.captures(token) {
                return Err(DogHouseError::InvalidConfigValueError {
                    field: "api.token".to_string(),
                    value: token.clone(),
                    reason: format!("environment variable {} is not set", &caps[1]),
                });
            }
        }

        validate_api_settings(self.base_url(), self.token(), self.timeout_seconds())
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.api.base_url
    }

    fn token(&self) -> Option<&str> {
        self.api.token.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn user_agent(&self) -> &str {
        self.api.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
