use thiserror::Error;

#[derive(Error, Debug)]
pub enum DogHouseError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unexpected response from {url}: {message}")]
    UnexpectedResponse { url: String, message: String },

    #[error("Pagination cursor repeated: {url}")]
    PaginationCycle { url: String },

    #[error("No breed data available")]
    NoBreedData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DogHouseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DogHouseError::ApiError(_) => ErrorCategory::Network,
            DogHouseError::ConfigError { .. }
            | DogHouseError::ConfigValidationError { .. }
            | DogHouseError::MissingConfigError { .. }
            | DogHouseError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DogHouseError::SerializationError(_)
            | DogHouseError::UnexpectedResponse { .. }
            | DogHouseError::PaginationCycle { .. }
            | DogHouseError::NoBreedData => ErrorCategory::Data,
            DogHouseError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤通常可以直接重跑
            DogHouseError::ApiError(_) => ErrorSeverity::Medium,
            DogHouseError::NoBreedData => ErrorSeverity::Medium,
            DogHouseError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DogHouseError::ApiError(e) if e.is_timeout() => {
                "Increase --timeout-seconds or check the API latency"
            }
            DogHouseError::ApiError(e) if e.status().map(|s| s.as_u16()) == Some(401) => {
                "Check that the bearer token is valid (--token or DOGHOUSE_TOKEN)"
            }
            DogHouseError::ApiError(_) => "Check network connectivity and the API base URL",
            DogHouseError::IoError(_) => "Check file permissions and available disk space",
            DogHouseError::SerializationError(_) | DogHouseError::UnexpectedResponse { .. } => {
                "Verify that the base URL points at the breeds/dogs API"
            }
            DogHouseError::PaginationCycle { .. } => {
                "The API returned a page cursor it already served; report it to the API owner"
            }
            DogHouseError::NoBreedData => "The API returned no breeds; nothing can be submitted",
            DogHouseError::MissingConfigError { .. } => {
                "Provide the missing value via command line flag, environment variable or config file"
            }
            DogHouseError::ConfigError { .. }
            | DogHouseError::ConfigValidationError { .. }
            | DogHouseError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DogHouseError::ApiError(e) => match e.status() {
                Some(status) => format!("The API answered with HTTP {}", status),
                None => "Could not reach the API".to_string(),
            },
            DogHouseError::NoBreedData => {
                "No breeds were loaded, so there is no most common breed to report".to_string()
            }
            DogHouseError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DogHouseError>;
