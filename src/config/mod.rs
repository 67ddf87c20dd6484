pub mod toml_config;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("doghouse/", env!("CARGO_PKG_VERSION"));

#[cfg(feature = "cli")]
mod cli {
    use super::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_api_settings, Validate};
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "doghouse")]
    #[command(about = "Aggregates breeds and dogs from the API and submits the summary")]
    pub struct CliConfig {
        #[arg(long, env = "DOGHOUSE_BASE_URL", default_value = "http://localhost:8000")]
        pub base_url: String,

        #[arg(long, env = "DOGHOUSE_TOKEN", hide_env_values = true)]
        pub token: Option<String>,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        #[arg(long, default_value = DEFAULT_USER_AGENT)]
        pub user_agent: String,

        #[arg(long, help = "Load API settings from a TOML file")]
        pub config: Option<PathBuf>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log process CPU and memory after each phase")]
        pub monitor: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_api_settings(&self.base_url, self.token.as_deref(), self.timeout_seconds)
        }
    }

    impl ConfigProvider for CliConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn token(&self) -> Option<&str> {
            self.token.as_deref()
        }

        fn timeout_seconds(&self) -> u64 {
            self.timeout_seconds
        }

        fn user_agent(&self) -> &str {
            &self.user_agent
        }
    }

}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
