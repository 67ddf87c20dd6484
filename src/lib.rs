pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::http::HttpTransport;
pub use crate::core::{
    doghouse::DogHouse,
    endpoints::Endpoints,
    engine::{DogHouseEngine, RunReport},
};
pub use domain::model::{Answer, Breed, Dog};
pub use domain::ports::{ConfigProvider, Transport};
pub use utils::error::{DogHouseError, Result};
