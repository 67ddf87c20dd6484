use crate::core::doghouse::DogHouse;
use crate::core::endpoints::Endpoints;
use crate::core::{Answer, ConfigProvider, Transport};
use crate::utils::error::{DogHouseError, Result};
use crate::utils::monitor::SystemMonitor;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub answer: Answer,
    pub response: Value,
    pub breeds_loaded: usize,
    pub dogs_loaded: usize,
    pub finished_at: DateTime<Utc>,
}

/// Runs one fetch → compute → submit cycle.
pub struct DogHouseEngine<T: Transport, C: ConfigProvider> {
    transport: T,
    config: C,
    monitor: SystemMonitor,
}

impl<T: Transport, C: ConfigProvider> DogHouseEngine<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self::new_with_monitoring(transport, config, false)
    }

    pub fn new_with_monitoring(transport: T, config: C, monitor_enabled: bool) -> Self {
        Self {
            transport,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&mut self) -> Result<RunReport> {
        let token = self
            .config
            .token()
            .ok_or_else(|| DogHouseError::MissingConfigError {
                field: "token".to_string(),
            })?;
        let endpoints = Endpoints::new(self.config.base_url());

        tracing::info!("Starting doghouse run against {}", endpoints.base_url());
        self.monitor.log_stats("Start");

        // Fetch
        let mut house = DogHouse::new();
        house.get_data(&self.transport, &endpoints, token).await?;
        self.monitor.log_stats("Fetch");

        // Compute
        let answer = house.answer()?;
        tracing::info!(
            "Totals: {} breeds, {} dogs; most common breed '{}', most common name '{}'",
            answer.total_breeds,
            answer.total_dogs,
            answer.common_breed,
            answer.common_dog_name
        );

        // Submit
        let response = house.send_data(&self.transport, &endpoints, token).await?;
        self.monitor.log_stats("Submit");
        self.monitor.log_final_stats();

        Ok(RunReport {
            breeds_loaded: house.total_breeds(),
            dogs_loaded: house.total_dogs(),
            answer,
            response,
            finished_at: Utc::now(),
        })
    }
}
