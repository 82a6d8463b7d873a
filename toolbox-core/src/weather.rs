use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::WeatherReading;

pub mod wttr;

pub use wttr::WttrProvider;

/// Failure signal for a weather lookup.
///
/// Every failure mode is a value, never a panic: the caller decides how to
/// present "location not found" versus a dead network.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("location must not be empty")]
    EmptyLocation,

    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather service returned status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("malformed weather payload: {0}")]
    Payload(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current conditions for a free-text location (city name,
    /// ZIP code, airport code). Each call is live; nothing is cached.
    async fn current(&self, location: &str) -> Result<WeatherReading, WeatherError>;
}
