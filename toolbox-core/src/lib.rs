//! Core library for the `toolbox` CLI.
//!
//! This crate defines:
//! - Configuration handling (default location, FX ticker, fallback rate)
//! - Weather lookup against wttr.in with a typed failure signal
//! - The ACI-style plastic-shrinkage evaporation estimator and its
//!   risk/temperature classifications
//! - Exchange-rate retrieval with a process-local TTL cache
//! - Field utilities: unit conversions, slope/tray/crane calculators,
//!   reference tables, report templates, and a site/home clock
//!
//! It is used by `toolbox-cli`, but can also be reused by other binaries or services.

pub mod clock;
pub mod config;
pub mod convert;
pub mod curing;
pub mod engineering;
pub mod fx;
pub mod lookup;
pub mod model;
pub mod report;
pub mod weather;

pub use config::Config;
pub use curing::{CrackingRisk, CuringError, TemperatureBand};
pub use fx::{CachedRates, FxError, RateSource};
pub use model::{CuringInputs, WeatherReading};
pub use weather::{WeatherError, WeatherProvider};
