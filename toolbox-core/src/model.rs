use serde::{Deserialize, Serialize};

use crate::convert;

/// A single observation from the weather service.
///
/// Ephemeral: produced by a lookup, displayed, and fed to the curing
/// estimator. Nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_f: f64,
    /// Relative humidity, 0-100.
    pub humidity_pct: f64,
    pub wind_mph: f64,
}

impl WeatherReading {
    pub fn temperature_c(&self) -> f64 {
        convert::f_to_c(self.temperature_f)
    }
}

/// Last-seen inputs for the curing analysis.
///
/// The source application kept these in ambient session globals; here they
/// are an explicit value the caller owns and passes around. Defaults match
/// the documented example values (75 °F, 50 %, 5 mph).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuringInputs {
    pub temperature_f: f64,
    pub humidity_pct: f64,
    pub wind_mph: f64,
}

impl Default for CuringInputs {
    fn default() -> Self {
        Self { temperature_f: 75.0, humidity_pct: 50.0, wind_mph: 5.0 }
    }
}

impl CuringInputs {
    /// Pre-populate from a fresh weather lookup.
    pub fn apply(&mut self, reading: &WeatherReading) {
        self.temperature_f = reading.temperature_f;
        self.humidity_pct = reading.humidity_pct;
        self.wind_mph = reading.wind_mph;
    }

    pub fn temperature_c(&self) -> f64 {
        convert::f_to_c(self.temperature_f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_example() {
        let inputs = CuringInputs::default();
        assert_eq!(inputs.temperature_f, 75.0);
        assert_eq!(inputs.humidity_pct, 50.0);
        assert_eq!(inputs.wind_mph, 5.0);
    }

    #[test]
    fn apply_overwrites_all_fields() {
        let mut inputs = CuringInputs::default();
        let reading = WeatherReading { temperature_f: 91.5, humidity_pct: 30.0, wind_mph: 12.0 };

        inputs.apply(&reading);

        assert_eq!(inputs.temperature_f, 91.5);
        assert_eq!(inputs.humidity_pct, 30.0);
        assert_eq!(inputs.wind_mph, 12.0);
    }

    #[test]
    fn reading_converts_to_celsius() {
        let reading = WeatherReading { temperature_f: 75.0, humidity_pct: 50.0, wind_mph: 5.0 };
        let c = reading.temperature_c();
        assert!((c - 23.888_888).abs() < 1e-3);
    }
}
