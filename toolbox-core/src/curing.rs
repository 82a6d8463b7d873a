//! Plastic-shrinkage cracking risk for fresh concrete.
//!
//! The evaporation estimate is the ACI 305-style nomograph approximation,
//! evaluated with Fahrenheit temperatures and mph wind as the field procedure
//! does. Two assumptions are carried over from that procedure rather than
//! corrected:
//! - the concrete surface temperature is taken equal to the air temperature
//!   (no separate surface sensor on site), collapsing the two vapor terms;
//! - imperial units go straight into the metric form of the formula, which
//!   scales the absolute rate. The Safe/Caution/Critical thresholds are the
//!   procedure's own and are read against that convention.

use thiserror::Error;

use crate::convert;

#[derive(Debug, Error, PartialEq)]
pub enum CuringError {
    /// The formula produced a non-finite value, e.g. a fractional power of a
    /// negative base at extreme sub-zero temperatures. The source application
    /// masked this as a 0.0 rate; surfacing it keeps the failure visible.
    #[error("evaporation estimate is not a finite number (temp {temp_c} °C, rh {rh_pct} %, wind {wind_mph} mph)")]
    NonFinite { temp_c: f64, rh_pct: f64, wind_mph: f64 },
}

/// Estimated surface moisture loss in lb/ft²/hr.
///
/// Inputs: air temperature in °C, relative humidity in percent (0-100),
/// wind speed in mph. Pure; clamped to a floor of zero.
pub fn evaporation_rate(temp_c: f64, rh_pct: f64, wind_mph: f64) -> Result<f64, CuringError> {
    let temp_f = convert::c_to_f(temp_c);
    // Concrete surface assumed at air temperature, see module docs.
    let concrete_f = temp_f;

    let e = 5.0
        * ((concrete_f + 18.0).powf(2.5) - (rh_pct / 100.0) * (temp_f + 18.0).powf(2.5))
        * (wind_mph + 4.0)
        * 1e-6;

    if e.is_finite() {
        Ok(e.max(0.0))
    } else {
        Err(CuringError::NonFinite { temp_c, rh_pct, wind_mph })
    }
}

/// Cracking risk bands over the evaporation rate.
///
/// Thresholds are the field procedure's fixed policy: strictly above 0.20 is
/// Critical, strictly above 0.10 is Caution, everything else is Safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackingRisk {
    Safe,
    Caution,
    Critical,
}

impl CrackingRisk {
    pub fn classify(rate: f64) -> Self {
        if rate > 0.2 {
            CrackingRisk::Critical
        } else if rate > 0.1 {
            CrackingRisk::Caution
        } else {
            CrackingRisk::Safe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CrackingRisk::Safe => "Safe",
            CrackingRisk::Caution => "Caution",
            CrackingRisk::Critical => "Critical",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            CrackingRisk::Safe => "Low cracking risk.",
            CrackingRisk::Caution => "Over 0.1. Monitor closely.",
            CrackingRisk::Critical => "Over 0.2! High cracking risk. Windbreaks/fogging required.",
        }
    }
}

impl std::fmt::Display for CrackingRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Placement temperature bands, independent of the evaporation estimate.
///
/// Exactly 40 °F and exactly 90 °F are both Good: the cold check is `< 40`
/// and the hot check is `> 90`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Cold,
    Good,
    Hot,
}

impl TemperatureBand {
    pub fn classify_f(temp_f: f64) -> Self {
        if temp_f < 40.0 {
            TemperatureBand::Cold
        } else if temp_f > 90.0 {
            TemperatureBand::Hot
        } else {
            TemperatureBand::Good
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "Cold Weather",
            TemperatureBand::Good => "Good",
            TemperatureBand::Hot => "Hot Weather",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "Below 40°F! Thermal protection required.",
            TemperatureBand::Good => "Within ACI standard range (40°F ~ 90°F).",
            TemperatureBand::Hot => "Above 90°F! Cooling measures required.",
        }
    }
}

impl std::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
