//! Small closed-form field calculators: pipe slope, cable tray fill,
//! crane load moment.

use std::f64::consts::PI;

/// Standard drainage slopes, in inches of drop per foot of run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slope {
    EighthInch,
    QuarterInch,
    HalfInch,
    OneInch,
}

impl Slope {
    pub fn inches_per_foot(&self) -> f64 {
        match self {
            Slope::EighthInch => 0.125,
            Slope::QuarterInch => 0.25,
            Slope::HalfInch => 0.5,
            Slope::OneInch => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Slope::EighthInch => "1/8\"",
            Slope::QuarterInch => "1/4\"",
            Slope::HalfInch => "1/2\"",
            Slope::OneInch => "1\"",
        }
    }
}

impl std::str::FromStr for Slope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('"') {
            "1/8" => Ok(Slope::EighthInch),
            "1/4" => Ok(Slope::QuarterInch),
            "1/2" => Ok(Slope::HalfInch),
            "1" => Ok(Slope::OneInch),
            other => Err(format!("unknown slope '{other}', expected 1/8, 1/4, 1/2 or 1")),
        }
    }
}

/// Total drop in inches over a run at the given slope.
pub fn slope_drop_in(length_ft: f64, slope: Slope) -> f64 {
    length_ft * slope.inches_per_foot()
}

/// NEC-style fill limit for cable tray cross-section.
pub const TRAY_FILL_LIMIT_PCT: f64 = 40.0;

/// Percentage of tray cross-section occupied by `count` cables of the given
/// outside diameter. Dimensions in inches.
pub fn tray_fill_pct(width_in: f64, depth_in: f64, cable_od_in: f64, count: u32) -> f64 {
    let tray_area = width_in * depth_in;
    let cable_area = PI * (cable_od_in / 2.0).powi(2) * f64::from(count);
    cable_area / tray_area * 100.0
}

pub fn tray_fill_passes(fill_pct: f64) -> bool {
    fill_pct <= TRAY_FILL_LIMIT_PCT
}

/// Load moment in lbs-ft for a pick at the given radius.
pub fn load_moment(weight_lbs: f64, radius_ft: f64) -> f64 {
    weight_lbs * radius_ft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_inch_drop_over_fifty_feet() {
        let drop = slope_drop_in(50.0, Slope::QuarterInch);
        assert_eq!(drop, 12.5);
    }

    #[test]
    fn slope_parses_with_or_without_quote() {
        assert_eq!("1/4".parse::<Slope>().unwrap(), Slope::QuarterInch);
        assert_eq!("1/2\"".parse::<Slope>().unwrap(), Slope::HalfInch);
        assert!("3/4".parse::<Slope>().is_err());
    }

    #[test]
    fn tray_fill_example() {
        // 24x4 tray, twenty 1" cables: 20 * π/4 ≈ 15.7 in² over 96 in².
        let fill = tray_fill_pct(24.0, 4.0, 1.0, 20);
        assert!((fill - 16.362).abs() < 0.01, "got {fill}");
        assert!(tray_fill_passes(fill));
    }

    #[test]
    fn overfilled_tray_fails() {
        let fill = tray_fill_pct(12.0, 4.0, 1.0, 40);
        assert!(fill > TRAY_FILL_LIMIT_PCT);
        assert!(!tray_fill_passes(fill));
    }

    #[test]
    fn load_moment_is_weight_times_radius() {
        assert_eq!(load_moment(5000.0, 50.0), 250_000.0);
    }
}
