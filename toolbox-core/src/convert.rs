//! Linear unit conversions used across the toolbox.
//!
//! All conversions are exact inverses of each other (within float rounding),
//! so converting back and forth round-trips.

pub const MM_PER_INCH: f64 = 25.4;
pub const MM_PER_FOOT: f64 = 304.8;
/// Cubic yards per cubic meter, as used by the field volume tables.
pub const YD3_PER_M3: f64 = 1.308;

pub fn c_to_f(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn f_to_c(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn mm_to_in(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

pub fn in_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn mm_to_ft(mm: f64) -> f64 {
    mm / MM_PER_FOOT
}

pub fn ft_to_mm(ft: f64) -> f64 {
    ft * MM_PER_FOOT
}

pub fn m3_to_yd3(m3: f64) -> f64 {
    m3 * YD3_PER_M3
}

pub fn yd3_to_m3(yd3: f64) -> f64 {
    yd3 / YD3_PER_M3
}

/// Split a millimeter length into whole feet and remaining inches.
pub fn mm_to_ft_in(mm: f64) -> (f64, f64) {
    let total_in = mm_to_in(mm);
    let ft = (total_in / 12.0).trunc();
    (ft, total_in - ft * 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_ft_round_trip() {
        let mm = 1000.0;
        let back = ft_to_mm(mm_to_ft(mm));
        assert!((back - mm).abs() < 0.1, "got {back}");
    }

    #[test]
    fn volume_round_trip() {
        let m3 = 10.0;
        let back = yd3_to_m3(m3_to_yd3(m3));
        assert!((back - m3).abs() < 1e-9);
        assert!((m3_to_yd3(10.0) - 13.08).abs() < 1e-9);
    }

    #[test]
    fn temperature_round_trip() {
        assert_eq!(c_to_f(0.0), 32.0);
        assert_eq!(c_to_f(100.0), 212.0);
        let c = f_to_c(c_to_f(23.9));
        assert!((c - 23.9).abs() < 1e-9);
    }

    #[test]
    fn feet_and_inches_split() {
        let (ft, inches) = mm_to_ft_in(1000.0);
        assert_eq!(ft, 3.0);
        assert!((inches - 3.370_078).abs() < 1e-3);
    }

    #[test]
    fn known_lengths() {
        assert_eq!(in_to_mm(1.0), 25.4);
        assert_eq!(ft_to_mm(10.0), 3048.0);
        assert!((mm_to_ft(1000.0) - 3.280_839).abs() < 1e-3);
    }
}
