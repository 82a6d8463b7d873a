//! Static site-reference tables: rebar sizes, bolt/wrench compatibility,
//! radio shorthand and construction acronyms.

/// A rebar designation in both US and KR conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RebarSize {
    pub us: &'static str,
    pub kr: &'static str,
    pub diameter_mm: f64,
}

pub const REBAR_SIZES: &[RebarSize] = &[
    RebarSize { us: "#4", kr: "D13", diameter_mm: 12.7 },
    RebarSize { us: "#5", kr: "D16", diameter_mm: 15.9 },
    RebarSize { us: "#6", kr: "D19", diameter_mm: 19.1 },
];

/// Look up a rebar size by either its US ("#5") or KR ("D16") designation.
pub fn rebar(designation: &str) -> Option<&'static RebarSize> {
    let wanted = designation.trim().to_uppercase();
    REBAR_SIZES.iter().find(|r| r.us == wanted || r.kr == wanted)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoltSeries {
    Imperial,
    Metric,
}

/// Classify a bolt size string: "1/2 inch" style is imperial, "M12" style
/// is metric.
pub fn bolt_series(size: &str) -> Option<BoltSeries> {
    let s = size.trim().to_lowercase();
    if s.is_empty() {
        None
    } else if s.contains("inch") || s.contains('"') {
        Some(BoltSeries::Imperial)
    } else if s.starts_with('m') && s[1..].chars().all(|c| c.is_ascii_digit()) && s.len() > 1 {
        Some(BoltSeries::Metric)
    } else {
        None
    }
}

/// Wrench guidance for a bolt series. Imperial bolts must not take metric
/// tools (loose fit, rounded heads); metric bolts tolerate inch tools with
/// a fit check.
pub fn wrench_guidance(series: BoltSeries) -> &'static str {
    match series {
        BoltSeries::Imperial => "Do NOT use mm tools (loose fit)",
        BoltSeries::Metric => "Inch tools compatible (check fit)",
    }
}

pub const RADIO_TERMS: &[(&str, &str)] = &[
    ("10-4", "Received / OK"),
    ("Copy that", "Understood"),
    ("What's your 20?", "Current Location?"),
    ("Go ahead", "Ready to listen"),
    ("Stand by", "Wait"),
];

pub const ACRONYMS: &[(&str, &str)] = &[
    ("RFI", "Request for Information"),
    ("CO", "Change Order"),
    ("NTP", "Notice to Proceed"),
    ("TBM", "Toolbox Meeting"),
];

pub fn radio_term(term: &str) -> Option<&'static str> {
    let wanted = term.trim().to_lowercase();
    RADIO_TERMS
        .iter()
        .find(|(t, _)| t.to_lowercase() == wanted)
        .map(|(_, meaning)| *meaning)
}

pub fn acronym(abbr: &str) -> Option<&'static str> {
    let wanted = abbr.trim().to_uppercase();
    ACRONYMS.iter().find(|(a, _)| *a == wanted).map(|(_, full)| *full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebar_lookup_by_either_designation() {
        let by_us = rebar("#5").unwrap();
        let by_kr = rebar("d16").unwrap();
        assert_eq!(by_us, by_kr);
        assert_eq!(by_us.diameter_mm, 15.9);
        assert!(rebar("#9").is_none());
    }

    #[test]
    fn bolt_series_classification() {
        assert_eq!(bolt_series("1/2 inch"), Some(BoltSeries::Imperial));
        assert_eq!(bolt_series("3/4 inch"), Some(BoltSeries::Imperial));
        assert_eq!(bolt_series("M12"), Some(BoltSeries::Metric));
        assert_eq!(bolt_series("m20"), Some(BoltSeries::Metric));
        assert_eq!(bolt_series(""), None);
        assert_eq!(bolt_series("metric"), None);
    }

    #[test]
    fn imperial_bolts_reject_metric_tools() {
        assert!(wrench_guidance(BoltSeries::Imperial).contains("NOT"));
        assert!(wrench_guidance(BoltSeries::Metric).contains("compatible"));
    }

    #[test]
    fn term_lookups_are_case_insensitive() {
        assert_eq!(acronym("rfi"), Some("Request for Information"));
        assert_eq!(radio_term("COPY THAT"), Some("Understood"));
        assert_eq!(acronym("ASAP"), None);
        assert_eq!(radio_term("over and out"), None);
    }
}
