use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::model::WeatherReading;

use super::{WeatherError, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://wttr.in";

/// One bounded attempt per lookup; no retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Provider backed by the wttr.in JSON endpoint (`?format=j1`).
///
/// Keyless and free-text: the location goes straight into the URL path, so
/// "Atlanta", "30303" and "JFK" all work.
#[derive(Debug, Clone)]
pub struct WttrProvider {
    base_url: String,
    http: Client,
}

impl Default for WttrProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

impl WttrProvider {
    pub fn new(base_url: String) -> Self {
        Self { base_url, http: Client::new() }
    }

    async fn fetch(&self, location: &str) -> Result<WeatherReading, WeatherError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), location.trim());

        let res = self
            .http
            .get(url)
            .query(&[("format", "j1")])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status { status, body: truncate_body(&body) });
        }

        parse_current(&body)
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    async fn current(&self, location: &str) -> Result<WeatherReading, WeatherError> {
        if location.trim().is_empty() {
            return Err(WeatherError::EmptyLocation);
        }
        self.fetch(location).await
    }
}

// wttr.in serializes every numeric field as a JSON string.

#[derive(Debug, Deserialize)]
struct WttrCurrentCondition {
    #[serde(rename = "temp_F")]
    temp_f: String,
    humidity: String,
    #[serde(rename = "windspeedMiles")]
    windspeed_miles: String,
}

#[derive(Debug, Deserialize)]
struct WttrResponse {
    current_condition: Vec<WttrCurrentCondition>,
}

fn parse_current(body: &str) -> Result<WeatherReading, WeatherError> {
    let parsed: WttrResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::Payload(format!("invalid JSON: {e}")))?;

    let current = parsed
        .current_condition
        .first()
        .ok_or_else(|| WeatherError::Payload("no current_condition entries".to_string()))?;

    Ok(WeatherReading {
        temperature_f: parse_field("temp_F", &current.temp_f)?,
        humidity_pct: parse_field("humidity", &current.humidity)?,
        wind_mph: parse_field("windspeedMiles", &current.windspeed_miles)?,
    })
}

fn parse_field(name: &str, raw: &str) -> Result<f64, WeatherError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| WeatherError::Payload(format!("field {name} is not numeric: {raw:?}")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Error pages can be localized; back off to a char boundary.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "current_condition": [{
            "temp_F": "66",
            "temp_C": "19",
            "humidity": "73",
            "windspeedMiles": "8",
            "weatherDesc": [{"value": "Partly cloudy"}]
        }],
        "nearest_area": [{"areaName": [{"value": "Atlanta"}]}]
    }"#;

    #[test]
    fn parses_current_condition_fields() {
        let reading = parse_current(SAMPLE).unwrap();
        assert_eq!(reading.temperature_f, 66.0);
        assert_eq!(reading.humidity_pct, 73.0);
        assert_eq!(reading.wind_mph, 8.0);
    }

    #[test]
    fn missing_current_condition_is_payload_error() {
        let err = parse_current(r#"{"current_condition": []}"#).unwrap_err();
        assert!(matches!(err, WeatherError::Payload(_)));
    }

    #[test]
    fn non_numeric_field_is_payload_error() {
        let body = r#"{"current_condition": [{
            "temp_F": "warm", "humidity": "73", "windspeedMiles": "8"
        }]}"#;
        let err = parse_current(body).unwrap_err();
        assert!(err.to_string().contains("temp_F"));
    }

    #[test]
    fn html_error_page_is_payload_error() {
        let err = parse_current("<html>Unknown location</html>").unwrap_err();
        assert!(matches!(err, WeatherError::Payload(_)));
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        // 199 ASCII bytes, then Hangul: byte 200 lands inside '한'.
        let body = format!("{}한국어 오류 페이지", "y".repeat(199));
        let cut = truncate_body(&body);
        assert!(cut.ends_with("..."));
        assert!(cut.len() <= 203);
    }

    #[tokio::test]
    async fn empty_location_fails_without_request() {
        let provider = WttrProvider::default();
        let err = provider.current("   ").await.unwrap_err();
        assert!(matches!(err, WeatherError::EmptyLocation));
    }
}
