//! Exchange-rate retrieval with a process-local TTL cache.
//!
//! The market-data provider is asked for roughly one month of daily history
//! and only the latest close is used. A successful value is held for the
//! cache TTL (one hour by default); on expiry the next call re-fetches.
//! There is no retry: a failed fetch surfaces as an [`FxError`] and the
//! caller substitutes its configured fallback rate.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Fallback used by callers when no live rate is available (KRW per USD).
pub const DEFAULT_FALLBACK_RATE: f64 = 1450.0;

/// Currency pair the toolbox quotes by default.
pub const DEFAULT_TICKER: &str = "KRW=X";

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Absence signal for a rate lookup. The caller keeps the failure visible
/// and falls back explicitly instead of receiving a masked default.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("rate request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("market data service returned status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("malformed market data payload: {0}")]
    Payload(String),

    #[error("market data contained no closing prices for {0}")]
    EmptyDataset(String),
}

#[async_trait]
pub trait RateSource: Send + Sync + Debug {
    /// Most recent daily close for a ticker, in quote-currency units.
    async fn latest_close(&self, ticker: &str) -> Result<f64, FxError>;
}

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Rate source backed by the Yahoo Finance chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooChartSource {
    base_url: String,
    http: Client,
}

impl Default for YahooChartSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

impl YahooChartSource {
    pub fn new(base_url: String) -> Self {
        Self { base_url, http: Client::new() }
    }
}

#[async_trait]
impl RateSource for YahooChartSource {
    async fn latest_close(&self, ticker: &str) -> Result<f64, FxError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), ticker);

        let res = self
            .http
            .get(url)
            .query(&[("range", "1mo"), ("interval", "1d")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FxError::Status { status, body: truncate_body(&body) });
        }

        parse_latest_close(ticker, &body)
    }
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

/// Gaps in the series (market holidays) come back as nulls; the latest
/// non-null close wins.
fn parse_latest_close(ticker: &str, body: &str) -> Result<f64, FxError> {
    let parsed: ChartResponse =
        serde_json::from_str(body).map_err(|e| FxError::Payload(format!("invalid JSON: {e}")))?;

    let closes = parsed
        .chart
        .result
        .as_deref()
        .and_then(|r| r.first())
        .and_then(|r| r.indicators.quote.first())
        .map(|q| q.close.as_slice())
        .unwrap_or_default();

    closes
        .iter()
        .rev()
        .find_map(|c| *c)
        .ok_or_else(|| FxError::EmptyDataset(ticker.to_string()))
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

#[derive(Debug)]
struct CacheSlot {
    ticker: String,
    rate: f64,
    fetched_at: Instant,
}

/// TTL cache over a [`RateSource`]. Single slot: the toolbox quotes one pair
/// at a time and the hosting model serializes interactions, so there is no
/// concurrent-writer hazard.
#[derive(Debug)]
pub struct CachedRates<S> {
    source: S,
    ttl: Duration,
    slot: Option<CacheSlot>,
}

impl<S: RateSource> CachedRates<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self { source, ttl, slot: None }
    }

    /// Cached rate if still fresh, otherwise one live fetch. A fetch failure
    /// does not evict a previously cached value, but an expired value is
    /// never served.
    pub async fn rate(&mut self, ticker: &str) -> Result<f64, FxError> {
        if let Some(slot) = &self.slot {
            if slot.ticker == ticker && slot.fetched_at.elapsed() < self.ttl {
                return Ok(slot.rate);
            }
        }

        let rate = self.source.latest_close(ticker).await?;
        self.slot = Some(CacheSlot {
            ticker: ticker.to_string(),
            rate,
            fetched_at: Instant::now(),
        });

        Ok(rate)
    }
}
