//! Yahoo Finance price history adapter.
//!
//! Fetches daily OHLCV bars from Yahoo's v8 chart API over a trailing
//! two-year window. Yahoo has no official API and changes format without
//! notice; response-shape surprises surface as `ScanError::Provider`.
//!
//! One attempt per symbol per scan: a failed fetch is final for that scan,
//! so there is no retry loop here, only the client's request timeout.

use crate::domain::error::ScanError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::data_port::PriceHistoryPort;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tracing::debug;

const HISTORY_DAYS: i64 = 730;
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<i64>>,
}

pub struct YahooAdapter {
    client: reqwest::Client,
}

impl YahooAdapter {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    fn chart_url(symbol: &str, now: DateTime<Utc>) -> String {
        let period2 = now.timestamp();
        let period1 = (now - Duration::days(HISTORY_DAYS)).timestamp();
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{symbol}\
             ?period1={period1}&period2={period2}&interval=1d"
        )
    }

    fn parse_response(symbol: &str, resp: ChartResponse) -> Result<Vec<PriceBar>, ScanError> {
        let result = match resp.chart.result {
            Some(result) => result,
            None => {
                // An unknown symbol is not a fault: the scanner treats the
                // empty history as its InsufficientData terminal case.
                if let Some(err) = resp.chart.error {
                    if err.code == "Not Found" {
                        return Ok(Vec::new());
                    }
                    return Err(ScanError::Provider {
                        symbol: symbol.to_string(),
                        reason: format!("{}: {}", err.code, err.description),
                    });
                }
                return Err(ScanError::Provider {
                    symbol: symbol.to_string(),
                    reason: "empty result with no error".to_string(),
                });
            }
        };

        let data = result.into_iter().next().ok_or_else(|| ScanError::Provider {
            symbol: symbol.to_string(),
            reason: "result array is empty".to_string(),
        })?;

        let timestamps = data.timestamp.unwrap_or_default();
        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ScanError::Provider {
                symbol: symbol.to_string(),
                reason: "no quote data".to_string(),
            })?;

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let date = DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| ScanError::Provider {
                    symbol: symbol.to_string(),
                    reason: format!("invalid timestamp: {ts}"),
                })?;

            // Holiday/non-trading rows come back as nulls; skip any row
            // without a full OHLC set rather than inventing prices.
            let (Some(open), Some(high), Some(low), Some(close)) = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
            ) else {
                continue;
            };

            bars.push(PriceBar {
                symbol: symbol.to_string(),
                date,
                open,
                high,
                low,
                close,
                volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
            });
        }

        Ok(bars)
    }
}

impl Default for YahooAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceHistoryPort for YahooAdapter {
    async fn fetch_daily_history(&self, symbol: &str) -> Result<Vec<PriceBar>, ScanError> {
        let url = Self::chart_url(symbol, Utc::now());
        debug!(symbol, "fetching daily history");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ScanError::Http {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(ScanError::Http {
                symbol: symbol.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let chart: ChartResponse = resp.json().await.map_err(|e| ScanError::Provider {
            symbol: symbol.to_string(),
            reason: format!("failed to parse response: {e}"),
        })?;

        let bars = Self::parse_response(symbol, chart)?;
        debug!(symbol, bars = bars.len(), "history fetched");
        Ok(bars)
    }
}
