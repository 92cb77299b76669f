//! Per-ticker scan output record.
//!
//! `ScanResult` is the wire contract with whatever renders the scan: field
//! names and value semantics are preserved exactly as the presentation layer
//! expects them. Constructed once per ticker per scan, never mutated.

use crate::domain::decision::{Signal, Trend};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub ticker: String,
    pub price: f64,
    pub ema_200: f64,
    pub rsi: f64,
    pub adx: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub atr: f64,
    pub volume: i64,
    pub avg_volume: i64,
    pub trend: Trend,
    pub signal: Signal,
    pub reason: String,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward: f64,
    pub shares_to_buy: i64,
    pub position_cost: f64,
    pub affordable: bool,
    pub actual_risk: f64,
    pub error: Option<String>,
}

impl ScanResult {
    fn zeroed(ticker: &str, trend: Trend, signal: Signal, reason: String, error: &str) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            price: 0.0,
            ema_200: 0.0,
            rsi: 0.0,
            adx: 0.0,
            macd: 0.0,
            macd_signal: 0.0,
            atr: 0.0,
            volume: 0,
            avg_volume: 0,
            trend,
            signal,
            reason,
            stop_loss: 0.0,
            take_profit: 0.0,
            risk_reward: 0.0,
            shares_to_buy: 0,
            position_cost: 0.0,
            affordable: false,
            actual_risk: 0.0,
            error: Some(error.to_string()),
        }
    }

    /// Terminal record for an empty or sub-200-bar history.
    pub fn insufficient_data(ticker: &str) -> Self {
        Self::zeroed(
            ticker,
            Trend::NotAvailable,
            Signal::NotAvailable,
            "Insufficient Data".to_string(),
            "No Data",
        )
    }

    /// Terminal record for a fetch or compute failure.
    pub fn calc_error(ticker: &str, detail: &str) -> Self {
        Self::zeroed(
            ticker,
            Trend::Error,
            Signal::Error,
            detail.to_string(),
            "Calc Error",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_shape() {
        let result = ScanResult::insufficient_data("aapl");
        assert_eq!(result.ticker, "AAPL");
        assert_eq!(result.trend, Trend::NotAvailable);
        assert_eq!(result.signal, Signal::NotAvailable);
        assert_eq!(result.reason, "Insufficient Data");
        assert_eq!(result.error.as_deref(), Some("No Data"));
        assert_eq!(result.price, 0.0);
        assert_eq!(result.shares_to_buy, 0);
        assert!(!result.affordable);
    }

    #[test]
    fn calc_error_carries_detail() {
        let result = ScanResult::calc_error("TSLA", "connection reset by peer");
        assert_eq!(result.trend, Trend::Error);
        assert_eq!(result.signal, Signal::Error);
        assert_eq!(result.reason, "connection reset by peer");
        assert_eq!(result.error.as_deref(), Some("Calc Error"));
        assert_eq!(result.stop_loss, 0.0);
    }

    #[test]
    fn serializes_wire_field_names() {
        let result = ScanResult::insufficient_data("MSFT");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["ticker"], "MSFT");
        assert_eq!(json["trend"], "N/A");
        assert_eq!(json["signal"], "N/A");
        assert_eq!(json["error"], "No Data");
        assert_eq!(json["avg_volume"], 0);
        assert!(json.get("macd_signal").is_some());
        assert!(json.get("shares_to_buy").is_some());
    }
}
