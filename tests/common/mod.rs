#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use trendscan::domain::error::ScanError;
pub use trendscan::domain::ohlcv::PriceBar;
use trendscan::ports::data_port::PriceHistoryPort;

pub struct MockHistoryPort {
    pub data: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
}

impl MockHistoryPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<PriceBar>) -> Self {
        self.data.insert(symbol.to_string(), bars);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

#[async_trait]
impl PriceHistoryPort for MockHistoryPort {
    async fn fetch_daily_history(&self, symbol: &str) -> Result<Vec<PriceBar>, ScanError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(ScanError::Provider {
                symbol: symbol.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(symbol).cloned().unwrap_or_default())
    }
}

pub fn make_bar(symbol: &str, day_offset: u64, close: f64) -> PriceBar {
    let base = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    PriceBar {
        symbol: symbol.to_string(),
        date: base.checked_add_days(Days::new(day_offset)).unwrap(),
        open: close,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: 1_000_000,
    }
}

/// Steady uptrend: +0.50 per bar. Lands in WAIT (uptrend, strong ADX,
/// RSI pinned at 100 by the unbroken gains).
pub fn rising_history(symbol: &str, len: usize) -> Vec<PriceBar> {
    (0..len)
        .map(|i| make_bar(symbol, i as u64, 100.0 + i as f64 * 0.5))
        .collect()
}

/// Steady downtrend: -0.50 per bar from 300. Lands in AVOID (below the
/// 200-period EMA).
pub fn falling_history(symbol: &str, len: usize) -> Vec<PriceBar> {
    (0..len)
        .map(|i| make_bar(symbol, i as u64, 300.0 - i as f64 * 0.5))
        .collect()
}
