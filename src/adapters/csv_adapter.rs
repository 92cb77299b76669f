//! CSV file price history adapter.
//!
//! Reads `{SYMBOL}.csv` files (`date,open,high,low,close,volume`, ISO dates)
//! from a data directory. Offline substitute for the Yahoo adapter in tests
//! and air-gapped runs; a missing file behaves like an unknown symbol.

use crate::domain::error::ScanError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::data_port::PriceHistoryPort;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct CsvHistoryAdapter {
    base_path: PathBuf,
}

impl CsvHistoryAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol.to_uppercase()))
    }

    fn read_bars(&self, symbol: &str) -> Result<Vec<PriceBar>, ScanError> {
        let path = self.csv_path(symbol);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let fault = |reason: String| ScanError::Provider {
            symbol: symbol.to_string(),
            reason,
        };

        let mut rdr = csv::Reader::from_path(&path)
            .map_err(|e| fault(format!("failed to open {}: {e}", path.display())))?;

        let mut bars = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| fault(format!("CSV parse error: {e}")))?;

            let field = |idx: usize, name: &str| {
                record
                    .get(idx)
                    .ok_or_else(|| fault(format!("missing {name} column")))
            };

            let date = NaiveDate::parse_from_str(field(0, "date")?, "%Y-%m-%d")
                .map_err(|e| fault(format!("invalid date: {e}")))?;
            let open: f64 = field(1, "open")?
                .parse()
                .map_err(|e| fault(format!("invalid open value: {e}")))?;
            let high: f64 = field(2, "high")?
                .parse()
                .map_err(|e| fault(format!("invalid high value: {e}")))?;
            let low: f64 = field(3, "low")?
                .parse()
                .map_err(|e| fault(format!("invalid low value: {e}")))?;
            let close: f64 = field(4, "close")?
                .parse()
                .map_err(|e| fault(format!("invalid close value: {e}")))?;
            let volume: i64 = field(5, "volume")?
                .parse()
                .map_err(|e| fault(format!("invalid volume value: {e}")))?;

            bars.push(PriceBar {
                symbol: symbol.to_string(),
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }
}

#[async_trait]
impl PriceHistoryPort for CsvHistoryAdapter {
    async fn fetch_daily_history(&self, symbol: &str) -> Result<Vec<PriceBar>, ScanError> {
        self.read_bars(symbol)
    }
}
