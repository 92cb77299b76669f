//! Scan settings value object.
//!
//! The single "current preferences" row owned by the surrounding glue. The
//! core only ever receives these as plain parameters; loading and saving
//! them is a [`crate::ports::settings_port::SettingsPort`] concern.

use crate::domain::error::ScanError;
use crate::domain::scanner::parse_tickers;

#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    pub account_size: f64,
    pub risk_pct: f64,
    pub tickers: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            account_size: 10_000.0,
            risk_pct: 1.0,
            tickers: "AAPL, TSLA, MSFT, BTC-USD".to_string(),
        }
    }
}

impl ScanSettings {
    pub fn validate(&self) -> Result<(), ScanError> {
        if !(self.account_size > 0.0) {
            return Err(ScanError::SettingsInvalid {
                key: "account_size".to_string(),
                reason: format!("must be positive, got {}", self.account_size),
            });
        }
        if !(self.risk_pct > 0.0) {
            return Err(ScanError::SettingsInvalid {
                key: "risk_pct".to_string(),
                reason: format!("must be positive, got {}", self.risk_pct),
            });
        }
        if parse_tickers(&self.tickers).is_empty() {
            return Err(ScanError::SettingsInvalid {
                key: "tickers".to_string(),
                reason: "no tickers to scan".to_string(),
            });
        }
        Ok(())
    }
}
