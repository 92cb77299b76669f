//! Price history access port trait.

use crate::domain::error::ScanError;
use crate::domain::ohlcv::PriceBar;
use async_trait::async_trait;

#[async_trait]
pub trait PriceHistoryPort: Send + Sync {
    /// Fetch at least two years of daily bars for `symbol`, chronological.
    ///
    /// An unknown or delisted symbol yields `Ok(vec![])`; the scanner folds
    /// empty and too-short histories into the same terminal record. `Err` is
    /// reserved for transport and response faults.
    async fn fetch_daily_history(&self, symbol: &str) -> Result<Vec<PriceBar>, ScanError>;
}
