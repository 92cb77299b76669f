//! Latest-bar indicator snapshot.
//!
//! Collapses a full price history into the single set of values the decision
//! engine reads. Indicators that cannot be computed degrade to a neutral
//! value (RSI 50, everything else 0) instead of propagating `None`;
//! downstream consumers always see a fully populated snapshot.

use crate::domain::indicator::adx::adx;
use crate::domain::indicator::atr::atr;
use crate::domain::indicator::ema::ema;
use crate::domain::indicator::macd::macd_default;
use crate::domain::indicator::rsi::rsi;
use crate::domain::ohlcv::PriceBar;

/// Bars required before a snapshot is meaningful: the 200-period trend EMA
/// needs a full window.
pub const MIN_BARS: usize = 200;

pub const EMA_TREND_PERIOD: usize = 200;
pub const RSI_PERIOD: usize = 14;
pub const ATR_PERIOD: usize = 14;
pub const ADX_PERIOD: usize = 14;
pub const AVG_VOLUME_WINDOW: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    pub ema_200: f64,
    pub rsi: f64,
    pub atr: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub adx: f64,
    pub volume: i64,
    pub avg_volume_20: i64,
}

impl IndicatorSnapshot {
    /// Compute the snapshot from a chronological history, or `None` when the
    /// history is empty or shorter than [`MIN_BARS`].
    pub fn from_bars(bars: &[PriceBar]) -> Option<Self> {
        if bars.len() < MIN_BARS {
            return None;
        }
        let latest = bars.last()?;

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let ema_200 = ema(&closes, EMA_TREND_PERIOD)?;
        let macd = macd_default(&closes);

        let tail = &bars[bars.len() - AVG_VOLUME_WINDOW..];
        let avg_volume_20 =
            (tail.iter().map(|b| b.volume as f64).sum::<f64>() / tail.len() as f64) as i64;

        Some(Self {
            ema_200,
            rsi: rsi(&closes, RSI_PERIOD).unwrap_or(50.0),
            atr: atr(bars, ATR_PERIOD).unwrap_or(0.0),
            macd: macd.map(|m| m.line).unwrap_or(0.0),
            macd_signal: macd.map(|m| m.signal).unwrap_or(0.0),
            adx: adx(bars, ADX_PERIOD).unwrap_or(0.0),
            volume: latest.volume,
            avg_volume_20,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn history(len: usize, step: f64) -> Vec<PriceBar> {
        let base = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        (0..len)
            .map(|i| {
                let close = 100.0 + i as f64 * step;
                PriceBar {
                    symbol: "TEST".into(),
                    date: base.checked_add_days(Days::new(i as u64)).unwrap(),
                    open: close,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 1_000 + i as i64,
                }
            })
            .collect()
    }

    #[test]
    fn snapshot_requires_min_bars() {
        assert_eq!(IndicatorSnapshot::from_bars(&[]), None);
        assert_eq!(IndicatorSnapshot::from_bars(&history(199, 0.5)), None);
        assert!(IndicatorSnapshot::from_bars(&history(200, 0.5)).is_some());
    }

    #[test]
    fn snapshot_rising_history() {
        let bars = history(250, 0.5);
        let snap = IndicatorSnapshot::from_bars(&bars).unwrap();

        let price = bars.last().unwrap().close;
        assert!(snap.ema_200 < price, "trend EMA must lag a rising price");
        assert!((snap.rsi - 100.0).abs() < 1e-9, "all gains → RSI 100");
        assert!(snap.adx > 20.0, "steady trend → strong ADX");
        assert!(snap.macd > snap.macd_signal);
        assert!(snap.atr > 0.0);
    }

    #[test]
    fn snapshot_flat_history_uses_neutral_fallbacks() {
        let bars = history(220, 0.0);
        let snap = IndicatorSnapshot::from_bars(&bars).unwrap();

        // Zero-variance closes: RSI is indeterminate and falls back to 50.
        assert_eq!(snap.rsi, 50.0);
        assert_eq!(snap.adx, 0.0);
        assert!(snap.macd.abs() < 1e-9);
        assert!(snap.macd_signal.abs() < 1e-9);
    }

    #[test]
    fn snapshot_volume_fields() {
        let bars = history(240, 0.5);
        let snap = IndicatorSnapshot::from_bars(&bars).unwrap();

        assert_eq!(snap.volume, 1_000 + 239);
        // Trailing 20 volumes: 1220..=1239, mean 1229.5, truncated to 1229.
        assert_eq!(snap.avg_volume_20, 1229);
    }
}
