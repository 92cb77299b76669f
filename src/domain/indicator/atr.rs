//! Average True Range, Wilder's smoothing.
//!
//! TR[0] = high - low (no prior close); seed ATR with the SMA of the first
//! n true ranges, then ATR = (prev_atr * (n-1) + TR) / n.

use crate::domain::ohlcv::PriceBar;

/// Latest ATR value, or `None` with fewer than `period` bars.
pub fn atr(bars: &[PriceBar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period {
        return None;
    }

    let mut atr = 0.0;
    for (i, bar) in bars.iter().enumerate() {
        let tr = if i == 0 {
            bar.high - bar.low
        } else {
            bar.true_range(bars[i - 1].close)
        };

        if i < period {
            atr += tr / period as f64;
        } else {
            atr = (atr * (period - 1) as f64 + tr) / period as f64;
        }
    }

    Some(atr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_bar(day: u32, high: f64, low: f64, close: f64) -> PriceBar {
        PriceBar {
            symbol: "TEST".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high,
            low,
            close,
            volume: 1000,
        }
    }

    #[test]
    fn atr_insufficient_bars() {
        let bars = vec![make_bar(1, 110.0, 90.0, 100.0)];
        assert_eq!(atr(&bars, 3), None);
        assert_eq!(atr(&[], 3), None);
    }

    #[test]
    fn atr_zero_period() {
        let bars = vec![make_bar(1, 110.0, 90.0, 100.0)];
        assert_eq!(atr(&bars, 0), None);
    }

    #[test]
    fn atr_seed_is_average_true_range() {
        let bars = vec![
            make_bar(1, 110.0, 100.0, 105.0),
            make_bar(2, 115.0, 105.0, 110.0),
            make_bar(3, 120.0, 110.0, 115.0),
        ];
        // TRs: 10, 10, 10 → seed 10
        assert_relative_eq!(atr(&bars, 3).unwrap(), 10.0);
    }

    #[test]
    fn atr_wilder_smoothing() {
        let bars = vec![
            make_bar(1, 110.0, 100.0, 105.0),
            make_bar(2, 115.0, 105.0, 110.0),
            make_bar(3, 120.0, 110.0, 115.0),
            make_bar(4, 131.0, 115.0, 120.0),
        ];
        // seed = 10; TR[3] = max(16, |131-115|=16, |115-115|=0) = 16
        // ATR = (10*2 + 16) / 3 = 12
        assert_relative_eq!(atr(&bars, 3).unwrap(), 12.0);
    }

    #[test]
    fn atr_gap_counts_full_move() {
        let bars = vec![
            make_bar(1, 110.0, 100.0, 105.0),
            // Gap up: TR = |130 - 105| = 25, wider than high-low = 10
            make_bar(2, 130.0, 120.0, 125.0),
        ];
        assert_relative_eq!(atr(&bars, 2).unwrap(), (10.0 + 25.0) / 2.0);
    }

    #[test]
    fn atr_flat_bars_is_zero() {
        let bars: Vec<PriceBar> = (1..=5).map(|d| make_bar(d, 100.0, 100.0, 100.0)).collect();
        assert_relative_eq!(atr(&bars, 3).unwrap(), 0.0);
    }
}
