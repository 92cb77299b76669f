//! Moving Average Convergence/Divergence.
//!
//! MACD line = EMA(fast) - EMA(slow); signal line = EMA(signal) of the MACD
//! line, seeded with the SMA of its first `signal` values after the slow
//! warmup. The histogram is not carried; nothing downstream reads it.
//!
//! Default parameters: fast=12, slow=26, signal=9.

use crate::domain::indicator::ema::ema_series;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

/// Latest MACD line and signal values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Macd {
    pub line: f64,
    pub signal: f64,
}

/// Latest MACD values, or `None` when the series is shorter than the
/// combined warmup (max(fast, slow) - 1 + signal bars).
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> Option<Macd> {
    if fast == 0 || slow == 0 || signal_period == 0 {
        return None;
    }

    let warmup = fast.max(slow) - 1;
    if closes.len() < warmup + signal_period {
        return None;
    }

    let ema_fast = ema_series(closes, fast);
    let ema_slow = ema_series(closes, slow);
    let line: Vec<f64> = (warmup..closes.len())
        .map(|i| ema_fast[i] - ema_slow[i])
        .collect();

    let k = 2.0 / (signal_period as f64 + 1.0);
    let mut signal = line[..signal_period].iter().sum::<f64>() / signal_period as f64;
    for &value in &line[signal_period..] {
        signal = value * k + signal * (1.0 - k);
    }

    line.last().map(|&last| Macd { line: last, signal })
}

/// MACD(12, 26, 9).
pub fn macd_default(closes: &[f64]) -> Option<Macd> {
    macd(closes, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}
