//! Relative Strength Index, Wilder's smoothing.
//!
//! First averages: simple mean of gains/losses over the first n changes.
//! Subsequent: avg = (prev_avg * (n-1) + current) / n.
//! RSI = 100 - (100 / (1 + avg_gain / avg_loss)); avg_loss == 0 → 100.
//!
//! A fully flat window (no gains and no losses) is indeterminate and returns
//! `None`; the snapshot layer substitutes the neutral 50.

/// Latest RSI value in [0, 100], or `None` when indeterminate.
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };

        if i <= period {
            avg_gain += gain / period as f64;
            avg_loss += loss / period as f64;
        } else {
            avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
        }
    }

    if avg_loss == 0.0 && avg_gain == 0.0 {
        return None;
    }
    if avg_loss == 0.0 {
        return Some(100.0);
    }
    Some(100.0 - (100.0 / (1.0 + avg_gain / avg_loss)))
}
