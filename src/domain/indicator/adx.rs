//! Average Directional Index, Wilder's smoothing.
//!
//! 1. +DM / -DM from consecutive bars
//! 2. Wilder-smooth +DM, -DM, and TR (seed: mean of first n samples)
//! 3. ±DI = 100 * smoothed(±DM) / smoothed(TR)
//! 4. DX = 100 * |+DI - -DI| / (+DI + -DI)
//! 5. ADX = Wilder-smoothed DX
//!
//! Lookback is 2n bars: n samples to seed the DI averages, n DX values to
//! seed the ADX average. Flat stretches (zero TR or zero DI sum) contribute
//! a DX of 0 rather than dividing by zero.

use crate::domain::ohlcv::PriceBar;

/// Latest ADX value in [0, 100], or `None` with fewer than `2 * period` bars.
pub fn adx(bars: &[PriceBar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < 2 * period {
        return None;
    }

    let n = period as f64;
    let mut s_tr = 0.0;
    let mut s_plus = 0.0;
    let mut s_minus = 0.0;
    let mut adx = 0.0;
    let mut dx_count = 0usize;

    for i in 1..bars.len() {
        let tr = bars[i].true_range(bars[i - 1].close);
        let high_diff = bars[i].high - bars[i - 1].high;
        let low_diff = bars[i - 1].low - bars[i].low;
        let plus_dm = if high_diff > low_diff && high_diff > 0.0 {
            high_diff
        } else {
            0.0
        };
        let minus_dm = if low_diff > high_diff && low_diff > 0.0 {
            low_diff
        } else {
            0.0
        };

        if i <= period {
            s_tr += tr / n;
            s_plus += plus_dm / n;
            s_minus += minus_dm / n;
            if i < period {
                continue;
            }
        } else {
            s_tr = (s_tr * (n - 1.0) + tr) / n;
            s_plus = (s_plus * (n - 1.0) + plus_dm) / n;
            s_minus = (s_minus * (n - 1.0) + minus_dm) / n;
        }

        let dx = if s_tr == 0.0 {
            0.0
        } else {
            let plus_di = 100.0 * s_plus / s_tr;
            let minus_di = 100.0 * s_minus / s_tr;
            let di_sum = plus_di + minus_di;
            if di_sum == 0.0 {
                0.0
            } else {
                100.0 * (plus_di - minus_di).abs() / di_sum
            }
        };

        dx_count += 1;
        if dx_count <= period {
            adx += dx / n;
        } else {
            adx = (adx * (n - 1.0) + dx) / n;
        }
    }

    Some(adx)
}
