//! Trend/momentum classification.
//!
//! A fixed rule tree over the latest indicator snapshot, evaluated top to
//! bottom with the first match winning. Thresholds are constants of the
//! tree, not configuration: the 200-period EMA splits trend, ADX below 20
//! vetoes everything (chop filter), and the RSI 30/50 breakpoints grade the
//! pullback. Pure function; same snapshot in, same decision out.

use crate::domain::snapshot::IndicatorSnapshot;
use serde::Serialize;
use std::fmt;

pub const ADX_CHOP_THRESHOLD: f64 = 20.0;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_MIDLINE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    #[serde(rename = "Uptrend")]
    Uptrend,
    #[serde(rename = "Downtrend")]
    Downtrend,
    #[serde(rename = "N/A")]
    NotAvailable,
    #[serde(rename = "Error")]
    Error,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Uptrend => "Uptrend",
            Trend::Downtrend => "Downtrend",
            Trend::NotAvailable => "N/A",
            Trend::Error => "Error",
        };
        f.pad(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Signal {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY SIGNAL")]
    BuySignal,
    #[serde(rename = "WATCHLIST")]
    Watchlist,
    #[serde(rename = "WAIT")]
    Wait,
    #[serde(rename = "AVOID")]
    Avoid,
    #[serde(rename = "N/A")]
    NotAvailable,
    #[serde(rename = "Error")]
    Error,
}

impl Signal {
    /// Ranking key for batch output: actionable signals first, failures last.
    pub fn priority(self) -> u8 {
        match self {
            Signal::StrongBuy => 0,
            Signal::BuySignal => 1,
            Signal::Watchlist => 2,
            Signal::Wait => 3,
            Signal::Avoid => 4,
            Signal::NotAvailable | Signal::Error => 5,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Signal::StrongBuy => "STRONG BUY",
            Signal::BuySignal => "BUY SIGNAL",
            Signal::Watchlist => "WATCHLIST",
            Signal::Wait => "WAIT",
            Signal::Avoid => "AVOID",
            Signal::NotAvailable => "N/A",
            Signal::Error => "Error",
        };
        f.pad(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub trend: Trend,
    pub signal: Signal,
    pub reason: String,
}

/// Classify the latest price against its indicator snapshot.
pub fn classify(price: f64, snapshot: &IndicatorSnapshot) -> Decision {
    if price <= snapshot.ema_200 {
        return Decision {
            trend: Trend::Downtrend,
            signal: Signal::Avoid,
            reason: "Downtrend (Below 200 EMA).".to_string(),
        };
    }

    let adx = snapshot.adx.round() as i64;

    if snapshot.adx < ADX_CHOP_THRESHOLD {
        return Decision {
            trend: Trend::Uptrend,
            signal: Signal::Avoid,
            reason: format!("Weak Trend (ADX {adx}). Chop Zone."),
        };
    }

    let (signal, reason) = if snapshot.rsi < RSI_OVERSOLD {
        (
            Signal::StrongBuy,
            format!("Extreme Oversold (<30). ADX {adx}."),
        )
    } else if snapshot.rsi < RSI_MIDLINE {
        if snapshot.macd > snapshot.macd_signal {
            (
                Signal::BuySignal,
                format!("Pullback + MACD Cross. ADX {adx}."),
            )
        } else {
            (
                Signal::Watchlist,
                format!("Pullback active. Wait for turn. ADX {adx}."),
            )
        }
    } else {
        (
            Signal::Wait,
            format!("In Uptrend, but expensive. ADX {adx}."),
        )
    };

    Decision {
        trend: Trend::Uptrend,
        signal,
        reason,
    }
}
