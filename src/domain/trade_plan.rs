//! ATR-based trade planning and position sizing.
//!
//! Fixed 2x/3x ATR risk framework: stop 2 ATRs below entry, target 3 ATRs
//! above. Share count is capped by the dollar risk budget
//! (account_size * risk_pct / 100) divided by the per-share risk. A zero or
//! negative per-share risk (degenerate zero-ATR input) sizes no trade.

pub const STOP_ATR_MULTIPLE: f64 = 2.0;
pub const TARGET_ATR_MULTIPLE: f64 = 3.0;

/// Round to 2 decimal places for price/money fields.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradePlan {
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward: f64,
    pub shares_to_buy: i64,
    pub position_cost: f64,
    pub actual_risk: f64,
    pub affordable: bool,
}

/// Derive the trade plan for an entry at `price`.
///
/// `risk_pct` is in percent units (1.0 = 1% of the account at risk).
pub fn plan_trade(price: f64, atr: f64, account_size: f64, risk_pct: f64) -> TradePlan {
    let stop_loss = round2(price - STOP_ATR_MULTIPLE * atr);
    let take_profit = round2(price + TARGET_ATR_MULTIPLE * atr);

    // Per-share risk uses the rounded stop: it is the distance an order
    // placed at that stop would actually realize.
    let risk_per_share = price - stop_loss;
    let max_risk_dollars = account_size * (risk_pct / 100.0);

    let shares_to_buy = if risk_per_share > 0.0 {
        (max_risk_dollars / risk_per_share) as i64
    } else {
        0
    };

    let position_cost = round2(shares_to_buy as f64 * price);
    let actual_risk = round2(shares_to_buy as f64 * risk_per_share);
    let risk_reward = if risk_per_share > 0.0 {
        round2((take_profit - price) / (price - stop_loss))
    } else {
        0.0
    };

    TradePlan {
        stop_loss,
        take_profit,
        risk_reward,
        shares_to_buy,
        position_cost,
        actual_risk,
        affordable: position_cost <= account_size,
    }
}
