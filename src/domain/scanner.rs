//! Batch scan orchestration.
//!
//! One tokio task per ticker: fetch the history, compute the snapshot,
//! classify, plan. Each task owns its data end-to-end and any failure is
//! folded into that ticker's `ScanResult`, so the batch always completes.
//! Results come back in input order, then a stable sort ranks them by
//! signal priority (ties keep input order).

use crate::domain::decision::classify;
use crate::domain::ohlcv::PriceBar;
use crate::domain::result::ScanResult;
use crate::domain::snapshot::IndicatorSnapshot;
use crate::domain::trade_plan::{plan_trade, round2};
use crate::ports::data_port::PriceHistoryPort;
use std::sync::Arc;
use tracing::{debug, warn};

/// Split a comma-separated ticker list, trimming whitespace and dropping
/// empty entries. Duplicates are kept: they scan independently.
pub fn parse_tickers(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run the full decision pipeline over one ticker's fetched history.
pub fn analyze_history(
    ticker: &str,
    bars: &[PriceBar],
    account_size: f64,
    risk_pct: f64,
) -> ScanResult {
    let (Some(latest), Some(snapshot)) = (bars.last(), IndicatorSnapshot::from_bars(bars)) else {
        debug!(ticker, bars = bars.len(), "history too short for a snapshot");
        return ScanResult::insufficient_data(ticker);
    };

    let price = latest.close;
    let decision = classify(price, &snapshot);
    let plan = plan_trade(price, snapshot.atr, account_size, risk_pct);

    ScanResult {
        ticker: ticker.to_uppercase(),
        price: round2(price),
        ema_200: round2(snapshot.ema_200),
        rsi: round2(snapshot.rsi),
        adx: round2(snapshot.adx),
        macd: round2(snapshot.macd),
        macd_signal: round2(snapshot.macd_signal),
        atr: round2(snapshot.atr),
        volume: snapshot.volume,
        avg_volume: snapshot.avg_volume_20,
        trend: decision.trend,
        signal: decision.signal,
        reason: decision.reason,
        stop_loss: plan.stop_loss,
        take_profit: plan.take_profit,
        risk_reward: plan.risk_reward,
        shares_to_buy: plan.shares_to_buy,
        position_cost: plan.position_cost,
        affordable: plan.affordable,
        actual_risk: plan.actual_risk,
        error: None,
    }
}

/// Scan every ticker concurrently and return results ranked by signal
/// priority. Never fails as a whole: per-ticker faults become `Error`
/// records and a short list of healthy tickers is still ranked.
pub async fn scan_tickers(
    port: Arc<dyn PriceHistoryPort>,
    tickers: &[String],
    account_size: f64,
    risk_pct: f64,
) -> Vec<ScanResult> {
    let mut handles = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        let port = Arc::clone(&port);
        let ticker = ticker.clone();
        handles.push(tokio::spawn(async move {
            match port.fetch_daily_history(&ticker).await {
                Ok(bars) => analyze_history(&ticker, &bars, account_size, risk_pct),
                Err(e) => {
                    warn!(%ticker, error = %e, "scan unit failed");
                    ScanResult::calc_error(&ticker, &e.to_string())
                }
            }
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for (handle, ticker) in handles.into_iter().zip(tickers) {
        match handle.await {
            Ok(result) => results.push(result),
            Err(e) => {
                warn!(%ticker, error = %e, "scan task aborted");
                results.push(ScanResult::calc_error(ticker, &format!("scan task failed: {e}")));
            }
        }
    }

    rank_results(&mut results);
    results
}

/// Stable sort by signal priority; input order breaks ties.
pub fn rank_results(results: &mut [ScanResult]) {
    results.sort_by_key(|r| r.signal.priority());
}
