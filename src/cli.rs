//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::adapters::csv_adapter::CsvHistoryAdapter;
use crate::adapters::ini_settings_adapter::IniSettingsAdapter;
use crate::adapters::yahoo_adapter::YahooAdapter;
use crate::domain::error::ScanError;
use crate::domain::result::ScanResult;
use crate::domain::scanner::{parse_tickers, scan_tickers};
use crate::domain::settings::ScanSettings;
use crate::ports::data_port::PriceHistoryPort;
use crate::ports::settings_port::SettingsPort;

const DEFAULT_SETTINGS_FILE: &str = "trendscan.ini";

#[derive(Parser, Debug)]
#[command(name = "trendscan", about = "Rule-based stock scanner with ATR trade planning")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan tickers and print signals ranked by priority
    Scan {
        /// Settings file (created on first scan)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Comma-separated ticker list (overrides the stored setting)
        #[arg(short, long)]
        tickers: Option<String>,
        /// Account size in dollars (overrides the stored setting)
        #[arg(long)]
        account_size: Option<f64>,
        /// Percent of the account risked per trade (overrides the stored setting)
        #[arg(long)]
        risk_pct: Option<f64>,
        /// Read history from {SYMBOL}.csv files instead of Yahoo Finance
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the stored scan settings
    Settings {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    init_tracing();

    match cli.command {
        Command::Scan {
            config,
            tickers,
            account_size,
            risk_pct,
            data_dir,
            json,
        } => run_scan(config, tickers, account_size, risk_pct, data_dir, json),
        Command::Settings { config } => run_settings(config),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn settings_path(config: Option<PathBuf>) -> PathBuf {
    config.unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

fn run_scan(
    config: Option<PathBuf>,
    tickers: Option<String>,
    account_size: Option<f64>,
    risk_pct: Option<f64>,
    data_dir: Option<PathBuf>,
    json: bool,
) -> ExitCode {
    let store = IniSettingsAdapter::new(settings_path(config));
    let stored = match store.load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let settings = ScanSettings {
        account_size: account_size.unwrap_or(stored.account_size),
        risk_pct: risk_pct.unwrap_or(stored.risk_pct),
        tickers: tickers.unwrap_or(stored.tickers),
    };
    if let Err(e) = settings.validate() {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let ticker_list = parse_tickers(&settings.tickers);
    info!(tickers = ticker_list.len(), "starting scan");

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            let err = ScanError::Io(e);
            eprintln!("error: {err}");
            return (&err).into();
        }
    };

    let results = runtime.block_on(async {
        // The settings row is written once per scan request, off the fetch
        // path; a failed save is reported but never discards scan results.
        let save = {
            let store = store.clone();
            let row = settings.clone();
            tokio::task::spawn_blocking(move || store.save(&row))
        };

        let port: Arc<dyn PriceHistoryPort> = match data_dir {
            Some(dir) => Arc::new(CsvHistoryAdapter::new(dir)),
            None => Arc::new(YahooAdapter::new()),
        };
        let results =
            scan_tickers(port, &ticker_list, settings.account_size, settings.risk_pct).await;

        match save.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(error = %e, "failed to save settings"),
            Err(e) => warn!(error = %e, "settings save task aborted"),
        }

        results
    });

    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(body) => println!("{body}"),
            Err(e) => {
                eprintln!("error: failed to serialize results: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_table(&results);
    }

    ExitCode::SUCCESS
}

fn run_settings(config: Option<PathBuf>) -> ExitCode {
    let path = settings_path(config);
    let store = IniSettingsAdapter::new(path.clone());
    match store.load() {
        Ok(settings) => {
            println!("settings file: {}", path.display());
            println!("account_size = {}", settings.account_size);
            println!("risk_pct     = {}", settings.risk_pct);
            println!("tickers      = {}", settings.tickers);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn print_table(results: &[ScanResult]) {
    println!(
        "{:<10} {:>10} {:<12} {:<10} {:>7} {:>7} {:>10} {:>10} {:>7}  {}",
        "TICKER", "PRICE", "SIGNAL", "TREND", "RSI", "ADX", "STOP", "TARGET", "SHARES", "REASON"
    );
    for r in results {
        println!(
            "{:<10} {:>10.2} {:<12} {:<10} {:>7.2} {:>7.2} {:>10.2} {:>10.2} {:>7}  {}",
            r.ticker,
            r.price,
            r.signal,
            r.trend,
            r.rsi,
            r.adx,
            r.stop_loss,
            r.take_profit,
            r.shares_to_buy,
            r.reason
        );
    }
}
