//! Domain error types.
//!
//! `ScanError` covers adapter and glue-layer faults. Per-ticker failures
//! inside a batch never surface as `ScanError`; they are folded into that
//! ticker's `ScanResult` so one symbol cannot abort the scan.

/// Top-level error type for trendscan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("http request for {symbol} failed: {reason}")]
    Http { symbol: String, reason: String },

    #[error("unexpected provider response for {symbol}: {reason}")]
    Provider { symbol: String, reason: String },

    #[error("settings parse error in {file}: {reason}")]
    SettingsParse { file: String, reason: String },

    #[error("invalid setting {key}: {reason}")]
    SettingsInvalid { key: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ScanError> for std::process::ExitCode {
    fn from(err: &ScanError) -> Self {
        let code: u8 = match err {
            ScanError::Io(_) => 1,
            ScanError::SettingsParse { .. } | ScanError::SettingsInvalid { .. } => 2,
            ScanError::Http { .. } | ScanError::Provider { .. } => 3,
        };
        std::process::ExitCode::from(code)
    }
}
