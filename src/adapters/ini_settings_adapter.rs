//! INI file settings adapter.
//!
//! Persists the single settings row under a `[scan]` section. Loading an
//! absent file yields the defaults; saving rewrites the whole row.

use crate::domain::error::ScanError;
use crate::domain::settings::ScanSettings;
use crate::ports::settings_port::SettingsPort;
use configparser::ini::Ini;
use std::path::PathBuf;

const SECTION: &str = "scan";

#[derive(Clone)]
pub struct IniSettingsAdapter {
    path: PathBuf,
}

impl IniSettingsAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsPort for IniSettingsAdapter {
    fn load(&self) -> Result<ScanSettings, ScanError> {
        if !self.path.exists() {
            return Ok(ScanSettings::default());
        }

        let mut config = Ini::new();
        config
            .load(&self.path)
            .map_err(|reason| ScanError::SettingsParse {
                file: self.path.display().to_string(),
                reason,
            })?;

        let defaults = ScanSettings::default();
        Ok(ScanSettings {
            account_size: config
                .getfloat(SECTION, "account_size")
                .ok()
                .flatten()
                .unwrap_or(defaults.account_size),
            risk_pct: config
                .getfloat(SECTION, "risk_pct")
                .ok()
                .flatten()
                .unwrap_or(defaults.risk_pct),
            tickers: config
                .get(SECTION, "tickers")
                .unwrap_or(defaults.tickers),
        })
    }

    fn save(&self, settings: &ScanSettings) -> Result<(), ScanError> {
        let mut config = Ini::new();
        config.set(
            SECTION,
            "account_size",
            Some(settings.account_size.to_string()),
        );
        config.set(SECTION, "risk_pct", Some(settings.risk_pct.to_string()));
        config.set(SECTION, "tickers", Some(settings.tickers.clone()));
        config.write(&self.path).map_err(ScanError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn adapter_in(dir: &TempDir) -> IniSettingsAdapter {
        IniSettingsAdapter::new(dir.path().join("trendscan.ini"))
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = adapter_in(&dir).load().unwrap();
        assert_eq!(settings, ScanSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter_in(&dir);

        let settings = ScanSettings {
            account_size: 25_000.0,
            risk_pct: 2.5,
            tickers: "NVDA, AMD".to_string(),
        };
        adapter.save(&settings).unwrap();

        assert_eq!(adapter.load().unwrap(), settings);
    }

    #[test]
    fn save_overwrites_previous_row() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter_in(&dir);

        adapter.save(&ScanSettings::default()).unwrap();
        let updated = ScanSettings {
            account_size: 5_000.0,
            ..ScanSettings::default()
        };
        adapter.save(&updated).unwrap();

        assert_eq!(adapter.load().unwrap().account_size, 5_000.0);
    }

    #[test]
    fn partial_file_falls_back_per_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trendscan.ini");
        std::fs::write(&path, "[scan]\naccount_size = 42000\n").unwrap();

        let settings = IniSettingsAdapter::new(path).load().unwrap();
        assert_eq!(settings.account_size, 42_000.0);
        assert_eq!(settings.risk_pct, ScanSettings::default().risk_pct);
        assert_eq!(settings.tickers, ScanSettings::default().tickers);
    }
}
