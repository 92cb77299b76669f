//! Settings persistence port trait.

use crate::domain::error::ScanError;
use crate::domain::settings::ScanSettings;

pub trait SettingsPort: Send + Sync {
    /// Load the stored settings row, falling back to defaults when nothing
    /// has been saved yet.
    fn load(&self) -> Result<ScanSettings, ScanError>;

    /// Persist the whole settings row in one write.
    fn save(&self, settings: &ScanSettings) -> Result<(), ScanError>;
}
