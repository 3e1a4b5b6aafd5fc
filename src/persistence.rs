// Receipt persistence: one flat text file per booking
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ReservationError;
use crate::receipt::Receipt;

// Anything that can keep a receipt once a booking is confirmed
pub trait ReceiptStore {
    /// Persists `receipt`, returning where it was written.
    fn save(&self, receipt: &Receipt) -> Result<PathBuf, ReservationError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub output_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileReceiptStore {
    config: StoreConfig,
}

impl FileReceiptStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path_for(&self, receipt: &Receipt) -> PathBuf {
        self.config.output_dir.join(receipt.file_name())
    }
}

impl ReceiptStore for FileReceiptStore {
    // Single write, existing files are overwritten and failures are not retried
    fn save(&self, receipt: &Receipt) -> Result<PathBuf, ReservationError> {
        let path = self.path_for(receipt);

        match fs::write(&path, receipt.text()) {
            Ok(()) => {
                info!(path = %path.display(), "Booking receipt saved");
                Ok(path)
            }
            Err(e) => {
                error!(path = %path.display(), "Failed to save booking receipt: {}", e);
                Err(ReservationError::PersistenceFailure(e))
            }
        }
    }
}
