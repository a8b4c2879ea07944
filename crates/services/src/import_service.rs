use std::path::Path;
use std::sync::Arc;

use globetrotter_core::model::DestinationError;
use storage::dataset::{DatasetEntry, load_dataset};
use storage::repository::{DestinationRepository, ImportOutcome, StorageError};
use tracing::{info, warn};

use crate::error::ImportError;

/// Cities touched by one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: Vec<String>,
    pub skipped: Vec<String>,
    pub rejected: Vec<(String, DestinationError)>,
}

impl ImportReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.imported.len() + self.skipped.len() + self.rejected.len()
    }
}

/// Fills the destination repository from a JSON dataset (get-or-create by city).
#[derive(Clone)]
pub struct DatasetImportService {
    destinations: Arc<dyn DestinationRepository>,
}

impl DatasetImportService {
    #[must_use]
    pub fn new(destinations: Arc<dyn DestinationRepository>) -> Self {
        Self { destinations }
    }

    /// Read `path` and import every entry.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Dataset` if the file is missing or malformed, or
    /// `ImportError::Storage` if the repository fails.
    pub async fn import_file(&self, path: &Path) -> Result<ImportReport, ImportError> {
        info!(path = %path.display(), "looking for dataset");
        let entries = load_dataset(path)?;
        self.import_entries(entries).await
    }

    /// Import parsed entries. Invalid entries are reported, not fatal.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Storage` on repository failures other than validation.
    pub async fn import_entries(
        &self,
        entries: Vec<DatasetEntry>,
    ) -> Result<ImportReport, ImportError> {
        let mut report = ImportReport::default();
        for entry in entries {
            let city = entry.city.trim().to_owned();
            match self.destinations.insert_if_absent(entry.into_draft()).await {
                Ok(ImportOutcome::Created(_)) => {
                    info!("Imported: {city}");
                    report.imported.push(city);
                }
                Ok(ImportOutcome::Skipped(_)) => {
                    info!("Skipped (exists): {city}");
                    report.skipped.push(city);
                }
                Err(StorageError::InvalidDestination(err)) => {
                    warn!(%err, "Rejected: {city}");
                    report.rejected.push((city, err));
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(report)
    }
}
