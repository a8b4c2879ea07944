//! JSON dataset of destinations used to fill the repository.

use std::path::{Path, PathBuf};

use globetrotter_core::model::DestinationDraft;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One record of the dataset file. Omitted fields are empty; validation rejects
/// records without a city.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub clues: Vec<String>,
    #[serde(default)]
    pub fun_fact: String,
    #[serde(default)]
    pub trivia: Vec<String>,
    #[serde(default)]
    pub image_url: String,
}

impl DatasetEntry {
    #[must_use]
    pub fn into_draft(self) -> DestinationDraft {
        DestinationDraft {
            city: self.city,
            country: Some(self.country),
            clues: self.clues,
            fun_fact: self.fun_fact,
            trivia: self.trivia,
            image_url: Some(self.image_url),
        }
    }
}

/// Parse a dataset from its JSON text (a top-level array of entries).
///
/// # Errors
///
/// Returns `DatasetError::Json` if the text is not a valid entry array.
pub fn parse_dataset(json: &str) -> Result<Vec<DatasetEntry>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a dataset file.
///
/// # Errors
///
/// Returns `DatasetError::NotFound` if the file is missing, `DatasetError::Io`
/// for other read failures, and `DatasetError::Json` for malformed content.
pub fn load_dataset(path: &Path) -> Result<Vec<DatasetEntry>, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_dataset(&text)
}
