//! Shared error types for the services crate.

use thiserror::Error;

use globetrotter_core::model::{SessionError, ShareError};
use globetrotter_core::quiz::OptionsError;
use storage::dataset::DatasetError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the quiz controller and loader.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no destinations available to play")]
    EmptyDeck,
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `DatasetImportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Share(#[from] ShareError),
}
