use async_trait::async_trait;
use globetrotter_core::model::{Destination, DestinationDraft, DestinationError, DestinationId};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    InvalidDestination(#[from] DestinationError),
}

/// Result of a get-or-create insert keyed by city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Created(DestinationId),
    Skipped(DestinationId),
}

impl ImportOutcome {
    #[must_use]
    pub fn id(self) -> DestinationId {
        match self {
            ImportOutcome::Created(id) | ImportOutcome::Skipped(id) => id,
        }
    }

    #[must_use]
    pub fn is_created(self) -> bool {
        matches!(self, ImportOutcome::Created(_))
    }
}

/// Repository contract for destinations.
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Insert the destination unless one with the same city already exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidDestination` if the draft fails validation,
    /// or other storage errors.
    async fn insert_if_absent(&self, draft: DestinationDraft)
    -> Result<ImportOutcome, StorageError>;

    /// List every destination ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if rows cannot be read or decoded.
    async fn list_destinations(&self) -> Result<Vec<Destination>, StorageError>;

    /// Fetch a destination by its exact city name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read failures.
    async fn get_by_city(&self, city: &str) -> Result<Option<Destination>, StorageError>;

    /// Number of stored destinations.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read failures.
    async fn count(&self) -> Result<u64, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    destinations: Arc<Mutex<BTreeMap<DestinationId, Destination>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DestinationRepository for InMemoryRepository {
    async fn insert_if_absent(
        &self,
        draft: DestinationDraft,
    ) -> Result<ImportOutcome, StorageError> {
        let validated = draft.validate()?;
        let mut guard = self
            .destinations
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if let Some(existing) = guard.values().find(|d| d.is_city(&validated.city)) {
            return Ok(ImportOutcome::Skipped(existing.id()));
        }

        let next = guard.keys().next_back().map_or(1, |id| id.value() + 1);
        let id = DestinationId::new(next);
        guard.insert(id, validated.assign_id(id));
        Ok(ImportOutcome::Created(id))
    }

    async fn list_destinations(&self) -> Result<Vec<Destination>, StorageError> {
        let guard = self
            .destinations
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }

    async fn get_by_city(&self, city: &str) -> Result<Option<Destination>, StorageError> {
        let guard = self
            .destinations
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().find(|d| d.is_city(city)).cloned())
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let guard = self
            .destinations
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.len() as u64)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub destinations: Arc<dyn DestinationRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            destinations: Arc::new(InMemoryRepository::new()),
        }
    }
}
