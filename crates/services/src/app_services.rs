use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::import_service::DatasetImportService;
use crate::quiz::QuizLoopService;
use crate::share_service::ShareService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    quiz_loop: Arc<QuizLoopService>,
    share: Arc<ShareService>,
    import: Arc<DatasetImportService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or
    /// `play_url` is not a valid URL.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        play_url: &str,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock, play_url)
    }

    /// Build services over an already-initialized storage aggregate.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Share` if `play_url` is not a valid URL.
    pub fn from_storage(
        storage: &Storage,
        clock: Clock,
        play_url: &str,
    ) -> Result<Self, AppServicesError> {
        let quiz_loop = Arc::new(QuizLoopService::new(
            clock,
            Arc::clone(&storage.destinations),
        ));
        let share = Arc::new(ShareService::new(play_url)?);
        let import = Arc::new(DatasetImportService::new(Arc::clone(
            &storage.destinations,
        )));

        Ok(Self {
            quiz_loop,
            share,
            import,
        })
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn share(&self) -> Arc<ShareService> {
        Arc::clone(&self.share)
    }

    #[must_use]
    pub fn import(&self) -> Arc<DatasetImportService> {
        Arc::clone(&self.import)
    }
}
