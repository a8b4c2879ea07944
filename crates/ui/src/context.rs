use std::sync::Arc;

use services::{QuizController, QuizDeck, QuizLoopService, ShareService};

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
    fn share(&self) -> Arc<ShareService>;
    fn link_opener(&self) -> LinkOpenerRef;

    /// Fixed seed for the quiz shuffle; `None` seeds from the OS.
    fn quiz_seed(&self) -> Option<u64> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: Arc<QuizLoopService>,
    share: Arc<ShareService>,
    link_opener: LinkOpenerRef,
    quiz_seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loop: app.quiz_loop(),
            share: app.share(),
            link_opener: app.link_opener(),
            quiz_seed: app.quiz_seed(),
        }
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
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }

    /// Start a controller over `deck` using the app clock and seed.
    #[must_use]
    pub fn new_controller(&self, deck: QuizDeck) -> QuizController {
        let clock = self.quiz_loop.clock();
        match self.quiz_seed {
            Some(seed) => QuizController::with_seed(deck, clock, seed),
            None => QuizController::new(deck, clock),
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
