use std::sync::Arc;

use storage::repository::DestinationRepository;
use tracing::{info, warn};

use super::controller::QuizController;
use super::deck::QuizDeck;
use crate::Clock;
use crate::error::QuizError;
use globetrotter_core::quiz::OPTION_COUNT;

/// Loads the destination deck from storage and hands out quiz controllers.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    destinations: Arc<dyn DestinationRepository>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, destinations: Arc<dyn DestinationRepository>) -> Self {
        Self {
            clock,
            destinations,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Load every stored destination into a deck.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyDeck` if storage holds no destinations, or
    /// `QuizError::Storage` on read failures.
    pub async fn load_deck(&self) -> Result<QuizDeck, QuizError> {
        let destinations = self.destinations.list_destinations().await?;
        if destinations.len() < OPTION_COUNT {
            warn!(
                count = destinations.len(),
                needed = OPTION_COUNT,
                "too few destinations to offer a full set of options"
            );
        }
        let deck = QuizDeck::new(destinations)?;
        info!(destinations = deck.len(), "quiz deck loaded");
        Ok(deck)
    }

    /// Load the deck and start a controller over it.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`QuizLoopService::load_deck`].
    pub async fn start_quiz(&self) -> Result<QuizController, QuizError> {
        let deck = self.load_deck().await?;
        Ok(QuizController::new(deck, self.clock))
    }
}
