use std::sync::Arc;

use globetrotter_core::model::Destination;

use crate::error::QuizError;

/// The validated, non-empty set of destinations a quiz plays from.
///
/// Cheap to clone; every controller built from the same deck shares it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDeck {
    destinations: Arc<[Destination]>,
}

impl QuizDeck {
    /// # Errors
    ///
    /// Returns `QuizError::EmptyDeck` when `destinations` is empty.
    pub fn new(destinations: Vec<Destination>) -> Result<Self, QuizError> {
        if destinations.is_empty() {
            return Err(QuizError::EmptyDeck);
        }
        Ok(Self {
            destinations: destinations.into(),
        })
    }

    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
