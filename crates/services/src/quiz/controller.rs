use std::fmt;

use globetrotter_core::Clock;
use globetrotter_core::model::{
    AnswerFeedback, CurrentQuestion, Destination, ScoreCard, Session, SessionPhase,
};
use globetrotter_core::quiz::{AnswerOptions, options_for};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::deck::QuizDeck;
use super::effects::{AnswerEffects, NoEffects};
use crate::error::QuizError;

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Drives one quiz: owns the deck, the current `Session`, and the random source.
///
/// A fresh session is started on construction. Answers go through
/// [`QuizController::submit_answer`] and [`QuizController::advance`]; once the
/// session is finished, `advance` starts the next game.
pub struct QuizController {
    deck: QuizDeck,
    session: Session,
    rng: StdRng,
    clock: Clock,
    effects: Box<dyn AnswerEffects>,
}

impl QuizController {
    /// Create a controller seeded from the thread-local generator.
    #[must_use]
    pub fn new(deck: QuizDeck, clock: Clock) -> Self {
        Self::with_rng(deck, clock, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a controller with a deterministic random source.
    #[must_use]
    pub fn with_seed(deck: QuizDeck, clock: Clock, seed: u64) -> Self {
        Self::with_rng(deck, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(deck: QuizDeck, clock: Clock, mut rng: StdRng) -> Self {
        let session = Session::start(deck.destinations(), &mut rng, clock.now());
        info!(questions = session.len(), "quiz session started");
        Self {
            deck,
            session,
            rng,
            clock,
            effects: Box::new(NoEffects),
        }
    }

    /// Attach the presentation layer's answer effects.
    #[must_use]
    pub fn with_effects(mut self, effects: Box<dyn AnswerEffects>) -> Self {
        self.effects = effects;
        self
    }

    /// Discard the current session and start a new shuffled one.
    pub fn start(&mut self) {
        self.session = Session::start(self.deck.destinations(), &mut self.rng, self.clock.now());
        info!(questions = self.session.len(), "quiz session restarted");
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn score(&self) -> ScoreCard {
        self.session.score()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn current_question(&self) -> CurrentQuestion<'_> {
        self.session.current_question()
    }

    /// Draw four options for `question` from the whole deck.
    ///
    /// Each call reshuffles, so distractors may differ between calls.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Options` when the deck has fewer than three other
    /// distinct cities.
    pub fn options_for(&mut self, question: &Destination) -> Result<AnswerOptions, QuizError> {
        Ok(options_for(question, self.deck.destinations(), &mut self.rng)?)
    }

    /// Options for the current question, or `None` at game over.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Options` for an undersized deck.
    pub fn current_options(&mut self) -> Result<Option<AnswerOptions>, QuizError> {
        let CurrentQuestion::Active(question) = self.session.current_question() else {
            return Ok(None);
        };
        let options = options_for(question, self.deck.destinations(), &mut self.rng)?;
        Ok(Some(options))
    }

    /// Check the selected city, update the score, and play the answer effects.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the question was already answered or the
    /// session is finished.
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerFeedback, QuizError> {
        let feedback = self.session.submit_answer(selected)?;
        debug!(
            selected = %feedback.selected,
            correct_city = %feedback.correct_city,
            is_correct = feedback.is_correct,
            "answer submitted"
        );
        self.effects.play(feedback.is_correct);
        Ok(feedback)
    }

    /// Move to the next question, or start a new game once finished.
    ///
    /// Skipping is not supported: the current question must be answered first.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the current question is unanswered.
    pub fn advance(&mut self) -> Result<SessionPhase, QuizError> {
        if self.session.is_finished() {
            self.start();
            return Ok(self.session.phase());
        }

        let phase = self.session.advance(self.clock.now())?;
        if phase == SessionPhase::Finished {
            let score = self.session.score();
            info!(
                score = score.score,
                correct = score.correct,
                wrong = score.wrong,
                "quiz session finished"
            );
        }
        Ok(phase)
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("deck_len", &self.deck.len())
            .field("index", &self.session.index())
            .field("phase", &self.session.phase())
            .field("score", &self.session.score())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
