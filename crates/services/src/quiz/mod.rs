mod controller;
mod deck;
mod effects;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use controller::QuizController;
pub use deck::QuizDeck;
pub use effects::{AnswerEffects, NoEffects};
pub use workflow::QuizLoopService;
