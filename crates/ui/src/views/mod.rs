mod challenge;
mod quiz;
mod state;
mod theme;

pub use challenge::ChallengePanel;
pub use quiz::{AnswerOverlay, QuizBoard, QuizView};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use theme::ThemeToggle;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
