mod components;
mod effects;
mod view;

pub use effects::AnswerOverlay;
pub use view::{QuizBoard, QuizView};
