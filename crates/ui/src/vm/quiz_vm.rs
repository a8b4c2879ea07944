use globetrotter_core::model::{AnswerFeedback, CurrentQuestion, ScoreCard};
use globetrotter_core::quiz::AnswerOptions;
use services::QuizController;

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Open,
    Correct,
    Wrong,
    Locked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub city: String,
    pub state: OptionState,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.state {
            OptionState::Open | OptionState::Locked => "option",
            OptionState::Correct => "option correct",
            OptionState::Wrong => "option wrong",
        }
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.state != OptionState::Open
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub clues: Vec<String>,
    pub image_url: Option<String>,
    pub image_alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub text: String,
}

/// Everything the quiz board renders, detached from the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardVm {
    pub progress: Option<String>,
    pub question: Option<QuestionVm>,
    pub left: Vec<OptionVm>,
    pub right: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub score: ScoreCard,
    pub score_line: String,
    pub tally_line: String,
    pub game_over: Option<String>,
    pub next_label: &'static str,
    pub next_disabled: bool,
}

/// UI wrapper around a `QuizController`.
///
/// Options are drawn once per question and kept until the player moves on, so
/// re-rendering never reshuffles the buttons.
pub struct QuizVm {
    controller: QuizController,
    options: Option<AnswerOptions>,
    feedback: Option<AnswerFeedback>,
}

impl QuizVm {
    /// # Errors
    ///
    /// Returns `ViewError::NotEnoughDestinations` when options cannot be drawn.
    pub fn new(mut controller: QuizController) -> Result<Self, ViewError> {
        let options = controller.current_options()?;
        Ok(Self {
            controller,
            options,
            feedback: None,
        })
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }

    /// Submit the chosen city. Returns whether it was correct.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the question was already answered.
    pub fn choose(&mut self, city: &str) -> Result<bool, ViewError> {
        let feedback = self.controller.submit_answer(city)?;
        let is_correct = feedback.is_correct;
        self.feedback = Some(feedback);
        Ok(is_correct)
    }

    /// Move to the next question, or start a new game from the game-over screen.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the question is unanswered.
    pub fn next(&mut self) -> Result<(), ViewError> {
        self.controller.advance()?;
        self.feedback = None;
        self.options = self.controller.current_options()?;
        Ok(())
    }

    #[must_use]
    pub fn board(&self) -> BoardVm {
        let score = self.controller.score();
        let session = self.controller.session();

        let (progress, question, game_over) = match self.controller.current_question() {
            CurrentQuestion::Active(destination) => (
                Some(format!(
                    "Question {} of {}",
                    session.index() + 1,
                    session.len()
                )),
                Some(QuestionVm {
                    clues: destination.visible_clues().to_vec(),
                    image_url: destination.image().map(|url| url.to_string()),
                    image_alt: format!("Image of {}", destination.city()),
                }),
                None,
            ),
            CurrentQuestion::GameOver(final_score) => (
                None,
                None,
                Some(format!(
                    "Game over! Your final score is {} (Correct: {} | Wrong: {}).",
                    final_score.score, final_score.correct, final_score.wrong
                )),
            ),
        };

        let (left, right) = self.options.as_ref().map_or_else(
            || (Vec::new(), Vec::new()),
            |options| {
                (
                    self.option_vms(options.left()),
                    self.option_vms(options.right()),
                )
            },
        );

        let feedback = self.feedback.as_ref().map(|feedback| FeedbackVm {
            is_correct: feedback.is_correct,
            text: if feedback.is_correct {
                format!("🎉 Correct! Fun Fact: {}", feedback.fun_fact)
            } else {
                format!("😢 Incorrect! Fun Fact: {}", feedback.fun_fact)
            },
        });

        let finished = game_over.is_some();
        BoardVm {
            progress,
            question,
            left,
            right,
            feedback,
            score,
            score_line: format!("Score: {}", score.score),
            tally_line: format!("Correct: {} | Wrong: {}", score.correct, score.wrong),
            game_over,
            next_label: if finished { "Play Again" } else { "Next" },
            next_disabled: !finished && !self.is_answered(),
        }
    }

    fn option_vms(&self, cities: &[String]) -> Vec<OptionVm> {
        cities
            .iter()
            .map(|city| OptionVm {
                city: city.clone(),
                state: self.option_state(city),
            })
            .collect()
    }

    fn option_state(&self, city: &str) -> OptionState {
        let Some(feedback) = self.feedback.as_ref() else {
            return OptionState::Open;
        };
        if city == feedback.correct_city {
            OptionState::Correct
        } else if city == feedback.selected {
            OptionState::Wrong
        } else {
            OptionState::Locked
        }
    }
}
