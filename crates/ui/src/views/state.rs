use dioxus::prelude::*;
use services::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    EmptyDeck,
    NotEnoughDestinations,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::EmptyDeck => "No destinations yet. Run the import command to add some.",
            ViewError::NotEnoughDestinations => {
                "At least four destinations are needed to play."
            }
        }
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::EmptyDeck => ViewError::EmptyDeck,
            QuizError::Options(_) => ViewError::NotEnoughDestinations,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
