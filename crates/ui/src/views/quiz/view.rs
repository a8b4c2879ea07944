use dioxus::prelude::*;
use services::QuizDeck;

use crate::context::AppContext;
use crate::views::{ChallengePanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::QuizVm;

use super::components::{AnswerOverlayView, OptionColumn, QuestionCard, ScorePanel};
use super::effects::{OverlayEffects, OverlayState};

#[cfg(test)]
use crate::views::test_harness::QuizTestHandles;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        async move { quiz_loop.load_deck().await.map_err(ViewError::from) }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page quiz", id: "quiz-root",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading destinations..." }
                },
                ViewState::Ready(deck) => rsx! {
                    QuizBoard { deck }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
pub fn QuizBoard(deck: QuizDeck) -> Element {
    let ctx = use_context::<AppContext>();
    let overlay = use_signal(OverlayState::default);
    let mut vm = use_signal(|| {
        let controller = ctx
            .new_controller(deck.clone())
            .with_effects(Box::new(OverlayEffects::new(overlay)));
        QuizVm::new(controller)
    });
    let mut action_error = use_signal(|| None::<ViewError>);

    let on_choose = use_callback(move |city: String| {
        let result = match &mut *vm.write() {
            Ok(quiz) => quiz.choose(&city).map(|_| ()),
            Err(err) => Err(*err),
        };
        action_error.set(result.err());
    });

    let on_next = use_callback(move |()| {
        let result = match &mut *vm.write() {
            Ok(quiz) => quiz.next(),
            Err(err) => Err(*err),
        };
        action_error.set(result.err());
    });

    let board = match &*vm.read() {
        Ok(quiz) => quiz.board(),
        Err(err) => {
            return rsx! {
                p { class: "error", "{err.message()}" }
            };
        }
    };
    let next_disabled = board.next_disabled;

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<QuizTestHandles>() {
            handles.register_board(on_choose, on_next, board.clone());
        }
    }

    rsx! {
        div { class: "quiz-board",
            AnswerOverlayView { overlay: overlay().shown() }

            if let Some(progress) = board.progress.clone() {
                p { class: "progress", "{progress}" }
            }
            if let Some(question) = board.question.clone() {
                QuestionCard { question }
            }
            if let Some(text) = board.game_over.clone() {
                p { class: "game-over", "{text}" }
            }

            div { class: "options",
                OptionColumn { side: "left", options: board.left.clone(), on_choose }
                OptionColumn { side: "right", options: board.right.clone(), on_choose }
            }

            if let Some(feedback) = board.feedback.clone() {
                p {
                    class: if feedback.is_correct { "feedback correct" } else { "feedback wrong" },
                    "{feedback.text}"
                }
            }
            if let Some(err) = action_error() {
                p { class: "error", "{err.message()}" }
            }

            ScorePanel {
                score_line: board.score_line.clone(),
                tally_line: board.tally_line.clone(),
            }

            button {
                id: "quiz-next",
                class: "next",
                disabled: next_disabled,
                onclick: move |_| on_next.call(()),
                "{board.next_label}"
            }

            ChallengePanel { score: board.score.score }
        }
    }
}
