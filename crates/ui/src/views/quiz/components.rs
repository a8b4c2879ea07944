use dioxus::prelude::*;

use crate::vm::{OptionVm, QuestionVm};

use super::effects::AnswerOverlay;

#[component]
pub fn QuestionCard(question: QuestionVm) -> Element {
    rsx! {
        section { class: "question",
            if let Some(src) = question.image_url.clone() {
                img { class: "destination-image", src: "{src}", alt: "{question.image_alt}" }
            }
            ul { class: "clues",
                for clue in question.clues.iter() {
                    li { class: "clue", "{clue}" }
                }
            }
        }
    }
}

#[component]
pub fn OptionColumn(side: &'static str, options: Vec<OptionVm>, on_choose: Callback<String>) -> Element {
    rsx! {
        div { class: "option-column {side}",
            for option in options {
                button {
                    key: "{option.city}",
                    class: option.class(),
                    disabled: option.disabled(),
                    onclick: {
                        let city = option.city.clone();
                        move |_| on_choose.call(city.clone())
                    },
                    "{option.city}"
                }
            }
        }
    }
}

#[component]
pub fn ScorePanel(score_line: String, tally_line: String) -> Element {
    rsx! {
        div { class: "score",
            p { class: "score-line", "{score_line}" }
            p { class: "tally-line", "{tally_line}" }
        }
    }
}

#[component]
pub fn AnswerOverlayView(overlay: Option<AnswerOverlay>) -> Element {
    match overlay {
        Some(AnswerOverlay::Celebration) => rsx! {
            div { class: "overlay celebration", aria_hidden: "true", "🎉" }
        },
        Some(AnswerOverlay::Cross) => rsx! {
            div { class: "overlay cross", aria_hidden: "true", "❌" }
        },
        None => rsx! {},
    }
}
