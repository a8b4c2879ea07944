use dioxus::prelude::*;
use globetrotter_core::model::Theme;

use crate::views::{QuizView, ThemeToggle};

#[component]
pub fn App() -> Element {
    let mut theme = use_signal(Theme::default);
    let on_toggle = use_callback(move |()| {
        let next = theme().toggled();
        theme.set(next);
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Globetrotter" }

        div { class: "app-root {theme().css_class()}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                header { class: "app-header",
                    h1 { "Globetrotter" }
                    ThemeToggle { theme: theme(), on_toggle }
                }
                main { class: "content",
                    QuizView {}
                }
            }
        }
    }
}
