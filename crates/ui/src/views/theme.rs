use dioxus::prelude::*;
use globetrotter_core::model::Theme;

#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: Callback<()>) -> Element {
    rsx! {
        button {
            id: "theme-toggle",
            class: "theme-toggle",
            onclick: move |_| on_toggle.call(()),
            "{theme.toggle_label()}"
        }
    }
}
