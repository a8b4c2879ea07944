use dioxus::prelude::*;

use crate::context::AppContext;

#[cfg(test)]
use crate::views::test_harness::QuizTestHandles;

/// "Challenge a friend": validates the username and opens the share link.
#[component]
pub fn ChallengePanel(score: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let mut username = use_signal(String::new);
    let mut message = use_signal(|| None::<String>);

    let on_username = use_callback(move |value: String| username.set(value));

    let on_challenge = use_callback(move |()| {
        match ctx.share().share_link(&username.read(), score) {
            Ok(url) => {
                message.set(None);
                ctx.link_opener().open_url(url.as_str());
            }
            Err(err) => message.set(Some(err.to_string())),
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<QuizTestHandles>() {
            handles.register_challenge(on_username, on_challenge);
        }
    }

    rsx! {
        section { class: "challenge",
            h3 { "Challenge a Friend" }
            input {
                id: "challenge-username",
                r#type: "text",
                placeholder: "Enter your username",
                value: "{username}",
                oninput: move |evt| on_username.call(evt.value()),
            }
            button {
                id: "challenge-button",
                onclick: move |_| on_challenge.call(()),
                "Challenge a Friend"
            }
            if let Some(text) = message() {
                p { class: "challenge-error", "{text}" }
            }
        }
    }
}
