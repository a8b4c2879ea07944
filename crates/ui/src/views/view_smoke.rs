use dioxus::prelude::*;
use globetrotter_core::model::Theme;
use storage::repository::DestinationRepository;

use super::ThemeToggle;
use super::test_harness::setup_view_harness;

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(&["Paris", "Tokyo", "Cairo", "Lima", "Oslo"]).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Question 1 of 5"), "missing progress in {html}");
    assert!(html.contains("first clue"), "missing clue in {html}");
    assert!(html.contains("second clue"), "missing clue in {html}");
    assert!(!html.contains("third clue"), "extra clue in {html}");
    assert_eq!(html.matches("class=\"option\"").count(), 4, "options in {html}");
    assert!(html.contains("option-column left"), "missing left column in {html}");
    assert!(html.contains("option-column right"), "missing right column in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Correct: 0 | Wrong: 0"), "missing tally in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
    assert!(html.contains("Challenge a Friend"), "missing challenge in {html}");
    assert!(!html.contains("Fun Fact"), "feedback before answer in {html}");
    assert!(harness.opener.opened().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(&[]).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No destinations yet"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_small_deck() {
    let mut harness = setup_view_harness(&["Paris", "Tokyo", "Cairo"]).await;
    assert_eq!(harness.storage.destinations.count().await.unwrap(), 3);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("At least four destinations are needed to play."),
        "missing configuration error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn answering_shows_celebration_then_cross_overlay() {
    let mut harness = setup_view_harness(&["Paris", "Tokyo", "Cairo", "Lima", "Oslo"]).await;
    harness.settle().await;

    let answer = harness.handles.answer();
    harness.handles.choose().call(answer.clone());
    harness.flush();
    let html = harness.render();
    assert!(html.contains("overlay celebration"), "missing celebration in {html}");
    let feedback = format!("🎉 Correct! Fun Fact: {answer} fun fact");
    assert!(html.contains(&feedback), "missing {feedback} in {html}");
    assert!(html.contains("option correct"), "missing correct option in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");

    harness.handles.next().call(());
    harness.flush();
    let board = harness.handles.board();
    let answer = harness.handles.answer();
    let wrong = board
        .left
        .iter()
        .chain(&board.right)
        .find(|option| option.city != answer)
        .map(|option| option.city.clone())
        .expect("a distractor");

    harness.handles.choose().call(wrong);
    harness.flush();
    let html = harness.render();
    assert!(html.contains("overlay cross"), "missing cross in {html}");
    assert!(!html.contains("overlay celebration"), "stale celebration in {html}");
    assert!(html.contains("option wrong"), "missing wrong option in {html}");
    assert!(html.contains("😢 Incorrect! Fun Fact:"), "missing feedback in {html}");
    assert!(html.contains("Correct: 1 | Wrong: 1"), "missing tally in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn challenge_panel_requires_name_then_opens_whatsapp() {
    let mut harness = setup_view_harness(&["Paris", "Tokyo", "Cairo", "Lima"]).await;
    harness.settle().await;

    harness.handles.challenge().call(());
    harness.flush();
    let html = harness.render();
    assert!(
        html.contains("Please enter a unique username to challenge a friend."),
        "missing validation message in {html}"
    );
    assert!(harness.opener.opened().is_empty());

    harness.handles.username().call("  ana  ".to_owned());
    harness.handles.challenge().call(());
    harness.flush();

    let opened = harness.opener.opened();
    assert_eq!(opened.len(), 1);
    assert!(
        opened[0].starts_with("https://api.whatsapp.com/send?text="),
        "unexpected link {}",
        opened[0]
    );
    assert!(opened[0].contains("ana"), "missing name in {}", opened[0]);
    let html = harness.render();
    assert!(
        !html.contains("Please enter a unique username"),
        "stale validation message in {html}"
    );
}

#[component]
fn DarkToggle() -> Element {
    let on_toggle = use_callback(|()| {});
    rsx! { ThemeToggle { theme: Theme::Dark, on_toggle } }
}

#[test]
fn theme_toggle_smoke_offers_the_other_mode() {
    let mut dom = VirtualDom::new(DarkToggle);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Light mode"), "missing label in {html}");
}
