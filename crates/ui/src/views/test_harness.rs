use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use globetrotter_core::model::DestinationDraft;
use globetrotter_core::time::fixed_now;
use services::{Clock, QuizLoopService, ShareService};
use storage::repository::{DestinationRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::QuizView;
use crate::vm::BoardVm;

/// Callbacks and the latest board registered by the quiz views while rendering.
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    choose: Rc<RefCell<Option<Callback<String>>>>,
    next: Rc<RefCell<Option<Callback<()>>>>,
    board: Rc<RefCell<Option<BoardVm>>>,
    username: Rc<RefCell<Option<Callback<String>>>>,
    challenge: Rc<RefCell<Option<Callback<()>>>>,
}

impl QuizTestHandles {
    pub(crate) fn register_board(
        &self,
        choose: Callback<String>,
        next: Callback<()>,
        board: BoardVm,
    ) {
        *self.choose.borrow_mut() = Some(choose);
        *self.next.borrow_mut() = Some(next);
        *self.board.borrow_mut() = Some(board);
    }

    pub(crate) fn register_challenge(&self, username: Callback<String>, challenge: Callback<()>) {
        *self.username.borrow_mut() = Some(username);
        *self.challenge.borrow_mut() = Some(challenge);
    }

    pub(crate) fn choose(&self) -> Callback<String> {
        (*self.choose.borrow()).expect("choose registered")
    }

    pub(crate) fn next(&self) -> Callback<()> {
        (*self.next.borrow()).expect("next registered")
    }

    pub(crate) fn board(&self) -> BoardVm {
        self.board.borrow().clone().expect("board registered")
    }

    /// City of the current question, read from the image alt text.
    pub(crate) fn answer(&self) -> String {
        let question = self.board().question.expect("active question");
        question
            .image_alt
            .trim_start_matches("Image of ")
            .to_owned()
    }

    pub(crate) fn username(&self) -> Callback<String> {
        (*self.username.borrow()).expect("username registered")
    }

    pub(crate) fn challenge(&self) -> Callback<()> {
        (*self.challenge.borrow()).expect("challenge registered")
    }
}

#[derive(Default)]
pub struct RecordingLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingLinkOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl UiLinkOpener for RecordingLinkOpener {
    fn open_url(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_owned());
    }
}

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    share: Arc<ShareService>,
    opener: Arc<RecordingLinkOpener>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn share(&self) -> Arc<ShareService> {
        Arc::clone(&self.share)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        self.opener.clone()
    }

    fn quiz_seed(&self) -> Option<u64> {
        Some(3)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let handles = props.handles.clone();
    use_context_provider(|| handles);
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub opener: Arc<RecordingLinkOpener>,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let the deck resource settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }

    /// Apply signal writes made by a callback and re-render.
    pub fn flush(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(cities: &[&str]) -> ViewHarness {
    let storage = Storage::in_memory();
    for city in cities {
        let draft = DestinationDraft::new(
            *city,
            vec![
                format!("{city} first clue"),
                format!("{city} second clue"),
                format!("{city} third clue"),
            ],
        )
        .with_fun_fact(format!("{city} fun fact"))
        .with_image_url(format!("https://img.example/{}.jpg", city.to_lowercase()));
        storage
            .destinations
            .insert_if_absent(draft)
            .await
            .expect("seed destination");
    }

    let clock = Clock::fixed(fixed_now());
    let quiz_loop = Arc::new(QuizLoopService::new(
        clock,
        Arc::clone(&storage.destinations),
    ));
    let share = Arc::new(ShareService::new("https://globetrotter.example/").expect("play url"));
    let opener = Arc::new(RecordingLinkOpener::default());

    let app = Arc::new(TestApp {
        quiz_loop,
        share,
        opener: Arc::clone(&opener),
    });
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        opener,
        handles,
    }
}
