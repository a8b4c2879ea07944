use std::time::Duration;

use dioxus::prelude::*;
use services::AnswerEffects;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOverlay {
    Celebration,
    Cross,
}

impl AnswerOverlay {
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            AnswerOverlay::Celebration => Duration::from_secs(3),
            AnswerOverlay::Cross => Duration::from_secs(2),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct OverlayState {
    seq: u64,
    shown: Option<AnswerOverlay>,
}

impl OverlayState {
    pub(super) fn shown(self) -> Option<AnswerOverlay> {
        self.shown
    }

    fn show(self, overlay: AnswerOverlay) -> Self {
        Self {
            seq: self.seq + 1,
            shown: Some(overlay),
        }
    }

    /// Hide the overlay shown as `seq`. A newer overlay stays up.
    fn hide(self, seq: u64) -> Self {
        if self.seq == seq {
            Self { seq, shown: None }
        } else {
            self
        }
    }
}

/// Shows the celebration or cross overlay and hides it again after a delay.
pub(super) struct OverlayEffects {
    state: Signal<OverlayState>,
}

impl OverlayEffects {
    pub(super) fn new(state: Signal<OverlayState>) -> Self {
        Self { state }
    }
}

impl AnswerEffects for OverlayEffects {
    fn play(&self, is_correct: bool) {
        let mut state = self.state;
        let overlay = if is_correct {
            AnswerOverlay::Celebration
        } else {
            AnswerOverlay::Cross
        };
        let shown = state.peek().show(overlay);
        state.set(shown);

        spawn(async move {
            tokio::time::sleep(overlay.duration()).await;
            let current = *state.peek();
            let hidden = current.hide(shown.seq);
            if hidden != current {
                state.set(hidden);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_shows_for_two_seconds_and_celebration_for_three() {
        assert_eq!(AnswerOverlay::Cross.duration(), Duration::from_secs(2));
        assert_eq!(AnswerOverlay::Celebration.duration(), Duration::from_secs(3));
    }

    #[test]
    fn hide_clears_the_matching_overlay() {
        let shown = OverlayState::default().show(AnswerOverlay::Cross);
        assert_eq!(shown.shown(), Some(AnswerOverlay::Cross));
        assert_eq!(shown.hide(shown.seq).shown(), None);
    }

    #[test]
    fn stale_hide_leaves_newer_overlay_showing() {
        let first = OverlayState::default().show(AnswerOverlay::Celebration);
        let second = first.show(AnswerOverlay::Cross);

        let after_stale = second.hide(first.seq);
        assert_eq!(after_stale, second);
        assert_eq!(after_stale.shown(), Some(AnswerOverlay::Cross));

        assert_eq!(after_stale.hide(second.seq).shown(), None);
    }
}
