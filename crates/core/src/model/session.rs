use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

use crate::model::Destination;
use crate::quiz::shuffle;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("current question was already answered")]
    AlreadyAnswered,

    #[error("current question has not been answered yet")]
    NotAnswered,

    #[error("session is finished; start a new one to keep playing")]
    Finished,
}

/// Where a session stands in the question loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingAnswer,
    Answered,
    Finished,
}

/// Feedback for a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub selected: String,
    pub correct_city: String,
    pub fun_fact: String,
}

/// Snapshot of the running score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: u32,
    pub correct: u32,
    pub wrong: u32,
}

impl ScoreCard {
    #[must_use]
    pub fn answered(&self) -> u32 {
        self.correct + self.wrong
    }
}

/// What the player should be looking at right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentQuestion<'a> {
    Active(&'a Destination),
    GameOver(ScoreCard),
}

/// One playthrough: a shuffled question order, the position in it, and the score.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    order: Vec<Destination>,
    index: usize,
    score: ScoreCard,
    phase: SessionPhase,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Start a session over a random permutation of `destinations`.
    ///
    /// An empty list yields a session that is already finished.
    pub fn start<R: Rng + ?Sized>(
        destinations: &[Destination],
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Self {
        let mut order = destinations.to_vec();
        shuffle(&mut order, rng);
        let (phase, finished_at) = if order.is_empty() {
            (SessionPhase::Finished, Some(started_at))
        } else {
            (SessionPhase::AwaitingAnswer, None)
        };

        Self {
            order,
            index: 0,
            score: ScoreCard::default(),
            phase,
            started_at,
            finished_at,
        }
    }

    #[must_use]
    pub fn order(&self) -> &[Destination] {
        &self.order
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> ScoreCard {
        self.score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    #[must_use]
    pub fn current_question(&self) -> CurrentQuestion<'_> {
        match self.order.get(self.index) {
            Some(dest) if !self.is_finished() => CurrentQuestion::Active(dest),
            _ => CurrentQuestion::GameOver(self.score),
        }
    }

    /// Check `selected` against the current question and update the score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyAnswered` if this question has an answer,
    /// or `SessionError::Finished` once the session is over.
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerFeedback, SessionError> {
        match self.phase {
            SessionPhase::Answered => return Err(SessionError::AlreadyAnswered),
            SessionPhase::Finished => return Err(SessionError::Finished),
            SessionPhase::AwaitingAnswer => {}
        }
        let Some(question) = self.order.get(self.index) else {
            return Err(SessionError::Finished);
        };

        let is_correct = question.is_city(selected);
        if is_correct {
            self.score.score += 1;
            self.score.correct += 1;
        } else {
            self.score.wrong += 1;
        }
        self.phase = SessionPhase::Answered;

        Ok(AnswerFeedback {
            is_correct,
            selected: selected.to_owned(),
            correct_city: question.city().to_owned(),
            fun_fact: question.fun_fact().to_owned(),
        })
    }

    /// Move past an answered question.
    ///
    /// `at` is recorded as the finish time when the last question is passed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` while the current question is still
    /// open, or `SessionError::Finished` once the session is over.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<SessionPhase, SessionError> {
        match self.phase {
            SessionPhase::AwaitingAnswer => return Err(SessionError::NotAnswered),
            SessionPhase::Finished => return Err(SessionError::Finished),
            SessionPhase::Answered => {}
        }

        self.index += 1;
        if self.index >= self.order.len() {
            self.phase = SessionPhase::Finished;
            self.finished_at = Some(at);
        } else {
            self.phase = SessionPhase::AwaitingAnswer;
        }
        Ok(self.phase)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DestinationDraft, DestinationId};
    use crate::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn destinations(n: u64) -> Vec<Destination> {
        (1..=n)
            .map(|id| {
                DestinationDraft::new(format!("City {id}"), vec!["a".into(), "b".into()])
                    .with_fun_fact(format!("Fact {id}"))
                    .validate()
                    .unwrap()
                    .assign_id(DestinationId::new(id))
            })
            .collect()
    }

    fn active_city(session: &Session) -> String {
        match session.current_question() {
            CurrentQuestion::Active(dest) => dest.city().to_owned(),
            CurrentQuestion::GameOver(_) => panic!("expected an active question"),
        }
    }

    #[test]
    fn start_resets_counters() {
        let mut rng = StdRng::seed_from_u64(1);
        let session = Session::start(&destinations(3), &mut rng, fixed_now());
        assert_eq!(session.index(), 0);
        assert_eq!(session.score(), ScoreCard::default());
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn visits_every_destination_once() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = Session::start(&destinations(8), &mut rng, fixed_now());
            let mut seen = HashSet::new();
            while !session.is_finished() {
                let city = active_city(&session);
                assert!(seen.insert(city.clone()), "{city} visited twice");
                session.submit_answer(&city).unwrap();
                session.advance(fixed_now()).unwrap();
            }
            assert_eq!(seen.len(), 8);
        }
    }

    #[test]
    fn correct_answer_increments_score_and_correct() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = Session::start(&destinations(4), &mut rng, fixed_now());
        let city = active_city(&session);

        let feedback = session.submit_answer(&city).unwrap();
        assert!(feedback.is_correct);
        assert_eq!(feedback.correct_city, city);
        assert!(feedback.fun_fact.starts_with("Fact "));
        assert_eq!(
            session.score(),
            ScoreCard {
                score: 1,
                correct: 1,
                wrong: 0
            }
        );
    }

    #[test]
    fn wrong_answer_increments_wrong_only() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = Session::start(&destinations(4), &mut rng, fixed_now());

        let feedback = session.submit_answer("Atlantis").unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(feedback.selected, "Atlantis");
        assert_eq!(
            session.score(),
            ScoreCard {
                score: 0,
                correct: 0,
                wrong: 1
            }
        );
    }

    #[test]
    fn second_answer_is_rejected_without_changing_score() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = Session::start(&destinations(4), &mut rng, fixed_now());
        let city = active_city(&session);
        session.submit_answer(&city).unwrap();

        let err = session.submit_answer(&city).unwrap_err();
        assert_eq!(err, SessionError::AlreadyAnswered);
        assert_eq!(session.score().correct, 1);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = Session::start(&destinations(4), &mut rng, fixed_now());
        assert_eq!(session.advance(fixed_now()), Err(SessionError::NotAnswered));
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn counts_track_index_while_playing() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = Session::start(&destinations(5), &mut rng, fixed_now());
        while !session.is_finished() {
            assert_eq!(session.score().answered() as usize, session.index());
            session.submit_answer("nowhere").unwrap();
            assert_eq!(session.score().answered() as usize, session.index() + 1);
            session.advance(fixed_now()).unwrap();
        }
        assert_eq!(session.score().answered() as usize, session.len());
    }

    #[test]
    fn three_right_two_wrong() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = Session::start(&destinations(5), &mut rng, fixed_now());
        let plan = [true, false, true, false, true];
        for answer_right in plan {
            let city = active_city(&session);
            let pick = if answer_right { city } else { "Atlantis".to_owned() };
            session.submit_answer(&pick).unwrap();
            session.advance(fixed_now()).unwrap();
        }

        assert!(session.is_finished());
        assert_eq!(
            session.current_question(),
            CurrentQuestion::GameOver(ScoreCard {
                score: 3,
                correct: 3,
                wrong: 2
            })
        );
        assert_eq!(session.finished_at(), Some(fixed_now()));
    }

    #[test]
    fn finished_session_rejects_further_play() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = Session::start(&destinations(1), &mut rng, fixed_now());
        session.submit_answer("City 1").unwrap();
        assert_eq!(session.advance(fixed_now()), Ok(SessionPhase::Finished));

        assert_eq!(session.advance(fixed_now()), Err(SessionError::Finished));
        assert_eq!(session.submit_answer("City 1"), Err(SessionError::Finished));
    }

    #[test]
    fn empty_pool_starts_finished() {
        let mut rng = StdRng::seed_from_u64(8);
        let session = Session::start(&[], &mut rng, fixed_now());
        assert!(session.is_finished());
        assert!(matches!(
            session.current_question(),
            CurrentQuestion::GameOver(_)
        ));
    }
}
