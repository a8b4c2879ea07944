//! Randomized question ordering and multiple-choice option drawing.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::model::Destination;

/// Number of options offered per question.
pub const OPTION_COUNT: usize = 4;

/// Number of wrong cities drawn for each question.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionsError {
    #[error("need at least 3 other distinct cities to build options, found {available}")]
    InsufficientDistractors { available: usize },
}

/// In-place Fisher-Yates shuffle.
///
/// Walks from the last index down to 1 and swaps each element with one drawn
/// uniformly from `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// The four cities offered for a question, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOptions {
    cities: [String; OPTION_COUNT],
}

impl AnswerOptions {
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// First display column.
    #[must_use]
    pub fn left(&self) -> &[String] {
        &self.cities[..OPTION_COUNT / 2]
    }

    /// Second display column.
    #[must_use]
    pub fn right(&self) -> &[String] {
        &self.cities[OPTION_COUNT / 2..]
    }

    #[must_use]
    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }
}

/// Draw the options for `question` from the cities in `pool`.
///
/// The correct city is combined with `DISTRACTOR_COUNT` distinct other cities
/// chosen uniformly without replacement, and the result is shuffled. Every call
/// reshuffles, so repeated calls may return different distractors.
///
/// # Errors
///
/// Returns `OptionsError::InsufficientDistractors` when the pool holds fewer
/// than `DISTRACTOR_COUNT` distinct cities besides the correct one.
pub fn options_for<R: Rng + ?Sized>(
    question: &Destination,
    pool: &[Destination],
    rng: &mut R,
) -> Result<AnswerOptions, OptionsError> {
    let mut seen = HashSet::new();
    let mut others: Vec<&str> = pool
        .iter()
        .map(Destination::city)
        .filter(|city| !question.is_city(city))
        .filter(|city| seen.insert(*city))
        .collect();

    if others.len() < DISTRACTOR_COUNT {
        return Err(OptionsError::InsufficientDistractors {
            available: others.len(),
        });
    }

    shuffle(&mut others, rng);

    let mut cities: [String; OPTION_COUNT] = Default::default();
    cities[0] = question.city().to_owned();
    for (slot, city) in cities[1..].iter_mut().zip(others) {
        *slot = city.to_owned();
    }
    shuffle(&mut cities, rng);

    Ok(AnswerOptions { cities })
}
