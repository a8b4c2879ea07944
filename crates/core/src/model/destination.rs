use thiserror::Error;
use url::Url;

use crate::model::ids::DestinationId;

/// Minimum number of clues a destination must carry.
pub const MIN_CLUES: usize = 2;

/// Number of clues shown for a question.
pub const VISIBLE_CLUES: usize = 2;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DestinationError {
    #[error("city cannot be empty")]
    EmptyCity,

    #[error("destination needs at least {MIN_CLUES} clues, got {len}")]
    TooFewClues { len: usize },

    #[error("clue {index} is empty")]
    EmptyClue { index: usize },

    #[error("invalid image URL: {raw}")]
    InvalidImageUrl { raw: String },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated destination data, as it arrives from a dataset or a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationDraft {
    pub city: String,
    pub country: Option<String>,
    pub clues: Vec<String>,
    pub fun_fact: String,
    pub trivia: Vec<String>,
    pub image_url: Option<String>,
}

impl DestinationDraft {
    #[must_use]
    pub fn new(city: impl Into<String>, clues: Vec<String>) -> Self {
        Self {
            city: city.into(),
            clues,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fun_fact(mut self, fun_fact: impl Into<String>) -> Self {
        self.fun_fact = fun_fact.into();
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_trivia(mut self, trivia: Vec<String>) -> Self {
        self.trivia = trivia;
        self
    }

    /// Validate the draft and normalize whitespace.
    ///
    /// Empty `country` and `image_url` values collapse to `None`.
    ///
    /// # Errors
    ///
    /// Returns `DestinationError` if the city is blank, fewer than
    /// `MIN_CLUES` clues are present, a clue is blank, or the image URL
    /// does not parse.
    pub fn validate(self) -> Result<ValidatedDestination, DestinationError> {
        let city = self.city.trim().to_owned();
        if city.is_empty() {
            return Err(DestinationError::EmptyCity);
        }

        if self.clues.len() < MIN_CLUES {
            return Err(DestinationError::TooFewClues {
                len: self.clues.len(),
            });
        }
        let mut clues = Vec::with_capacity(self.clues.len());
        for (index, clue) in self.clues.into_iter().enumerate() {
            let clue = clue.trim().to_owned();
            if clue.is_empty() {
                return Err(DestinationError::EmptyClue { index });
            }
            clues.push(clue);
        }

        let image = match normalize_optional(self.image_url) {
            Some(raw) => Some(
                Url::parse(&raw).map_err(|_| DestinationError::InvalidImageUrl { raw })?,
            ),
            None => None,
        };

        let trivia = self
            .trivia
            .into_iter()
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(ValidatedDestination {
            city,
            country: normalize_optional(self.country),
            clues,
            fun_fact: self.fun_fact.trim().to_owned(),
            trivia,
            image,
        })
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// A validated destination that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDestination {
    pub city: String,
    pub country: Option<String>,
    pub clues: Vec<String>,
    pub fun_fact: String,
    pub trivia: Vec<String>,
    pub image: Option<Url>,
}

impl ValidatedDestination {
    #[must_use]
    pub fn assign_id(self, id: DestinationId) -> Destination {
        Destination {
            id,
            city: self.city,
            country: self.country,
            clues: self.clues,
            fun_fact: self.fun_fact,
            trivia: self.trivia,
            image: self.image,
        }
    }
}

//
// ─── DESTINATION ───────────────────────────────────────────────────────────────
//

/// A quiz item: the city to guess, its clues, and the fact revealed after answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    id: DestinationId,
    city: String,
    country: Option<String>,
    clues: Vec<String>,
    fun_fact: String,
    trivia: Vec<String>,
    image: Option<Url>,
}

impl Destination {
    /// Rehydrate a destination from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `DestinationError` if the stored data no longer validates.
    pub fn from_persisted(
        id: DestinationId,
        draft: DestinationDraft,
    ) -> Result<Self, DestinationError> {
        Ok(draft.validate()?.assign_id(id))
    }

    #[must_use]
    pub fn id(&self) -> DestinationId {
        self.id
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    #[must_use]
    pub fn clues(&self) -> &[String] {
        &self.clues
    }

    /// The clues shown to the player (the first `VISIBLE_CLUES`).
    #[must_use]
    pub fn visible_clues(&self) -> &[String] {
        &self.clues[..self.clues.len().min(VISIBLE_CLUES)]
    }

    #[must_use]
    pub fn fun_fact(&self) -> &str {
        &self.fun_fact
    }

    #[must_use]
    pub fn trivia(&self) -> &[String] {
        &self.trivia
    }

    #[must_use]
    pub fn image(&self) -> Option<&Url> {
        self.image.as_ref()
    }

    /// Case-sensitive comparison against the stored city name.
    #[must_use]
    pub fn is_city(&self, city: &str) -> bool {
        self.city == city
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.city)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
