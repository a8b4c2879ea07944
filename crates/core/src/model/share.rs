use thiserror::Error;
use url::Url;

/// Base URL of the WhatsApp share endpoint.
pub const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShareError {
    #[error("Please enter a unique username to challenge a friend.")]
    MissingUsername,

    #[error("invalid share URL: {raw}")]
    InvalidUrl { raw: String },
}

/// A trimmed, non-empty player name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// # Errors
    ///
    /// Returns `ShareError::MissingUsername` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, ShareError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ShareError::MissingUsername);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A "challenge a friend" invitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareInvite {
    username: Username,
    score: u32,
    play_url: Url,
}

impl ShareInvite {
    #[must_use]
    pub fn new(username: Username, score: u32, play_url: Url) -> Self {
        Self {
            username,
            score,
            play_url,
        }
    }

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Hey, I'm {} with a score of {} in Globetrotter Challenge! Can you beat me? Play now: {}",
            self.username, self.score, self.play_url
        )
    }

    /// WhatsApp link that pre-fills the invitation text.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::InvalidUrl` if the endpoint constant fails to parse.
    pub fn whatsapp_url(&self) -> Result<Url, ShareError> {
        let mut url = Url::parse(WHATSAPP_SEND_URL).map_err(|_| ShareError::InvalidUrl {
            raw: WHATSAPP_SEND_URL.to_owned(),
        })?;
        url.query_pairs_mut().append_pair("text", &self.message());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_url() -> Url {
        Url::parse("https://globetrotter.example/").unwrap()
    }

    #[test]
    fn username_rejects_blank() {
        assert_eq!(Username::parse("   "), Err(ShareError::MissingUsername));
        assert_eq!(Username::parse(""), Err(ShareError::MissingUsername));
    }

    #[test]
    fn missing_username_message_is_user_facing() {
        assert_eq!(
            ShareError::MissingUsername.to_string(),
            "Please enter a unique username to challenge a friend."
        );
    }

    #[test]
    fn message_mentions_name_score_and_link() {
        let invite = ShareInvite::new(Username::parse(" ana ").unwrap(), 7, play_url());
        assert_eq!(
            invite.message(),
            "Hey, I'm ana with a score of 7 in Globetrotter Challenge! Can you beat me? Play now: https://globetrotter.example/"
        );
    }

    #[test]
    fn whatsapp_url_carries_encoded_text() {
        let invite = ShareInvite::new(Username::parse("ana").unwrap(), 3, play_url());
        let url = invite.whatsapp_url().unwrap();
        assert_eq!(url.host_str(), Some("api.whatsapp.com"));
        assert_eq!(url.path(), "/send");
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, invite.message());
        assert!(!url.as_str().contains(' '));
    }
}
