use globetrotter_core::model::{ShareError, ShareInvite, Username};
use tracing::info;
use url::Url;

/// Builds "challenge a friend" links for a finished or running game.
#[derive(Debug, Clone)]
pub struct ShareService {
    play_url: Url,
}

impl ShareService {
    /// # Errors
    ///
    /// Returns `ShareError::InvalidUrl` if `play_url` does not parse.
    pub fn new(play_url: &str) -> Result<Self, ShareError> {
        let play_url = Url::parse(play_url.trim()).map_err(|_| ShareError::InvalidUrl {
            raw: play_url.to_owned(),
        })?;
        Ok(Self { play_url })
    }

    #[must_use]
    pub fn play_url(&self) -> &Url {
        &self.play_url
    }

    /// Build the invitation for `raw_username` at `score`.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::MissingUsername` when the name is blank.
    pub fn invite(&self, raw_username: &str, score: u32) -> Result<ShareInvite, ShareError> {
        let username = Username::parse(raw_username)?;
        Ok(ShareInvite::new(username, score, self.play_url.clone()))
    }

    /// Build the WhatsApp URL that shares the invitation.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::MissingUsername` when the name is blank.
    pub fn share_link(&self, raw_username: &str, score: u32) -> Result<Url, ShareError> {
        let invite = self.invite(raw_username, score)?;
        let url = invite.whatsapp_url()?;
        info!(username = %invite.username(), score, "share link created");
        Ok(url)
    }
}
