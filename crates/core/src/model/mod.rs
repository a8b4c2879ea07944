mod destination;
mod ids;
mod session;
mod share;
mod theme;

pub use ids::{DestinationId, ParseIdError};

pub use destination::{
    Destination, DestinationDraft, DestinationError, MIN_CLUES, VISIBLE_CLUES,
    ValidatedDestination,
};
pub use session::{
    AnswerFeedback, CurrentQuestion, ScoreCard, Session, SessionError, SessionPhase,
};
pub use share::{ShareError, ShareInvite, Username, WHATSAPP_SEND_URL};
pub use theme::Theme;
