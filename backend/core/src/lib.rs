pub mod error;
pub mod message;
pub mod pack;
pub mod projector;
pub mod reply;

pub use error::ClientError;
pub use message::{ASSISTANT_LABEL, ChatTurn, Speaker, Transcript, TurnBody};
pub use pack::{
    Brand, CompetitorRow, DomainCheck, Financials, Pitch, PitchSlides, RealWorldScenario,
    StartupPack,
};
pub use projector::{PackView, project};
pub use reply::{ChatReply, ChatRequest, ErrorBody, HistoryDetail};
