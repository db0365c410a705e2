pub mod emote_request;

pub use emote_request::{EmoteCommand, EmoteRejection, EmoteRequest};
