// src/web/types.rs

use crate::types::EmoteCommand;
use rocket::serde::Serialize;

pub const STATUS_OK: &str = "ok";
pub const STATUS_ERROR: &str = "error";
pub const EMOTE_ACCEPTED_MESSAGE: &str = "Join/emote request accepted";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StateReport {
    pub connected_online: bool,
    pub connected_to_whisper: bool,
    pub region: &'static str,
}

/// Hardcoded snapshot; there is no live connection behind it.
pub const STATE_REPORT: StateReport = StateReport {
    connected_online: true,
    connected_to_whisper: false,
    region: "IND",
};

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StateResponse {
    pub status: &'static str,
    pub state: StateReport,
}

impl StateResponse {
    pub fn current() -> Self {
        Self {
            status: STATUS_OK,
            state: STATE_REPORT,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct EmoteAccepted {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(flatten)]
    pub command: EmoteCommand,
}

impl From<EmoteCommand> for EmoteAccepted {
    fn from(command: EmoteCommand) -> Self {
        Self {
            status: STATUS_OK,
            message: EMOTE_ACCEPTED_MESSAGE,
            command,
        }
    }
}
