//! Local HTTP bridge exposing a status report and an emote-request stub.

pub mod config;
pub mod types;
pub mod web;

pub use config::ServerConfig;
pub use web::{build_rocket, start_web_server};
