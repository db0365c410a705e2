// src/web/handlers/state_handlers.rs
use crate::web::types::StateResponse;

use rocket::http::Status;
use rocket::serde::json::Json;
use tracing::debug;

pub async fn get_state_handler() -> Json<StateResponse> {
    debug!("State requested");
    Json(StateResponse::current())
}

pub async fn preflight_handler() -> Status {
    Status::NoContent
}
