// src/web/mod.rs

pub mod cors_utils;
pub mod handlers;
pub mod types;

pub use cors_utils::{apply_cors, Cors, CORS_HEADERS};
pub use types::*;

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use rocket::data::Data;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Rocket};
use tracing::info;

#[options("/state")]
pub async fn state_preflight() -> Status {
    handlers::preflight_handler().await
}

#[options("/send_emote")]
pub async fn send_emote_preflight() -> Status {
    handlers::preflight_handler().await
}

#[get("/state")]
pub async fn get_state() -> Json<StateResponse> {
    handlers::get_state_handler().await
}

#[post("/send_emote", data = "<data>")]
pub async fn send_emote(
    data: Data<'_>,
) -> Result<Json<EmoteAccepted>, status::Custom<Json<ErrorResponse>>> {
    handlers::send_emote_handler(data).await
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Not found"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error"))
}

#[rocket::catch(default)]
pub fn default_catcher(
    status: Status,
    _request: &Request<'_>,
) -> status::Custom<Json<ErrorResponse>> {
    let reason = status.reason().unwrap_or("Request failed");
    status::Custom(status, Json(ErrorResponse::new(reason)))
}

/// Build the server with its fixed route table. Nothing is mounted after this.
pub fn build_rocket(config: &ServerConfig) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.host))
        .merge(("port", config.port))
        .merge(("log_level", "off"));

    rocket::custom(figment)
        .attach(Cors)
        .register("/", catchers![not_found, internal_error, default_catcher])
        .mount(
            "/",
            routes![state_preflight, send_emote_preflight, get_state, send_emote],
        )
}

// Main server start function
pub async fn start_web_server(config: ServerConfig) -> Result<()> {
    info!("Starting emote bridge on http://{}:{}", config.host, config.port);

    let _rocket = build_rocket(&config)
        .launch()
        .await
        .context("Server failed to launch")?;

    info!("Emote bridge shut down");
    Ok(())
}
