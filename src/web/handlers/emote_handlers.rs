// src/web/handlers/emote_handlers.rs
use crate::types::EmoteRequest;
use crate::web::types::{EmoteAccepted, ErrorResponse};

use rocket::data::{Data, ToByteUnit};
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use tracing::{debug, info, warn};

/// Bodies larger than this are treated as unparsable.
pub const MAX_EMOTE_BODY_KIB: usize = 64;

pub async fn send_emote_handler(
    data: Data<'_>,
) -> Result<Json<EmoteAccepted>, status::Custom<Json<ErrorResponse>>> {
    let raw = read_body(data).await;
    let request = EmoteRequest::from_body(&raw);

    match request.into_command() {
        Ok(command) => {
            info!(
                "Emote request accepted: server={} team_code={} uids={} repeat={} spam_delay_ms={}",
                command.server,
                command.team_code,
                command.uids,
                command.repeat,
                command.spam_delay_ms
            );
            Ok(Json(EmoteAccepted::from(command)))
        }
        Err(rejection) => {
            warn!("Emote request rejected: {}", rejection);
            Err(status::Custom(
                Status::BadRequest,
                Json(ErrorResponse::new(rejection.message())),
            ))
        }
    }
}

/// Read the request body as text; any read failure or overflow yields an empty body.
async fn read_body(data: Data<'_>) -> String {
    match data.open(MAX_EMOTE_BODY_KIB.kibibytes()).into_string().await {
        Ok(capped) if capped.is_complete() => capped.into_inner(),
        Ok(_) => {
            debug!("Emote body exceeded {} KiB limit", MAX_EMOTE_BODY_KIB);
            String::new()
        }
        Err(e) => {
            debug!("Failed to read emote body: {}", e);
            String::new()
        }
    }
}
