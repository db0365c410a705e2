use serde::Serialize;
use serde_json::{json, Map, Value};

pub const DEFAULT_REPEAT: i64 = 1;
pub const DEFAULT_SPAM_DELAY_MS: i64 = 120;

/// Body of `POST /send_emote` as sent by the client.
///
/// Kept as the raw JSON object: field values are echoed without coercion, and
/// defaults only apply to keys that are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmoteRequest {
    fields: Map<String, Value>,
}

/// A request that passed validation, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmoteCommand {
    pub server: Value,
    pub team_code: Value,
    pub emote_id: Value,
    pub uids: Value,
    pub repeat: Value,
    pub spam_delay_ms: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmoteRejection {
    MissingServerOrTeamCode,
}

impl EmoteRejection {
    pub fn message(&self) -> &'static str {
        match self {
            EmoteRejection::MissingServerOrTeamCode => "Missing server or team_code",
        }
    }
}

impl std::fmt::Display for EmoteRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl EmoteRequest {
    /// Structured decode; `None` for anything that is not a JSON object.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str::<Map<String, Value>>(raw)
            .ok()
            .map(|fields| Self { fields })
    }

    /// Decode, falling back to an empty request.
    pub fn from_body(raw: &str) -> Self {
        match Self::decode(raw) {
            Some(request) => request,
            None => {
                tracing::debug!("Unparsable emote body ({} bytes), using defaults", raw.len());
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn into_command(mut self) -> Result<EmoteCommand, EmoteRejection> {
        let server = self.take_required("server");
        let team_code = self.take_required("team_code");

        let (Some(server), Some(team_code)) = (server, team_code) else {
            return Err(EmoteRejection::MissingServerOrTeamCode);
        };

        Ok(EmoteCommand {
            server,
            team_code,
            emote_id: self.take_or("emote_id", Value::Null),
            uids: self.take_or("uids", json!([])),
            repeat: self.take_or("repeat", json!(DEFAULT_REPEAT)),
            spam_delay_ms: self.take_or("spam_delay_ms", json!(DEFAULT_SPAM_DELAY_MS)),
        })
    }

    fn take_required(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key).filter(|value| !is_blank(value))
    }

    // Present keys win even when their value is null
    fn take_or(&mut self, key: &str, default: Value) -> Value {
        self.fields.remove(key).unwrap_or(default)
    }
}

/// Values that count as "not provided" for a required field.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
