use emote_bridge::web::CORS_HEADERS;
use emote_bridge::{build_rocket, ServerConfig};
use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::{Client, LocalResponse};
use rocket::{get, routes};
use serde_json::{json, Value};

fn client() -> Client {
    Client::tracked(build_rocket(&ServerConfig::default())).expect("valid rocket instance")
}

fn assert_cors(response: &LocalResponse<'_>) {
    for (name, value) in CORS_HEADERS {
        assert_eq!(
            response.headers().get_one(name),
            Some(value),
            "missing or wrong {name}"
        );
    }
}

fn post_emote(client: &Client, body: &str) -> (Status, Value) {
    let response = client
        .post("/send_emote")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_cors(&response);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    let status = response.status();
    let json = response.into_json::<Value>().expect("json body");
    (status, json)
}

#[test]
fn state_returns_fixed_report() {
    let client = client();
    let response = client
        .get("/state")
        .header(Header::new("Authorization", "Bearer ignored"))
        .body("ignored body")
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_cors(&response);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    assert_eq!(
        response.into_json::<Value>(),
        Some(json!({
            "status": "ok",
            "state": {
                "connected_online": true,
                "connected_to_whisper": false,
                "region": "IND"
            }
        }))
    );
}

#[test]
fn preflight_returns_no_content() {
    let client = client();
    for path in ["/state", "/send_emote"] {
        let response = client.options(path).body("{\"server\":\"x\"}").dispatch();
        assert_eq!(response.status(), Status::NoContent, "path {path}");
        assert_cors(&response);
        assert!(response.into_string().unwrap_or_default().is_empty());
    }
}

#[test]
fn send_emote_minimal_body_is_echoed_with_defaults() {
    let client = client();
    let (status, body) = post_emote(&client, r#"{"server":"eu1","team_code":"ABC123"}"#);

    assert_eq!(status, Status::Ok);
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "message": "Join/emote request accepted",
            "server": "eu1",
            "team_code": "ABC123",
            "emote_id": null,
            "uids": [],
            "repeat": 1,
            "spam_delay_ms": 120
        })
    );
}

#[test]
fn send_emote_echoes_every_field() {
    let client = client();
    let (status, body) = post_emote(
        &client,
        r#"{"server":"ind","team_code":"Q9","emote_id":"909000063",
            "uids":["1001",1002],"repeat":5,"spam_delay_ms":250}"#,
    );

    assert_eq!(status, Status::Ok);
    assert_eq!(body["emote_id"], json!("909000063"));
    assert_eq!(body["uids"], json!(["1001", 1002]));
    assert_eq!(body["repeat"], json!(5));
    assert_eq!(body["spam_delay_ms"], json!(250));
}

#[test]
fn send_emote_rejects_missing_required_fields() {
    let client = client();
    let expected = json!({"status": "error", "message": "Missing server or team_code"});

    for raw in [
        r#"{"team_code":"ABC123"}"#,
        r#"{"server":"eu1"}"#,
        r#"{"server":"","team_code":"ABC123"}"#,
        "{}",
        "",
        "this is not json",
        "[\"eu1\",\"ABC123\"]",
    ] {
        let (status, body) = post_emote(&client, raw);
        assert_eq!(status, Status::BadRequest, "body {raw:?}");
        assert_eq!(body, expected, "body {raw:?}");
    }
}

#[test]
fn send_emote_echoes_values_without_coercion() {
    let client = client();
    let (status, body) = post_emote(
        &client,
        r#"{"server":"eu1","team_code":"ABC123","repeat":"3","spam_delay_ms":1.5,"uids":"42"}"#,
    );

    assert_eq!(status, Status::Ok);
    assert_eq!(body["repeat"], json!("3"));
    assert_eq!(body["spam_delay_ms"], json!(1.5));
    assert_eq!(body["uids"], json!("42"));
}

#[test]
fn send_emote_echoes_explicit_null() {
    let client = client();
    let (status, body) = post_emote(
        &client,
        r#"{"server":"eu1","team_code":"ABC123","uids":null,"repeat":null}"#,
    );

    assert_eq!(status, Status::Ok);
    assert_eq!(body["uids"], Value::Null);
    assert_eq!(body["repeat"], Value::Null);
    assert_eq!(body["spam_delay_ms"], json!(120));
}

#[test]
fn send_emote_ignores_content_type() {
    let client = client();
    let response = client
        .post("/send_emote")
        .header(ContentType::Plain)
        .body(r#"{"server":"eu1","team_code":"ABC123"}"#)
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_cors(&response);
}

#[test]
fn send_emote_is_idempotent() {
    let client = client();
    let raw = r#"{"server":"eu1","team_code":"ABC123","uids":[7],"repeat":3}"#;

    let first = post_emote(&client, raw);
    let second = post_emote(&client, raw);
    assert_eq!(first, second);
}

#[test]
fn send_emote_drops_unknown_fields() {
    let client = client();
    let (status, body) = post_emote(
        &client,
        r#"{"server":"eu1","team_code":"ABC123","token":"secret","extra":{"a":1}}"#,
    );

    assert_eq!(status, Status::Ok);
    let object = body.as_object().expect("object body");
    assert!(!object.contains_key("token"));
    assert!(!object.contains_key("extra"));
    assert_eq!(object.len(), 8);
}

#[test]
fn unknown_route_gets_json_404_with_cors() {
    let client = client();
    let response = client.get("/nope").dispatch();

    assert_eq!(response.status(), Status::NotFound);
    assert_cors(&response);
    assert_eq!(
        response.into_json::<Value>(),
        Some(json!({"status": "error", "message": "Not found"}))
    );
}

#[test]
fn wrong_method_is_not_routed() {
    let client = client();
    let response = client.get("/send_emote").dispatch();

    assert_eq!(response.status(), Status::NotFound);
    assert_cors(&response);
}

#[get("/fails")]
fn fails() -> Status {
    Status::InternalServerError
}

#[get("/forbidden")]
fn forbidden() -> Status {
    Status::Forbidden
}

fn client_with_failing_routes() -> Client {
    let rocket = build_rocket(&ServerConfig::default()).mount("/", routes![fails, forbidden]);
    Client::tracked(rocket).expect("valid rocket instance")
}

#[test]
fn internal_error_gets_json_500_with_cors() {
    let client = client_with_failing_routes();
    let response = client.get("/fails").dispatch();

    assert_eq!(response.status(), Status::InternalServerError);
    assert_cors(&response);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    assert_eq!(
        response.into_json::<Value>(),
        Some(json!({"status": "error", "message": "Internal server error"}))
    );
}

#[test]
fn other_statuses_use_default_catcher() {
    let client = client_with_failing_routes();
    let response = client.get("/forbidden").dispatch();

    assert_eq!(response.status(), Status::Forbidden);
    assert_cors(&response);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    assert_eq!(
        response.into_json::<Value>(),
        Some(json!({"status": "error", "message": "Forbidden"}))
    );
}
