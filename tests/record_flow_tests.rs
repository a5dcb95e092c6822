//! Host-side tests for the crate's public surface: config validation,
//! draft-to-payload conversion, and gateway response/session decoding.

use chrono::NaiveDate;
use uuid::Uuid;

use gametracker::config::GatewayConfig;
use gametracker::gateway::auth::Session;
use gametracker::gateway::error::GatewayError;
use gametracker::gateway::Gateway;
use gametracker::models::{PlayRecord, RecordDraft};

fn owner() -> Uuid {
    Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap()
}

#[test]
fn draft_to_insert_payload_matches_gateway_shape() {
    let draft = RecordDraft {
        date: "2024-01-01".to_string(),
        game_title: "Chess".to_string(),
        cost: "0".to_string(),
        play_count: "3".to_string(),
    };
    let record = draft.parse().unwrap().into_new(owner());

    let payload = serde_json::to_value(&record).unwrap();
    assert_eq!(
        payload,
        serde_json::json!({
            "user_id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2024-01-01",
            "game_title": "Chess",
            "cost": 0,
            "play_count": 3
        })
    );
}

#[test]
fn list_response_decodes_in_server_order() {
    // The server orders by date.desc; the client keeps its order verbatim.
    let body = serde_json::json!([
        {
            "id": "11111111-1111-4111-8111-111111111111",
            "date": "2024-03-01",
            "game_title": "Go",
            "cost": 500,
            "play_count": 2,
            "created_at": "2024-03-01T10:00:00+00:00"
        },
        {
            "id": "22222222-2222-4222-8222-222222222222",
            "date": "2024-01-01",
            "game_title": "Chess",
            "cost": 0,
            "play_count": 3,
            "created_at": "2024-02-01T10:00:00+00:00"
        }
    ]);
    let records: Vec<PlayRecord> = serde_json::from_value(body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].game_title, "Go");
    assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert!(records[0].date > records[1].date);
}

#[test]
fn gateway_starts_signed_out_and_tracks_auth_state() {
    let config = GatewayConfig::from_parts(Some("https://abc.supabase.co"), Some("anon")).unwrap();
    let gateway = Gateway::new(config);
    assert!(gateway.current_session().is_none());

    let subscription = gateway.on_auth_state_change(|_| {});
    subscription.unsubscribe();
}

#[test]
fn session_decoding_accepts_gotrue_token_response() {
    let session: Session = serde_json::from_str(
        r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": { "id": "550e8400-e29b-41d4-a716-446655440000", "email": "p@example.com" }
        }"#,
    )
    .unwrap();
    assert_eq!(session.user.id, owner());
    assert_eq!(session.expires_at, None);
}

#[test]
fn errors_render_with_operation_prefix() {
    assert_eq!(
        GatewayError::Fetch("JWT expired".to_string()).to_string(),
        "Fetch error: JWT expired"
    );
    assert_eq!(
        String::from(GatewayError::Insert("duplicate key".to_string())),
        "Insert error: duplicate key"
    );
    assert_eq!(
        GatewayError::Config("SUPABASE_URL is not set".to_string()).to_string(),
        "Configuration error: SUPABASE_URL is not set"
    );
}
