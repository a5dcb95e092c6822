use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong talking to the gateway, one variant per
/// operation class. All variants carry the gateway's own message text so it
/// can be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Insert error: {0}")]
    Insert(String),

    #[error("Update error: {0}")]
    Update(String),

    #[error("Delete error: {0}")]
    Delete(String),
}

impl From<GatewayError> for String {
    fn from(err: GatewayError) -> Self {
        err.to_string()
    }
}

/// Pull a human-readable message out of an error response body.
///
/// GoTrue responds with `{"error_description": ...}` or `{"msg": ...}`
/// depending on the endpoint, PostgREST with `{"message": ...}`. Anything
/// unrecognized falls back to the HTTP status line.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error_description", "msg", "message", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    format!("HTTP {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_gotrue_error_description() {
        let msg = error_message(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(msg, "Invalid login credentials");
    }

    #[test]
    fn extracts_gotrue_msg() {
        let msg = error_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"code":422,"msg":"User already registered"}"#,
        );
        assert_eq!(msg, "User already registered");
    }

    #[test]
    fn extracts_postgrest_message() {
        let msg = error_message(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"JWT expired","code":"PGRST301","details":null,"hint":null}"#,
        );
        assert_eq!(msg, "JWT expired");
    }

    #[test]
    fn falls_back_to_status_for_unknown_body() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
            "HTTP 500 Internal Server Error"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, r#"{"unexpected":true}"#),
            "HTTP 502 Bad Gateway"
        );
    }

    #[test]
    fn display_prefixes_the_operation() {
        let err = GatewayError::Delete("row not found".to_string());
        assert_eq!(err.to_string(), "Delete error: row not found");
        assert_eq!(String::from(err), "Delete error: row not found");
    }
}
