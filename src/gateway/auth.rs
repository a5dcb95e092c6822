//! GoTrue auth operations: sign-up, sign-in, sign-out. Successful calls
//! never hand a session back to the caller directly; they go through
//! [`Gateway::replace_session`] so the auth-state listeners are the single
//! source of UI transitions.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::error::{error_message, GatewayError};
use super::Gateway;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Authenticated-user context from the gateway's token endpoint. Replaced
/// wholesale on every auth-state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

/// What a successful sign-up produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The project has email confirmation disabled and the gateway returned
    /// a session right away.
    SignedIn,
    /// A confirmation mail was sent; no session yet.
    ConfirmationSent,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Sign-up responses come in two shapes: a full session when confirmation is
/// disabled, or a bare user object when a mail was sent.
fn sign_up_outcome(body: &Value) -> (SignUpOutcome, Option<Session>) {
    if body.get("access_token").is_some() {
        match serde_json::from_value::<Session>(body.clone()) {
            Ok(session) => return (SignUpOutcome::SignedIn, Some(session)),
            Err(e) => {
                leptos::logging::warn!("unrecognized sign-up session payload: {e}");
            }
        }
    }
    (SignUpOutcome::ConfirmationSent, None)
}

impl Gateway {
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignUpOutcome, GatewayError> {
        let response = self
            .request(Method::POST, self.auth_url("signup"))
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;
        if !status.is_success() {
            return Err(GatewayError::Auth(error_message(status, &body)));
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| GatewayError::Auth(e.to_string()))?;
        let (outcome, session) = sign_up_outcome(&value);
        if let Some(session) = session {
            self.replace_session(Some(session));
        }
        Ok(outcome)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), GatewayError> {
        let response = self
            .request(Method::POST, self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;
        if !status.is_success() {
            return Err(GatewayError::Auth(error_message(status, &body)));
        }

        let session: Session =
            serde_json::from_str(&body).map_err(|e| GatewayError::Auth(e.to_string()))?;
        self.replace_session(Some(session));
        Ok(())
    }

    /// Revoke the token server-side when possible, then drop the session
    /// locally either way. A failed logout call is logged, not surfaced.
    pub async fn sign_out(&self) {
        if self.access_token().is_some() {
            let result = self
                .request(Method::POST, self.auth_url("logout"))
                .send()
                .await;
            match result {
                Ok(response) if !response.status().is_success() => {
                    leptos::logging::warn!("logout rejected: HTTP {}", response.status());
                }
                Err(e) => {
                    leptos::logging::warn!("logout request failed: {e}");
                }
                Ok(_) => {}
            }
        }
        self.replace_session(None);
    }
}
