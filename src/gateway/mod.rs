//! Client for the remote gateway: GoTrue auth plus the PostgREST data API.
//! This is the only module that touches the network. Row-level security on
//! the server scopes every data call to the signed-in user; the client never
//! filters by owner itself.

pub mod auth;
pub mod error;
pub mod records;
mod storage;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use reqwest::Method;

use crate::config::GatewayConfig;

use auth::Session;

type Listener = Arc<dyn Fn(Option<Session>) + Send + Sync>;

/// Handle returned by [`Gateway::on_auth_state_change`]. Dropping it keeps
/// the listener alive; call [`unsubscribe`](Self::unsubscribe) to remove it.
pub struct AuthSubscription {
    id: usize,
    listeners: Arc<Mutex<HashMap<usize, Listener>>>,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {
        self.listeners.lock().unwrap().remove(&self.id);
    }
}

#[derive(Clone)]
pub struct Gateway {
    http: reqwest::Client,
    config: GatewayConfig,
    session: Arc<Mutex<Option<Session>>>,
    listeners: Arc<Mutex<HashMap<usize, Listener>>>,
    next_listener_id: Arc<AtomicUsize>,
}

impl Gateway {
    /// Build a client and restore any persisted session so a page reload
    /// keeps the user signed in.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: Arc::new(Mutex::new(storage::load())),
            listeners: Arc::new(Mutex::new(HashMap::new())),
            next_listener_id: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The current session, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    /// Register a callback fired on every session replacement (sign-in,
    /// sign-up that yields a session, sign-out).
    pub fn on_auth_state_change<F>(&self, callback: F) -> AuthSubscription
    where
        F: Fn(Option<Session>) + Send + Sync + 'static,
    {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().unwrap().insert(id, Arc::new(callback));
        AuthSubscription {
            id,
            listeners: Arc::clone(&self.listeners),
        }
    }

    /// Swap the stored session, persist the change, and notify listeners.
    /// Listeners run outside the locks so they may call back into the
    /// gateway freely.
    pub(crate) fn replace_session(&self, session: Option<Session>) {
        *self.session.lock().unwrap() = session.clone();
        match &session {
            Some(s) => storage::save(s),
            None => storage::clear(),
        }

        let callbacks: Vec<Listener> = self.listeners.lock().unwrap().values().cloned().collect();
        for callback in callbacks {
            callback(session.clone());
        }
    }

    pub(crate) fn access_token(&self) -> Option<String> {
        self.session
            .lock()
            .unwrap()
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }

    /// Start a request with the `apikey` header and, when signed in, the
    /// bearer token attached.
    pub(crate) fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method, url)
            .header("apikey", &self.config.anon_key);
        if let Some(token) = self.access_token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }
}
