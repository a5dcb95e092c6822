//! localStorage persistence for the session, so a reload keeps the user
//! signed in. Compiled to no-ops off wasm32 (host-side tests).

#[cfg(target_arch = "wasm32")]
const SESSION_KEY: &str = "gametracker.session";

use super::auth::Session;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn load() -> Option<Session> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            // Stale or hand-edited entry; drop it and start signed out.
            leptos::logging::warn!("discarding unreadable stored session: {e}");
            clear();
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn save(session: &Session) {
    match serde_json::to_string(session) {
        Ok(encoded) => {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(SESSION_KEY, &encoded);
            }
        }
        Err(e) => leptos::logging::warn!("failed to encode session: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn load() -> Option<Session> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn save(_session: &Session) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn clear() {}
