//! Blocking browser dialogs. Errors and mutation results are surfaced this
//! way rather than as inline status text, so the user has to acknowledge
//! them before continuing.

/// Show a blocking message box.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask the user to confirm an action. Returns false when the dialog is
/// unavailable, which fails safe for destructive operations.
pub fn confirm(message: &str) -> bool {
    if let Some(window) = web_sys::window() {
        window.confirm_with_message(message).unwrap_or(false)
    } else {
        false
    }
}
