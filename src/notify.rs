//! User Notifications
//!
//! Mutation failures surface as a blocking alert at the operation
//! boundary; they never propagate into the rendering layer.

use crate::api::ApiError;

/// Report a failed mutation. The stale board view stays as it was.
pub fn mutation_failed(operation: &str, err: &ApiError) {
    web_sys::console::log_1(&format!("[BOARD] {} failed: {}", operation, err).into());
    alert(&err.to_string());
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Ask the user to acknowledge a destructive action.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
