//! Bearer token persistence.
//!
//! The admin token lives in localStorage under [`TOKEN_KEY`] so the session
//! survives reloads. Storage access is best-effort: a browser with storage
//! disabled simply behaves as a guest.

use crate::config::TOKEN_KEY;
use crate::models::SessionState;
use crate::utils::dom;

/// Load the persisted session, if any.
pub fn load() -> SessionState {
    let token = dom::local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten());
    SessionState::from_token(token)
}

/// Persist a freshly issued token.
pub fn store(token: &str) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Clear the persisted token (logout, or credential rejection).
pub fn clear() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
