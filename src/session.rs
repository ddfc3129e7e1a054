//! Session Collaborator
//!
//! Bearer-token accessor over browser local storage. Token issuance and
//! refresh belong to the auth pages, not the board.

const ACCESS_TOKEN_KEY: &str = "access_token";

/// The stored access token, when a session exists.
pub fn access_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()
}
