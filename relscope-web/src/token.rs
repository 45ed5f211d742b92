//! Credential store: the bearer token in durable browser storage.
//!
//! Nothing here validates or inspects the token; expiry is discovered
//! reactively when the backend answers 401. The value survives page reloads
//! within the same browser profile but is not synchronized across tabs.

use gloo_storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "relscope.token";

/// Read the stored bearer token, if any.
pub fn read() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

/// Persist a bearer token.
pub fn store(token: &str) {
    if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
        log::warn!("failed to persist credential: {err}");
    }
}

/// Remove the stored bearer token. Clearing twice is a no-op.
pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
}

/// Remove the stored bearer token and report what was there.
///
/// Lets the caller distinguish "cleared a credential" from "nothing to
/// clear", which keeps 401 side effects from firing twice.
pub fn take() -> Option<String> {
    let token = read();
    if token.is_some() {
        clear();
    }
    token
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn store_then_read_roundtrips() {
        clear();
        store("abc");
        assert_eq!(read(), Some("abc".to_string()));
        clear();
    }

    #[wasm_bindgen_test]
    fn clear_is_idempotent() {
        store("abc");
        clear();
        clear();
        assert_eq!(read(), None);
    }

    #[wasm_bindgen_test]
    fn take_reports_and_clears() {
        store("abc");
        assert_eq!(take(), Some("abc".to_string()));
        assert_eq!(read(), None);
        assert_eq!(take(), None);
    }
}
