//! Shared API client wiring

use crate::config;
use crate::storage::BrowserStorage;
use std::cell::RefCell;
use tick_client::session::SessionStore;
use tick_client::{ApiClient, AuthService};

thread_local! {
    // ApiClient is !Send, so a thread-local slot stands in for a global.
    static CLIENT: RefCell<Option<ApiClient<BrowserStorage>>> = const { RefCell::new(None) };
}

/// The process-wide API client, built lazily against the window origin
pub fn api_client() -> ApiClient<BrowserStorage> {
    CLIENT.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| {
                ApiClient::new(
                    config::api_base_url(),
                    SessionStore::new(BrowserStorage::default()),
                )
            })
            .clone()
    })
}

/// Auth operations over the shared client
pub fn auth_service() -> AuthService<BrowserStorage> {
    AuthService::new(api_client())
}
