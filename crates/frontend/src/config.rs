//! Frontend configuration

/// UI timing constants
pub struct AppConfig;

impl AppConfig {
    /// How long a toast stays on screen, in milliseconds
    pub const TOAST_DISMISS_MS: u32 = 4_000;
}

/// Base URL for API calls
///
/// The API is served from the same origin as the app's assets.
pub fn api_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
