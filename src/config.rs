//! Client Configuration
//!
//! Runtime settings for the dashboard, read from browser local storage.

/// Local storage key holding an API base URL override
pub const API_URL_STORAGE_KEY: &str = "mergington_api_url";

/// Default API base: same origin as the page
pub const DEFAULT_API_BASE: &str = "";

/// Delay before the shared signup/unregister message hides itself
pub const MESSAGE_HIDE_DELAY_MS: u32 = 5000;

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path, without trailing slash
    pub api_base: String,
    /// Auto-hide delay for the shared message region
    pub message_hide_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            message_hide_delay_ms: MESSAGE_HIDE_DELAY_MS,
        }
    }
}

impl ClientConfig {
    /// Load configuration, applying the local storage override if present
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(url) = stored_api_base() {
            config.api_base = normalize_base(&url);
        }
        config
    }
}

fn stored_api_base() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(API_URL_STORAGE_KEY).ok()?
}

/// Trim whitespace and trailing slashes from a base URL
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
