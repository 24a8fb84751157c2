/// Settings shared by every player WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Allow media to start without a user gesture. Player pages rely on it.
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            autoplay: true,
        }
    }
}
