/// Entry point the app falls back to when the session is gone
pub const LOGIN_PATH: &str = "/login";

/// Capability to force a full client navigation
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Navigates by assigning `window.location`, which reloads the app
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}
