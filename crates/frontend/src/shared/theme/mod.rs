//! Light/dark theme switching.
//!
//! The stylesheet keys dark mode off a `dark` class on the root `<html>`
//! element; toggling the theme only flips that class.

/// Class set on the document element while dark mode is on
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Label of the header toggle, naming the theme it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Mode gelap",
            Theme::Dark => "Mode terang",
        }
    }
}

/// Add or remove the `dark` class on `<html>`
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme == Theme::Dark)
        .is_err()
    {
        log::warn!("Failed to switch theme to {}", theme.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_theme: Theme) {}
