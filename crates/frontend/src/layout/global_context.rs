use leptos::prelude::*;

use crate::shared::theme::{apply_theme, Theme};

/// UI-only state of the shell: sidebar visibility and theme. Not persisted.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Mobile overlay sidebar
    pub sidebar_open: RwSignal<bool>,
    /// Narrow icon-only sidebar on desktop
    pub sidebar_collapsed: RwSignal<bool>,
    pub dark_mode: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(false),
            sidebar_collapsed: RwSignal::new(false),
            dark_mode: RwSignal::new(false),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|v| *v = !*v);
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.sidebar_open.set(open);
    }

    pub fn toggle_sidebar_collapse(&self) {
        self.sidebar_collapsed.update(|v| *v = !*v);
    }

    /// Flips dark mode and the `dark` class on the document element
    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|v| *v = !*v);
        apply_theme(self.theme());
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode.get_untracked())
    }
}

pub fn use_ui() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided")
}
