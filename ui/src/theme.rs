//! Light/dark theme state.
//!
//! `ThemeController` is the only writer of the theme: it resolves the initial
//! value (stored preference, then the OS colour-scheme signal, then light),
//! persists toggles, and pushes the result to the page through `DomTarget`.
//! Callers re-render charts with the theme `toggle` returns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::dom::DomTarget;
use crate::core::storage::Storage;
use crate::t;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle button: it names the theme a click switches to.
    pub fn toggle_label(self) -> String {
        match self {
            Self::Light => t!("theme-switch-to-dark"),
            Self::Dark => t!("theme-switch-to-light"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ThemeController<S> {
    storage: S,
    key: String,
    current: Theme,
}

impl<S: Storage> ThemeController<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            current: Theme::default(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stored preference, then OS preference, then light.
    pub fn resolve(&self, os_prefers_dark: bool) -> Theme {
        if let Some(raw) = self.storage.get(&self.key) {
            match Theme::parse(&raw) {
                Some(theme) => return theme,
                None => tracing::debug!(value = %raw, "ignoring unknown stored theme"),
            }
        }

        if os_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn init(&mut self, os_prefers_dark: bool, dom: &mut impl DomTarget) -> Theme {
        self.current = self.resolve(os_prefers_dark);
        self.apply(dom);
        self.current
    }

    pub fn toggle(&mut self, dom: &mut impl DomTarget) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.storage.set(&self.key, self.current.as_str()) {
            tracing::warn!(%err, "could not persist theme preference");
        }
        self.apply(dom);
        tracing::info!(theme = %self.current, "theme switched");
        self.current
    }

    /// Rewrite the toggle label, e.g. after the language changed.
    pub fn relabel(&self, dom: &mut impl DomTarget) {
        dom.set_toggle_label(&self.current.toggle_label());
    }

    fn apply(&self, dom: &mut impl DomTarget) {
        dom.set_theme_attribute(self.current);
        dom.set_toggle_label(&self.current.toggle_label());
    }
}
