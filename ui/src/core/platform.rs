//! Browser signals the theme depends on. Native builds get inert fallbacks.

use crate::theme::Theme;

/// Whether the OS reports `prefers-color-scheme: dark`.
pub fn prefers_dark_scheme() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Mirror the theme onto `<html data-theme=…>` so page-level styles follow it.
pub fn apply_document_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if root.set_attribute("data-theme", theme.as_str()).is_err() {
                tracing::debug!("could not set data-theme on document root");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}
