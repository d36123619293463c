//! Internationalization (i18n) support for `fareview-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/fareview-ui.ftl   (fallback/reference)
//!   es-ES/fareview-ui.ftl   (additional locale)
//! ```
//!
//! Usage:
//! ```ignore
//! use crate::t;
//! let label = t!("status-loading");
//! ```
//!
//! The loader selects languages the first time it is touched, so lookups work
//! without an explicit `init()`; calling `init()` early just front-loads that.
//!
//! Platform notes:
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Native (tests, previews): en-US unless `FAREVIEW_LANG` names another locale.
//! - Placeables are rendered without Unicode isolation marks, so formatted
//!   strings compare cleanly in tests and markup.
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro routed through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "fareview-ui";

const FALLBACK: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &requested_languages()) {
        tracing::warn!(%err, "failed selecting languages; continuing with fallback");
    }
    // Applies to loaded bundles only, so it has to follow every `select`.
    loader.set_use_isolating(false);
    loader
});

/// Load localization bundles (idempotent).
pub fn init() {
    Lazy::force(&LOADER);
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    let selected = i18n_embed::select(&*LOADER, &Localizations, &[lang]);
    LOADER.set_use_isolating(false);
    selected.map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Language currently served by the loader.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    std::env::var("FAREVIEW_LANG")
        .ok()
        .and_then(|tag| tag.parse().ok())
        .into_iter()
        .collect()
}
