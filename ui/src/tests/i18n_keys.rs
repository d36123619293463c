//! Every `t!("…")` key used under `src/` must exist in the fallback bundle,
//! and every locale folder must define every fallback key exactly once.
//!
//! Keys reached through `fl!` directly or built at runtime are not seen.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "fareview-ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message ids in definition order, duplicates included.
fn message_ids(ftl: &str) -> Vec<String> {
    ftl.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim().to_string())
        .filter(|id| !id.is_empty() && id.chars().all(is_key_char))
        .collect()
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Literal first arguments of `t!` invocations.
fn referenced_keys(source: &str) -> BTreeSet<String> {
    source
        .split("t!(\"")
        .skip(1)
        .filter_map(|rest| rest.split_once('"'))
        .map(|(key, _)| key.to_string())
        .filter(|key| !key.is_empty() && key.chars().all(is_key_char))
        .collect()
}

fn locale_file(locale: &str) -> String {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {path:?}: {err}"))
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback: BTreeSet<String> = message_ids(&locale_file(FALLBACK)).into_iter().collect();
    assert!(!fallback.is_empty(), "fallback bundle has no messages");

    let mut files = Vec::new();
    rust_sources(&crate_root().join("src"), &mut files);

    let mut missing: BTreeMap<String, PathBuf> = BTreeMap::new();
    for file in files {
        let source = fs::read_to_string(&file).unwrap_or_default();
        for key in referenced_keys(&source) {
            if !fallback.contains(&key) {
                missing.entry(key).or_insert_with(|| file.clone());
            }
        }
    }

    assert!(
        missing.is_empty(),
        "keys used in code but missing from {FALLBACK}: {missing:#?}"
    );
}

#[test]
fn every_locale_covers_fallback_without_duplicates() {
    let fallback: BTreeSet<String> = message_ids(&locale_file(FALLBACK)).into_iter().collect();

    for locale in crate::i18n::available_languages() {
        let ids = message_ids(&locale_file(&locale));

        let mut seen = BTreeSet::new();
        let duplicates: Vec<_> = ids.iter().filter(|id| !seen.insert(id.as_str())).collect();
        assert!(duplicates.is_empty(), "{locale} defines {duplicates:?} more than once");

        let missing: Vec<_> = fallback.iter().filter(|id| !seen.contains(id.as_str())).collect();
        assert!(missing.is_empty(), "{locale} is missing {missing:?}");
    }
}

#[test]
fn key_scanner_reads_macro_literals() {
    let keys = referenced_keys(r#"let a = t!("status-empty"); let b = t!("chart-vendor", id = 1);"#);
    assert_eq!(
        keys.into_iter().collect::<Vec<_>>(),
        vec!["chart-vendor".to_string(), "status-empty".to_string()]
    );
}
