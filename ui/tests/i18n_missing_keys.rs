use std::collections::BTreeSet;
use std::path::Path;

/// Locale bundles shipped with the crate. Register new locales here.
const LOCALES: &[(&str, &str)] = &[
    ("en-US", include_str!("../i18n/en-US/pulseboard-ui.ftl")),
    ("es-ES", include_str!("../i18n/es-ES/pulseboard-ui.ftl")),
];

/// Message keys defined in a Fluent file.
///
/// Only top-level `key = ...` lines count; comments, attributes and
/// continuation lines are skipped. Duplicates are reported separately.
fn message_keys(src: &str) -> (BTreeSet<String>, Vec<String>) {
    let mut keys = BTreeSet::new();
    let mut dups = Vec::new();

    for line in src.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((left, _)) = line.split_once('=') else {
            continue;
        };
        let key = left.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            continue;
        }
        if !keys.insert(key.to_string()) {
            dups.push(key.to_string());
        }
    }

    (keys, dups)
}

fn fallback_keys() -> BTreeSet<String> {
    message_keys(LOCALES[0].1).0
}

#[test]
fn locales_have_no_duplicate_keys() {
    for (locale, src) in LOCALES {
        let (keys, dups) = message_keys(src);
        assert!(!keys.is_empty(), "{locale} defines no messages");
        assert!(dups.is_empty(), "{locale} defines keys twice: {dups:?}");
    }
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = fallback_keys();
    let mut failures = Vec::new();

    for (locale, src) in &LOCALES[1..] {
        let (keys, _) = message_keys(src);
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }
    }

    assert!(
        failures.is_empty(),
        "translation completeness check failed:\n  {}",
        failures.join("\n  ")
    );
}

/// Every `t!("...")` key used in the crate's sources resolves in the fallback.
#[test]
fn keys_used_in_sources_exist() {
    let fallback = fallback_keys();
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut used = BTreeSet::new();
    collect_used_keys(&src_dir, &mut used);

    assert!(used.contains("app-title"));
    let missing: Vec<_> = used.difference(&fallback).cloned().collect();
    assert!(missing.is_empty(), "keys missing from en-US: {missing:?}");
}

fn collect_used_keys(dir: &Path, used: &mut BTreeSet<String>) {
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_used_keys(&path, used);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let src = std::fs::read_to_string(&path).unwrap();
        for (at, marker) in src.match_indices("t!(\"") {
            // Skip `format!(`, `assert!(` and other macros ending in `t`.
            let prev = src[..at].chars().next_back();
            if prev.is_some_and(|c| c.is_alphanumeric() || c == '_') {
                continue;
            }
            let rest = &src[at + marker.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                // Message ids only; skips format strings with placeholders.
                if key.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
                    used.insert(key.to_string());
                }
            }
        }
    }
}
