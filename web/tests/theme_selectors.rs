#![cfg(test)]
//! Theme lint for the web build.
//!
//! The shared theme in `ui/assets/theme/main.css` is inlined into the page by
//! `web/src/main.rs`. A renamed or dropped selector would only show up as a
//! styling regression at runtime, so the classes the dashboard components rely
//! on are checked here by substring.
//!
//! When renaming a class, update the component markup and `REQUIRED_SELECTORS`
//! together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "--color-bg",
    "body {",
    ".page {",
    ".visually-hidden",
    // Header
    ".app-header",
    ".app-header__brand-mark",
    ".app-header__locale",
    // Selectors
    ".mode-selector",
    ".mode-selector__option",
    ".widget-selector",
    ".widget-selector__input",
    // Content area
    ".content-area",
    ".content-area__item",
    // Widgets
    ".dashboard-widget",
    ".dashboard-widget__title",
    ".metrics-table",
    ".screenshot",
    // Charts
    ".chart__canvas",
    ".chart__title",
    ".chart__bar",
    ".chart__series",
    ".chart__gridline",
    ".chart__legend-swatch",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .copied()
        .collect();

    assert!(
        missing.is_empty(),
        "missing {} required CSS selectors/tokens in theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "inlined theme looks truncated ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn braces_are_balanced() {
    let open = THEME_CSS.matches('{').count();
    let close = THEME_CSS.matches('}').count();
    assert_eq!(open, close, "unbalanced braces in theme");
}
