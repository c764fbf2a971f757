//! Shared UI crate for Pulseboard: startup data, charts, the view controller
//! and the dashboard page. Platform crates only launch it.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Brand bar + locale switcher (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}
