//! Startup configuration.
//!
//! There are no flags or environment variables: everything is a compile-time
//! default, and the workbook is looked up next to the crate (debug) or next to
//! the executable (release), the same way bundled resources are resolved.

use std::path::PathBuf;

pub const WORKBOOK_FILE: &str = "data.xlsx";
pub const WORKBOOK_SHEET: &str = "Sheet1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// `None` where there is no filesystem to check (browser bundle).
    pub workbook_path: Option<PathBuf>,
    pub workbook_sheet: String,
}

impl DashboardConfig {
    pub fn resolve() -> Self {
        Self {
            workbook_path: default_workbook_path(),
            workbook_sheet: WORKBOOK_SHEET.to_string(),
        }
    }

    /// Configuration with no workbook boundary at all.
    pub fn without_workbook() -> Self {
        Self {
            workbook_path: None,
            workbook_sheet: WORKBOOK_SHEET.to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::resolve()
    }
}

#[cfg(target_arch = "wasm32")]
fn default_workbook_path() -> Option<PathBuf> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn default_workbook_path() -> Option<PathBuf> {
    Some(resource_dir().join(WORKBOOK_FILE))
}

#[cfg(not(target_arch = "wasm32"))]
fn resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
