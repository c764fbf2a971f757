//! Error type shared by startup loading and selector parsing.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("workbook not found at {}", .0.display())]
    WorkbookMissing(PathBuf),

    #[error("workbook at {} is not a spreadsheet: {reason}", path.display())]
    WorkbookInvalid { path: PathBuf, reason: &'static str },

    #[error("workbook at {} is not a readable archive: {source}", path.display())]
    WorkbookArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("workbook at {} has no sheet named `{sheet}`", path.display())]
    SheetMissing { path: PathBuf, sheet: String },

    #[error("failed reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("screenshot could not be decoded: {0}")]
    ImageDecode(#[from] png::DecodingError),

    #[error("screenshot is empty")]
    ImageEmpty,

    #[error("unknown view mode `{0}`")]
    UnknownViewMode(String),

    #[error("unknown widget `{0}`")]
    UnknownWidget(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
