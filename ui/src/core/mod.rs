//! Startup data: sample tables, screenshot payload, workbook check and the
//! read-only context handed to the UI.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod image;
pub mod workbook;

use std::sync::Arc;

use dioxus::logger::tracing::info;

use config::DashboardConfig;
use dataset::Dataset;
use error::DashboardResult;
use image::ImagePayload;
use workbook::WorkbookSource;

/// Everything the widgets read. Built once, shared through Dioxus context,
/// never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardContext {
    inner: Arc<ContextInner>,
}

#[derive(Debug, PartialEq)]
struct ContextInner {
    dataset: Dataset,
    screenshot: ImagePayload,
    workbook: Option<WorkbookSource>,
}

impl DashboardContext {
    /// Load the startup data. Any failure here means the dashboard must not start.
    pub fn load(config: &DashboardConfig) -> DashboardResult<Self> {
        let workbook = match &config.workbook_path {
            Some(path) => {
                let source = WorkbookSource::open(path, &config.workbook_sheet)?;
                info!(
                    path = %source.path.display(),
                    sheet = %source.sheet,
                    bytes = source.size_bytes,
                    "workbook found; dashboard tables use the bundled sample data"
                );
                Some(source)
            }
            None => None,
        };

        let screenshot = ImagePayload::screenshot()?;
        info!(
            width = screenshot.width(),
            height = screenshot.height(),
            "screenshot decoded"
        );

        Ok(Self::from_parts(Dataset::sample(), screenshot, workbook))
    }

    pub fn from_parts(
        dataset: Dataset,
        screenshot: ImagePayload,
        workbook: Option<WorkbookSource>,
    ) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                dataset,
                screenshot,
                workbook,
            }),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.inner.dataset
    }

    pub fn screenshot(&self) -> &ImagePayload {
        &self.inner.screenshot
    }

    pub fn workbook(&self) -> Option<&WorkbookSource> {
        self.inner.workbook.as_ref()
    }
}
