//! Screenshot payload: decoded once at startup, displayed as a data URI.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::error::{DashboardError, DashboardResult};

/// Screenshot bundled into the binary.
const SCREENSHOT_PNG: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/screenshot.png"
));

pub const PNG_MIME: &str = "image/png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    mime: &'static str,
    width: u32,
    height: u32,
    data_uri: String,
}

impl ImagePayload {
    /// Decode the bundled screenshot.
    pub fn screenshot() -> DashboardResult<Self> {
        Self::from_png(SCREENSHOT_PNG)
    }

    /// Validate PNG bytes by decoding the first frame, then encode them once
    /// for embedding.
    pub fn from_png(bytes: &[u8]) -> DashboardResult<Self> {
        if bytes.is_empty() {
            return Err(DashboardError::ImageEmpty);
        }

        let decoder = png::Decoder::new(bytes);
        let mut reader = decoder.read_info()?;
        let mut frame = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut frame)?;

        let data_uri = format!("data:{PNG_MIME};base64,{}", STANDARD.encode(bytes));

        Ok(Self {
            mime: PNG_MIME,
            width: info.width,
            height: info.height,
            data_uri,
        })
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}
