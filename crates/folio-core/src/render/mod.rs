pub mod pdfium;

use crate::error::{FolioError, Result};
use crate::source::DocumentSource;

pub use self::pdfium::{bind_pdfium, PdfiumRenderer};

/// Overlay layers drawn on top of the page raster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderLayers {
    pub text: bool,
    pub annotations: bool,
}

/// One page to rasterize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Target bitmap width in physical pixels. Height follows the page aspect ratio.
    pub width_px: u32,
    pub layers: RenderLayers,
}

/// RGBA8 raster of a single page.
#[derive(Clone, Debug)]
pub struct PageBitmap {
    pub page: u32,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// The external PDF engine, seen as an opaque capability.
pub trait PageRenderer {
    /// Open `source`, replacing any open document. Returns the page count.
    fn open(&mut self, source: &DocumentSource) -> Result<u32>;

    fn render_page(&mut self, request: &PageRequest) -> Result<PageBitmap>;

    fn close(&mut self);
}

/// Stand-in used when no PDF engine could be bound.
///
/// Every call fails with the original bind error, so the viewer reaches a
/// failed state instead of waiting forever.
#[derive(Clone, Debug)]
pub struct UnavailableRenderer {
    reason: String,
}

impl UnavailableRenderer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PageRenderer for UnavailableRenderer {
    fn open(&mut self, _source: &DocumentSource) -> Result<u32> {
        Err(FolioError::RendererUnavailable(self.reason.clone()))
    }

    fn render_page(&mut self, _request: &PageRequest) -> Result<PageBitmap> {
        Err(FolioError::RendererUnavailable(self.reason.clone()))
    }

    fn close(&mut self) {}
}
