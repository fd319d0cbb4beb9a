use folio_core::assets::DecodedImage;
use folio_core::render::{PageBitmap, PageRequest};
use folio_core::source::DocumentSource;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Open the document and report its page count.
    OpenDocument { source: DocumentSource },

    /// Rasterize one page. Queued requests are coalesced to the newest.
    RenderPage { request: PageRequest },

    /// Close the document and exit the worker loop.
    Shutdown,
}

/// Results sent from worker threads back to UI thread.
pub enum WorkerResult {
    DocumentLoaded {
        page_count: u32,
    },
    LoadFailed {
        message: String,
    },
    PageRendered {
        request: PageRequest,
        bitmap: PageBitmap,
    },
    RenderFailed {
        request: PageRequest,
        message: String,
    },
    HeroImageLoaded {
        image: DecodedImage,
    },
    HeroImageFailed {
        message: String,
    },
}
