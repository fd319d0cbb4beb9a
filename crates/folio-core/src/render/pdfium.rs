//! PDFium-backed page renderer.

use std::path::PathBuf;

use pdfium_render::prelude::*;
use tracing::{debug, info, warn};

use crate::config::RenderOptions;
use crate::error::{FolioError, Result};
use crate::source::DocumentSource;

use super::{PageBitmap, PageRenderer, PageRequest};

/// Bind the PDFium shared library.
///
/// Search order:
/// 1. `options.library_dir`, when set
/// 2. The executable's directory
/// 3. The current working directory
/// 4. System library paths
pub fn bind_pdfium(options: &RenderOptions) -> Result<Pdfium> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    let candidates: Vec<PathBuf> = options
        .library_dir
        .iter()
        .cloned()
        .chain(exe_dir)
        .chain(std::iter::once(PathBuf::from("./")))
        .collect();

    for dir in &candidates {
        match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir)) {
            Ok(bindings) => {
                info!(dir = %dir.display(), "Bound PDFium");
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => debug!(dir = %dir.display(), error = %e, "PDFium not found"),
        }
    }

    let bindings = Pdfium::bind_to_system_library()
        .map_err(|e| FolioError::RendererUnavailable(e.to_string()))?;
    info!("Bound system PDFium");
    Ok(Pdfium::new(bindings))
}

/// Renderer over a bound PDFium instance.
///
/// Borrows the instance, so the owning thread binds once and keeps the
/// library alive for as long as documents are open.
pub struct PdfiumRenderer<'a> {
    pdfium: &'a Pdfium,
    document: Option<PdfDocument<'a>>,
}

impl<'a> PdfiumRenderer<'a> {
    pub fn new(pdfium: &'a Pdfium, options: &RenderOptions) -> Self {
        for (label, dir) in [
            ("cmap", &options.cmap_dir),
            ("standard font", &options.standard_font_dir),
        ] {
            if !dir.is_dir() {
                debug!(
                    dir = %dir.display(),
                    "{label} directory not found, using PDFium built-ins"
                );
            }
        }

        if options.text_layer {
            warn!("Text layer requested; rasterized pages carry no separate text layer");
        }

        Self {
            pdfium,
            document: None,
        }
    }
}

impl PageRenderer for PdfiumRenderer<'_> {
    fn open(&mut self, source: &DocumentSource) -> Result<u32> {
        self.document = None;

        let document = match source {
            DocumentSource::Path(path) => self.pdfium.load_pdf_from_file(path, None),
            DocumentSource::InMemory(bytes) => {
                self.pdfium.load_pdf_from_byte_vec(bytes.to_vec(), None)
            }
        }
        .map_err(|e| FolioError::Load(e.to_string()))?;

        let page_count = document.pages().len() as u32;
        info!(source = %source, pages = page_count, "Opened document");
        self.document = Some(document);
        Ok(page_count)
    }

    fn render_page(&mut self, request: &PageRequest) -> Result<PageBitmap> {
        let document = self.document.as_ref().ok_or(FolioError::NoDocument)?;
        let total = document.pages().len() as u32;

        if request.page == 0 || request.page > total {
            return Err(FolioError::PageOutOfRange {
                page: request.page,
                total,
            });
        }

        let render_err = |e: PdfiumError| FolioError::Render {
            page: request.page,
            message: e.to_string(),
        };

        let index = (request.page - 1) as PdfPageIndex;
        let page = document.pages().get(index).map_err(render_err)?;

        let config = PdfRenderConfig::new()
            .set_target_width(request.width_px.max(1) as Pixels)
            .render_annotations(request.layers.annotations)
            .render_form_data(request.layers.annotations);

        let bitmap = page.render_with_config(&config).map_err(render_err)?;
        let rendered = PageBitmap {
            page: request.page,
            width: bitmap.width() as u32,
            height: bitmap.height() as u32,
            rgba: bitmap.as_rgba_bytes().to_vec(),
        };

        debug!(
            page = rendered.page,
            width = rendered.width,
            height = rendered.height,
            "Rendered page"
        );
        Ok(rendered)
    }

    fn close(&mut self) {
        if self.document.take().is_some() {
            debug!("Closed document");
        }
    }
}
