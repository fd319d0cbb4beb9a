use folio_core::render::{PageBitmap, PageRequest};

use crate::convert::bitmap_to_color_image;

/// Texture of the currently displayed page plus bookkeeping for render requests.
#[derive(Default)]
pub struct PageState {
    pub texture: Option<egui::TextureHandle>,
    /// Pixel size of the texture.
    pub bitmap_size: Option<[u32; 2]>,
    /// Last request sent to the worker.
    pub requested: Option<PageRequest>,
    /// Last render error for the requested page.
    pub error: Option<String>,
}

impl PageState {
    /// Returns `true` when `request` differs from the last one sent.
    pub fn needs_request(&self, request: &PageRequest) -> bool {
        self.requested.as_ref() != Some(request)
    }

    pub fn mark_requested(&mut self, request: PageRequest) {
        self.requested = Some(request);
        self.error = None;
    }

    /// Upload a rendered bitmap unless a different page has been requested since.
    pub fn accept(&mut self, ctx: &egui::Context, bitmap: &PageBitmap) -> bool {
        if self.requested.is_some_and(|r| r.page != bitmap.page) {
            return false;
        }

        let image = bitmap_to_color_image(bitmap);
        self.texture = Some(ctx.load_texture("page", image, egui::TextureOptions::LINEAR));
        self.bitmap_size = Some([bitmap.width, bitmap.height]);
        self.error = None;
        true
    }

    pub fn reject(&mut self, request: &PageRequest, message: String) {
        if self.requested.as_ref() == Some(request) {
            self.error = Some(message);
        }
    }

    /// Display height for a page shown `width` points wide.
    pub fn display_height(&self, width: f32) -> Option<f32> {
        let [w, h] = self.bitmap_size?;
        (w > 0).then(|| width * h as f32 / w as f32)
    }
}
