use folio_core::assets::DecodedImage;

use crate::convert::decoded_to_color_image;

/// Hero image loading status.
#[derive(Default)]
pub enum HeroState {
    /// No image configured.
    #[default]
    Empty,
    Loading,
    Loaded {
        texture: egui::TextureHandle,
        size: [u32; 2],
    },
    Failed {
        message: String,
    },
}

impl HeroState {
    pub fn set_image(&mut self, ctx: &egui::Context, image: &DecodedImage) {
        let color = decoded_to_color_image(image);
        let texture = ctx.load_texture("hero", color, egui::TextureOptions::LINEAR);
        *self = Self::Loaded {
            texture,
            size: [image.width, image.height],
        };
    }
}
