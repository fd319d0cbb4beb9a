use folio_core::assets::DecodedImage;
use folio_core::render::PageBitmap;

/// Convert a rendered page (RGBA8) to an egui ColorImage.
pub fn bitmap_to_color_image(bitmap: &PageBitmap) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [bitmap.width as usize, bitmap.height as usize],
        &bitmap.rgba,
    )
}

pub fn decoded_to_color_image(image: &DecodedImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.rgba,
    )
}
