use std::f64::consts::PI;

/// Page background (slate-800).
pub(crate) const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
/// Hero section background (gray-50).
pub(crate) const HERO_BG: egui::Color32 = egui::Color32::from_rgb(249, 250, 251);
/// Skeleton placeholder fill (gray-700).
pub(crate) const SKELETON: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
pub(crate) const BUTTON_BORDER: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
pub(crate) const BODY_TEXT: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
pub(crate) const LINK: egui::Color32 = egui::Color32::from_rgb(14, 165, 233);
pub(crate) const HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(216, 180, 254);

/// Outlined, rounded button used by the pagination bar.
pub(crate) fn outlined_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(label)
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.0, BUTTON_BORDER))
            .corner_radius(4.0)
            .min_size(egui::vec2(48.0, 28.0)),
    )
}

/// Skeleton fill with a slow opacity pulse. Keeps repainting while visible.
pub(crate) fn pulse_color(ui: &egui::Ui) -> egui::Color32 {
    let t = ui.input(|i| i.time);
    let factor = 0.75 + 0.25 * (t * PI).cos();
    ui.ctx().request_repaint();
    SKELETON.gamma_multiply(factor as f32)
}

/// Paint a skeleton block of `size`, centered horizontally in the remaining width.
pub(crate) fn skeleton_block(ui: &mut egui::Ui, size: egui::Vec2) {
    let rect = centered_rect(ui, size);
    let color = pulse_color(ui);
    ui.painter().rect_filled(rect, 4.0, color);
}

/// Allocate a full-width row of `size.y` and return a `size` rect centered in it.
pub(crate) fn centered_rect(ui: &mut egui::Ui, size: egui::Vec2) -> egui::Rect {
    let row_width = ui.available_width().max(size.x);
    let (row, _) = ui.allocate_exact_size(egui::vec2(row_width, size.y), egui::Sense::hover());
    egui::Rect::from_center_size(row.center(), size)
}
