use std::time::Instant;

use folio_core::consts::SKELETON_PAGE_HEIGHT;

use crate::app::FolioApp;

use super::helpers::{centered_rect, skeleton_block, BODY_TEXT};

/// The responsive page frame. Measures its own width every frame and feeds the tracker.
pub fn show(ui: &mut egui::Ui, app: &mut FolioApp, now: Instant) {
    app.viewer.observe_width(ui.available_width());
    let width = app.viewer.render_width();

    if let Some(reason) = app.viewer.failure() {
        show_failure(ui, reason);
        return;
    }

    if app.viewer.is_loading(now) {
        skeleton_block(ui, egui::vec2(width, SKELETON_PAGE_HEIGHT));
        return;
    }

    let shown = app.page.texture.as_ref().map(|t| t.id());
    match (shown, app.page.display_height(width)) {
        (Some(texture_id), Some(height)) => {
            let rect = centered_rect(ui, egui::vec2(width, height));
            ui.painter().rect_filled(rect, 0.0, egui::Color32::WHITE);
            ui.painter().image(
                texture_id,
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        _ => skeleton_block(ui, egui::vec2(width, SKELETON_PAGE_HEIGHT)),
    }

    if let Some(ref message) = app.page.error {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.colored_label(egui::Color32::LIGHT_RED, format!("Page unavailable: {message}"));
        });
    }
}

fn show_failure(ui: &mut egui::Ui, reason: &str) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Failed to load document")
                .size(22.0)
                .strong()
                .color(egui::Color32::LIGHT_RED),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(reason).color(BODY_TEXT));
    });
    ui.add_space(40.0);
}
