use std::time::Instant;

use crate::app::FolioApp;

use super::helpers::{outlined_button, skeleton_block};

const ROW_HEIGHT: f32 = 28.0;

pub fn show(ui: &mut egui::Ui, app: &mut FolioApp, now: Instant) {
    if app.viewer.is_loading(now) {
        show_placeholder(ui);
        return;
    }

    let Some(controls) = app.viewer.controls() else {
        return;
    };

    let pad = row_padding(ui.available_width(), app.pagination_row_width);
    let row = ui.horizontal(|ui| {
        ui.add_space(pad);
        let start = ui.cursor().left();

        if controls.show_prev && outlined_button(ui, "Prev").clicked() {
            app.viewer.prev_page();
        }
        ui.label(controls.label.as_str());
        if controls.show_next && outlined_button(ui, "Next").clicked() {
            app.viewer.next_page();
        }

        ui.cursor().left() - start
    });

    // The pad came from the previous width. Redo the pass instead of showing a shifted row.
    if needs_remeasure(app.pagination_row_width, row.inner) {
        ui.ctx().request_discard("pagination row resized");
    }
    app.pagination_row_width = row.inner;
}

fn row_padding(available: f32, row_width: f32) -> f32 {
    ((available - row_width) / 2.0).max(0.0)
}

fn needs_remeasure(previous: f32, measured: f32) -> bool {
    (previous - measured).abs() > 0.5
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let pad = ((ui.available_width() - 160.0) / 2.0).max(0.0);
        ui.add_space(pad);
        ui.allocate_ui(egui::vec2(100.0, ROW_HEIGHT), |ui| {
            skeleton_block(ui, egui::vec2(96.0, 20.0));
        });
        ui.allocate_ui(egui::vec2(56.0, ROW_HEIGHT), |ui| {
            skeleton_block(ui, egui::vec2(48.0, ROW_HEIGHT));
        });
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageKey {
    Next,
    Prev,
    First,
    Last,
}

/// Arrow keys and PageUp/PageDown step through pages; Home and End jump to the ends.
///
/// Runs before the scroll area, and consumes the keys so the page does not scroll too.
pub fn handle_keys(ctx: &egui::Context, app: &mut FolioApp, now: Instant) {
    if app.viewer.is_loading(now) {
        return;
    }
    let Some(total) = app.viewer.pagination().map(|p| p.total()) else {
        return;
    };

    for key in ctx.input_mut(take_page_keys) {
        match key {
            PageKey::Next => app.viewer.next_page(),
            PageKey::Prev => app.viewer.prev_page(),
            PageKey::First => app.viewer.go_to_page(1),
            PageKey::Last => app.viewer.go_to_page(total),
        };
    }
}

fn take_page_keys(input: &mut egui::InputState) -> Vec<PageKey> {
    const BINDINGS: [(egui::Key, PageKey); 6] = [
        (egui::Key::ArrowRight, PageKey::Next),
        (egui::Key::PageDown, PageKey::Next),
        (egui::Key::ArrowLeft, PageKey::Prev),
        (egui::Key::PageUp, PageKey::Prev),
        (egui::Key::Home, PageKey::First),
        (egui::Key::End, PageKey::Last),
    ];

    BINDINGS
        .into_iter()
        .filter(|&(key, _)| input.consume_key(egui::Modifiers::NONE, key))
        .map(|(_, action)| action)
        .collect()
}
