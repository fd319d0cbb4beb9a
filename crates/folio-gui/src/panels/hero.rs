use folio_core::config::HeroContent;
use folio_core::consts::HERO_TWO_COLUMN_BREAKPOINT;

use crate::app::FolioApp;
use crate::states::HeroState;

use super::helpers::{BODY_TEXT, HERO_BG, HIGHLIGHT, LINK};

/// Widest the hero image is drawn, in points.
const MAX_IMAGE_WIDTH: f32 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HeroLayout {
    Stacked,
    TwoColumn,
}

impl HeroLayout {
    fn for_width(width: f32) -> Self {
        if width >= HERO_TWO_COLUMN_BREAKPOINT {
            Self::TwoColumn
        } else {
            Self::Stacked
        }
    }
}

pub fn show(ui: &mut egui::Ui, app: &FolioApp) {
    egui::Frame::NONE
        .fill(HERO_BG)
        .inner_margin(egui::Margin::symmetric(32, 40))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let content = &app.config.hero;

            match HeroLayout::for_width(ui.available_width()) {
                HeroLayout::TwoColumn => {
                    ui.columns(2, |cols| {
                        copy_column(&mut cols[0], content, HeroLayout::TwoColumn);
                        image(&mut cols[1], &app.hero, &content.image_alt);
                    });
                }
                HeroLayout::Stacked => {
                    copy_column(ui, content, HeroLayout::Stacked);
                    ui.add_space(24.0);
                    image(ui, &app.hero, &content.image_alt);
                }
            }
        });
}

fn copy_column(ui: &mut egui::Ui, content: &HeroContent, layout: HeroLayout) {
    // Narrow screens break the greeting onto its own line.
    let heading = match layout {
        HeroLayout::Stacked => format!("{}\n{}", content.greeting, content.name),
        HeroLayout::TwoColumn => format!("{} {}", content.greeting, content.name),
    };
    ui.label(
        egui::RichText::new(heading)
            .size(40.0)
            .strong()
            .color(egui::Color32::BLACK),
    );

    ui.add_space(24.0);
    ui.label(egui::RichText::new(&content.bio).size(20.0).color(BODY_TEXT));

    ui.add_space(24.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new(&content.question_prompt)
                .size(20.0)
                .color(BODY_TEXT)
                .background_color(HIGHLIGHT),
        );
        if content.links.is_empty() {
            return;
        }
        ui.label(egui::RichText::new("Ask me on").size(20.0).color(BODY_TEXT));
        for (index, link) in content.links.iter().enumerate() {
            ui.hyperlink_to(
                egui::RichText::new(&link.label).size(20.0).color(LINK),
                &link.url,
            );
            let separator = link_separator(index, content.links.len());
            if !separator.is_empty() {
                ui.label(egui::RichText::new(separator).size(20.0).color(BODY_TEXT));
            }
        }
    });
}

fn image(ui: &mut egui::Ui, state: &HeroState, alt: &str) {
    match state {
        HeroState::Empty => {}
        HeroState::Loading => {
            let side = ui.available_width().min(MAX_IMAGE_WIDTH);
            super::helpers::skeleton_block(ui, egui::vec2(side, side));
        }
        HeroState::Loaded { texture, size } => {
            let width = ui.available_width().min(MAX_IMAGE_WIDTH);
            let height = width * size[1] as f32 / size[0].max(1) as f32;
            let rect = super::helpers::centered_rect(ui, egui::vec2(width, height));
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        HeroState::Failed { message } => {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(alt).italics().color(BODY_TEXT))
                    .on_hover_text(message.as_str());
            });
        }
    }
}

/// Text between the `index`-th link and the next: "A, B or C".
fn link_separator(index: usize, count: usize) -> &'static str {
    match count.saturating_sub(index) {
        0 | 1 => "",
        2 => "or",
        _ => ",",
    }
}
