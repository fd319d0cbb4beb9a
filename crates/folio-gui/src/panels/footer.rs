use chrono::Datelike;

use crate::app::FolioApp;

use super::helpers::PAGE_BG;

pub fn show(ctx: &egui::Context, app: &FolioApp) {
    let year = chrono::Local::now().year();
    egui::TopBottomPanel::bottom("footer")
        .frame(egui::Frame::NONE.fill(PAGE_BG).inner_margin(20.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(copyright_line(&app.config.hero.footer_name, year));
            });
        });
}

fn copyright_line(name: &str, year: i32) -> String {
    format!("{name} © {year}")
}

#[cfg(test)]
mod tests {
    use super::copyright_line;

    #[test]
    fn copyright_names_owner_and_year() {
        assert_eq!(copyright_line("Ada Lovelace", 2026), "Ada Lovelace © 2026");
    }
}
