use std::sync::mpsc;
use std::time::Instant;

use folio_core::assets::ImageSource;
use folio_core::config::ViewerConfig;
use folio_core::render::PageRequest;
use folio_core::viewer::ViewerState;
use tracing::{debug, warn};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{HeroState, PageState};
use crate::workers::{self, WorkerHandle};

pub struct FolioApp {
    pub config: ViewerConfig,
    pub viewer: ViewerState,
    pub page: PageState,
    pub hero: HeroState,
    /// Width of the pagination row on the last frame, used to center it.
    pub pagination_row_width: f32,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    worker: WorkerHandle,
}

impl FolioApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let worker = workers::spawn_worker(config.render.clone(), result_tx.clone(), ctx.clone());
        worker.send(WorkerCommand::OpenDocument {
            source: config.document_source(),
        });

        let hero = match config.hero.image.as_deref() {
            Some(image) => {
                workers::spawn_hero_image_load(
                    ImageSource::parse(image),
                    config.images.clone(),
                    result_tx,
                    ctx.clone(),
                );
                HeroState::Loading
            }
            None => HeroState::Empty,
        };

        Self {
            viewer: ViewerState::new(config.width_tracker()),
            page: PageState::default(),
            hero,
            pagination_row_width: 0.0,
            result_rx,
            worker,
            config,
        }
    }

    /// Drain all pending results from the workers.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::DocumentLoaded { page_count } => {
                    self.viewer
                        .on_document_loaded(page_count, Instant::now(), self.config.reveal_delay());
                }
                WorkerResult::LoadFailed { message } => {
                    self.viewer.on_load_failed(message);
                }
                WorkerResult::PageRendered { request, bitmap } => {
                    if !self.page.accept(ctx, &bitmap) {
                        debug!(page = request.page, "Dropped stale page render");
                    }
                }
                WorkerResult::RenderFailed { request, message } => {
                    warn!(page = request.page, %message, "Render failed");
                    self.page.reject(&request, message);
                }
                WorkerResult::HeroImageLoaded { image } => {
                    self.hero.set_image(ctx, &image);
                }
                WorkerResult::HeroImageFailed { message } => {
                    self.hero = HeroState::Failed { message };
                }
            }
        }
    }

    /// Ask the worker for the current page at the current width, once per change.
    fn request_render(&mut self, ctx: &egui::Context) {
        let Some(pagination) = self.viewer.pagination() else {
            return;
        };

        let width_px = (self.viewer.render_width() * ctx.pixels_per_point()).round() as u32;
        let request = PageRequest {
            page: pagination.current(),
            width_px,
            layers: self.config.render.layers(),
        };

        if self.page.needs_request(&request) {
            self.page.mark_requested(request);
            self.worker.send(WorkerCommand::RenderPage { request });
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        let now = Instant::now();
        self.viewer.tick(now);
        if let Some(remaining) = self.viewer.reveal_remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        panels::pagination::handle_keys(ctx, self, now);
        panels::footer::show(ctx, self);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(panels::helpers::PAGE_BG))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        panels::hero::show(ui, self);
                        ui.add_space(40.0);
                        panels::pagination::show(ui, self, now);
                        ui.add_space(40.0);
                        panels::document::show(ui, self, now);
                        ui.add_space(40.0);
                    });
            });

        self.request_render(ctx);
    }
}
