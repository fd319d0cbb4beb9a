use std::sync::mpsc;
use std::time::Instant;

use folio_core::render::{PageRenderer, PageRequest};
use folio_core::source::DocumentSource;
use tracing::{debug, warn};

use crate::messages::WorkerResult;

use super::send;

pub(super) fn handle_open<R: PageRenderer>(
    renderer: &mut R,
    source: &DocumentSource,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match renderer.open(source) {
        Ok(page_count) => send(tx, ctx, WorkerResult::DocumentLoaded { page_count }),
        Err(e) => {
            warn!(source = %source, error = %e, "Open failed");
            send(
                tx,
                ctx,
                WorkerResult::LoadFailed {
                    message: e.to_string(),
                },
            );
        }
    }
}

pub(super) fn handle_render<R: PageRenderer>(
    renderer: &mut R,
    request: &PageRequest,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match renderer.render_page(request) {
        Ok(bitmap) => {
            debug!(page = request.page, elapsed = ?start.elapsed(), "Page ready");
            send(
                tx,
                ctx,
                WorkerResult::PageRendered {
                    request: *request,
                    bitmap,
                },
            );
        }
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::RenderFailed {
                request: *request,
                message: e.to_string(),
            },
        ),
    }
}
