use std::sync::mpsc;
use std::thread::JoinHandle;

use folio_core::config::RenderOptions;
use folio_core::render::{bind_pdfium, PageRenderer, PdfiumRenderer, UnavailableRenderer};
use tracing::{debug, warn};

use crate::messages::{WorkerCommand, WorkerResult};

use super::document;

/// Owns the worker thread. Dropping it shuts the worker down and joins it.
pub struct WorkerHandle {
    cmd_tx: mpsc::Sender<WorkerCommand>,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    pub fn send(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(WorkerCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Worker thread panicked");
            }
        }
    }
}

/// Spawn the worker thread. PDFium is bound on the worker and never leaves it.
pub fn spawn_worker(
    options: RenderOptions,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> WorkerHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    let thread = std::thread::Builder::new()
        .name("folio-worker".into())
        .spawn(move || {
            let bound = bind_pdfium(&options);
            match bound {
                Ok(pdfium) => {
                    let mut renderer = PdfiumRenderer::new(&pdfium, &options);
                    worker_loop(&mut renderer, &cmd_rx, &result_tx, &ctx);
                }
                Err(e) => {
                    warn!(error = %e, "Falling back to unavailable renderer");
                    let mut renderer = UnavailableRenderer::new(e.to_string());
                    worker_loop(&mut renderer, &cmd_rx, &result_tx, &ctx);
                }
            }
        })
        .expect("Failed to spawn worker thread");

    WorkerHandle {
        cmd_tx,
        thread: Some(thread),
    }
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(super) fn worker_loop<R: PageRenderer>(
    renderer: &mut R,
    cmd_rx: &mpsc::Receiver<WorkerCommand>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let mut deferred: Option<WorkerCommand> = None;

    loop {
        let cmd = match deferred.take() {
            Some(cmd) => cmd,
            None => match cmd_rx.recv() {
                Ok(cmd) => cmd,
                Err(_) => break,
            },
        };

        match cmd {
            WorkerCommand::OpenDocument { source } => {
                document::handle_open(renderer, &source, tx, ctx);
            }
            WorkerCommand::RenderPage { mut request } => {
                // Only the newest of a burst of resize/page requests matters.
                while let Ok(next) = cmd_rx.try_recv() {
                    match next {
                        WorkerCommand::RenderPage { request: newer } => request = newer,
                        other => {
                            deferred = Some(other);
                            break;
                        }
                    }
                }
                document::handle_render(renderer, &request, tx, ctx);
            }
            WorkerCommand::Shutdown => break,
        }
    }

    renderer.close();
    debug!("Worker stopped");
}

#[cfg(test)]
mod tests {
    use folio_core::error::{FolioError, Result};
    use folio_core::render::{PageBitmap, PageRequest, RenderLayers};
    use folio_core::source::DocumentSource;

    use super::*;

    #[derive(Default)]
    struct MockRenderer {
        pages: u32,
        fail_open: bool,
        opened: Vec<DocumentSource>,
        rendered: Vec<PageRequest>,
        closed: bool,
    }

    impl PageRenderer for MockRenderer {
        fn open(&mut self, source: &DocumentSource) -> Result<u32> {
            self.opened.push(source.clone());
            if self.fail_open {
                return Err(FolioError::Load("broken xref".into()));
            }
            Ok(self.pages)
        }

        fn render_page(&mut self, request: &PageRequest) -> Result<PageBitmap> {
            self.rendered.push(*request);
            if request.page > self.pages {
                return Err(FolioError::PageOutOfRange {
                    page: request.page,
                    total: self.pages,
                });
            }
            Ok(PageBitmap {
                page: request.page,
                width: request.width_px,
                height: request.width_px * 2,
                rgba: vec![255; (request.width_px * request.width_px * 2 * 4) as usize],
            })
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    fn request(page: u32, width_px: u32) -> PageRequest {
        PageRequest {
            page,
            width_px,
            layers: RenderLayers::default(),
        }
    }

    fn run(renderer: &mut MockRenderer, commands: Vec<WorkerCommand>) -> Vec<WorkerResult> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        for cmd in commands {
            cmd_tx.send(cmd).unwrap();
        }
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();

        worker_loop(renderer, &cmd_rx, &result_tx, &egui::Context::default());
        result_rx.try_iter().collect()
    }

    #[test]
    fn open_reports_page_count() {
        let mut renderer = MockRenderer {
            pages: 13,
            ..Default::default()
        };
        let results = run(
            &mut renderer,
            vec![WorkerCommand::OpenDocument {
                source: DocumentSource::path("portfolio.pdf"),
            }],
        );

        assert!(matches!(
            results.as_slice(),
            [WorkerResult::DocumentLoaded { page_count: 13 }]
        ));
        assert!(renderer.closed);
    }

    #[test]
    fn open_failure_is_reported() {
        let mut renderer = MockRenderer {
            fail_open: true,
            ..Default::default()
        };
        let results = run(
            &mut renderer,
            vec![WorkerCommand::OpenDocument {
                source: DocumentSource::path("missing.pdf"),
            }],
        );

        match results.as_slice() {
            [WorkerResult::LoadFailed { message }] => assert!(message.contains("broken xref")),
            _ => panic!("expected a single LoadFailed"),
        }
    }

    #[test]
    fn queued_renders_coalesce_to_newest() {
        let mut renderer = MockRenderer {
            pages: 5,
            ..Default::default()
        };
        let results = run(
            &mut renderer,
            vec![
                WorkerCommand::RenderPage {
                    request: request(1, 300),
                },
                WorkerCommand::RenderPage {
                    request: request(1, 400),
                },
                WorkerCommand::RenderPage {
                    request: request(2, 500),
                },
            ],
        );

        assert_eq!(renderer.rendered, vec![request(2, 500)]);
        match results.as_slice() {
            [WorkerResult::PageRendered { request: r, bitmap }] => {
                assert_eq!(*r, request(2, 500));
                assert_eq!(bitmap.page, 2);
                assert_eq!(bitmap.width, 500);
            }
            _ => panic!("expected a single PageRendered"),
        }
    }

    #[test]
    fn coalescing_keeps_later_commands() {
        let mut renderer = MockRenderer {
            pages: 5,
            ..Default::default()
        };
        let results = run(
            &mut renderer,
            vec![
                WorkerCommand::RenderPage {
                    request: request(1, 300),
                },
                WorkerCommand::OpenDocument {
                    source: DocumentSource::path("portfolio.pdf"),
                },
                WorkerCommand::RenderPage {
                    request: request(3, 300),
                },
            ],
        );

        assert_eq!(renderer.rendered, vec![request(1, 300), request(3, 300)]);
        assert_eq!(renderer.opened.len(), 1);
        assert_eq!(results.len(), 3);
        assert!(matches!(results[1], WorkerResult::DocumentLoaded { page_count: 5 }));
    }

    #[test]
    fn render_failure_is_reported() {
        let mut renderer = MockRenderer {
            pages: 2,
            ..Default::default()
        };
        let results = run(
            &mut renderer,
            vec![WorkerCommand::RenderPage {
                request: request(9, 300),
            }],
        );

        match results.as_slice() {
            [WorkerResult::RenderFailed { request: r, message }] => {
                assert_eq!(r.page, 9);
                assert!(message.contains("out of range"), "got: {message}");
            }
            _ => panic!("expected a single RenderFailed"),
        }
    }

    #[test]
    fn nothing_runs_after_shutdown() {
        let mut renderer = MockRenderer {
            pages: 2,
            ..Default::default()
        };
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        cmd_tx
            .send(WorkerCommand::RenderPage {
                request: request(1, 100),
            })
            .unwrap();

        worker_loop(&mut renderer, &cmd_rx, &result_tx, &egui::Context::default());

        assert!(renderer.rendered.is_empty());
        assert!(renderer.closed);
        assert_eq!(result_rx.try_iter().count(), 0);
    }

    #[test]
    fn handle_drop_joins_worker() {
        let (result_tx, _result_rx) = mpsc::channel();
        let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();
        let ctx = egui::Context::default();
        let thread = std::thread::spawn(move || {
            let mut renderer = UnavailableRenderer::new("no pdfium in tests");
            worker_loop(&mut renderer, &cmd_rx, &result_tx, &ctx);
        });

        let handle = WorkerHandle {
            cmd_tx,
            thread: Some(thread),
        };
        drop(handle);
    }
}
