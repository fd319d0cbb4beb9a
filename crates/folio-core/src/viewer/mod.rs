mod pagination;
mod width;

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::FolioError;

pub use pagination::Pagination;
pub use width::{WidthSource, WidthTracker};

/// Lifecycle of the embedded document.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerPhase {
    /// Waiting for the renderer to report a page count.
    Loading,
    /// Page count known. Content stays hidden until `reveal_at` passes.
    Ready {
        pagination: Pagination,
        reveal_at: Option<Instant>,
    },
    /// The renderer could not open the document.
    Failed { reason: String },
}

/// What the pagination bar should show for the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationControls {
    pub show_prev: bool,
    pub show_next: bool,
    pub label: String,
}

/// State of the portfolio viewer: document phase plus container width.
#[derive(Clone, Debug)]
pub struct ViewerState {
    phase: ViewerPhase,
    width: WidthTracker,
}

impl ViewerState {
    pub fn new(width: WidthTracker) -> Self {
        Self {
            phase: ViewerPhase::Loading,
            width,
        }
    }

    pub fn phase(&self) -> &ViewerPhase {
        &self.phase
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        match &self.phase {
            ViewerPhase::Ready { pagination, .. } => Some(pagination),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            ViewerPhase::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// The renderer reported the page count.
    pub fn on_document_loaded(&mut self, total_pages: u32, now: Instant, reveal_delay: Duration) {
        if self.phase != ViewerPhase::Loading {
            warn!(total_pages, "Page count reported outside of loading, ignored");
            return;
        }

        self.phase = match Pagination::new(total_pages) {
            Some(pagination) => {
                info!(pages = total_pages, "Document loaded");
                let reveal_at = if reveal_delay.is_zero() {
                    None
                } else {
                    now.checked_add(reveal_delay)
                };
                ViewerPhase::Ready {
                    pagination,
                    reveal_at,
                }
            }
            None => {
                warn!("Document reported zero pages");
                ViewerPhase::Failed {
                    reason: FolioError::EmptyDocument.to_string(),
                }
            }
        };
    }

    pub fn on_load_failed(&mut self, reason: impl Into<String>) {
        if self.phase != ViewerPhase::Loading {
            return;
        }
        let reason = reason.into();
        warn!(%reason, "Document failed to load");
        self.phase = ViewerPhase::Failed { reason };
    }

    /// Clear the reveal deadline once it has passed. Returns `true` when it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let ViewerPhase::Ready { reveal_at, .. } = &mut self.phase {
            if reveal_at.is_some_and(|at| now >= at) {
                *reveal_at = None;
                return true;
            }
        }
        false
    }

    /// Time left before the content is revealed, if a reveal is pending.
    pub fn reveal_remaining(&self, now: Instant) -> Option<Duration> {
        match &self.phase {
            ViewerPhase::Ready {
                reveal_at: Some(at),
                ..
            } => Some(at.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// True while the loading placeholder should be shown.
    pub fn is_loading(&self, now: Instant) -> bool {
        match &self.phase {
            ViewerPhase::Loading => true,
            ViewerPhase::Ready { reveal_at, .. } => reveal_at.is_some_and(|at| now < at),
            ViewerPhase::Failed { .. } => false,
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.navigate(Pagination::next)
    }

    pub fn prev_page(&mut self) -> bool {
        self.navigate(Pagination::prev)
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.navigate(|p| p.go_to(page))
    }

    fn navigate(&mut self, step: impl FnOnce(&mut Pagination) -> bool) -> bool {
        match &mut self.phase {
            ViewerPhase::Ready { pagination, .. } => {
                let moved = step(pagination);
                if moved {
                    debug!(page = pagination.current(), "Page changed");
                }
                moved
            }
            _ => false,
        }
    }

    /// Controls for the pagination bar. `None` until the page count is known.
    pub fn controls(&self) -> Option<PaginationControls> {
        self.pagination().map(|p| PaginationControls {
            show_prev: p.has_prev(),
            show_next: p.has_next(),
            label: p.label(),
        })
    }

    pub fn observe_width(&mut self, width: f32) -> bool {
        self.width.observe(width)
    }

    pub fn render_width(&self) -> f32 {
        self.width.render_width()
    }
}
