/// How the container width is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthSource {
    /// Every measured width is republished.
    Observed,
    /// No observer is available; the cap is used as-is.
    Fixed,
}

/// Tracks the measured width of the element hosting the rendered page.
#[derive(Clone, Debug, PartialEq)]
pub struct WidthTracker {
    source: WidthSource,
    max_width: f32,
    container_width: Option<f32>,
}

impl WidthTracker {
    pub fn observing(max_width: f32) -> Self {
        Self {
            source: WidthSource::Observed,
            max_width,
            container_width: None,
        }
    }

    pub fn fixed(max_width: f32) -> Self {
        Self {
            source: WidthSource::Fixed,
            max_width,
            container_width: None,
        }
    }

    pub fn source(&self) -> WidthSource {
        self.source
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    /// Last measured width, if one is known.
    pub fn container_width(&self) -> Option<f32> {
        self.container_width
    }

    /// Record a size notification. Returns `true` only when the stored width changed.
    ///
    /// Widths that are not finite and positive are stored as unknown.
    pub fn observe(&mut self, width: f32) -> bool {
        if self.source == WidthSource::Fixed {
            return false;
        }

        let next = (width.is_finite() && width > 0.0).then_some(width);
        if next == self.container_width {
            return false;
        }

        self.container_width = next;
        true
    }

    /// Width to render the page at: the measured width capped at `max_width`.
    pub fn render_width(&self) -> f32 {
        match self.container_width {
            Some(width) => width.min(self.max_width),
            None => self.max_width,
        }
    }
}
