/// Current page within a document of known length.
///
/// Pages are 1-based. `1 <= current <= total` holds for every value
/// produced by this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    current: u32,
    total: u32,
}

impl Pagination {
    /// Start on the first page. Returns `None` for an empty document.
    pub fn new(total: u32) -> Option<Self> {
        (total > 0).then_some(Self { current: 1, total })
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Step forward. No-op on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Step back. No-op on the first page.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to `page`, clamped into `[1, total]`. Returns `true` if the page changed.
    pub fn go_to(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.total);
        let changed = target != self.current;
        self.current = target;
        changed
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }
}
