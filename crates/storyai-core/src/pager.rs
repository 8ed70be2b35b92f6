//! Bounded page cursor for the story viewer.

/// Current page index over a story with `len` pages.
///
/// Holds `index < len` whenever `len > 0` and `index == 0` otherwise.
/// Navigation never wraps; at a boundary it is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn can_previous(&self) -> bool {
        self.index > 0
    }

    /// Move forward one page. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Move back one page. Returns whether the index changed.
    pub fn previous(&mut self) -> bool {
        if self.can_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Adopt a new page count, keeping the index when it is still in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Back to the first page.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// `Page {n} / {total}` label for the controls.
    pub fn label(&self) -> String {
        format!("Page {} / {}", self.index + 1, self.len)
    }
}
