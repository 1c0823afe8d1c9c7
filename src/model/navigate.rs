// src/model/navigate.rs

/// Wrap-around cursor over `len` records (the "previous / next" buttons).
/// With `len == 0` every move is a no-op returning `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    len: usize,
}

impl Navigator {
    pub fn new(len: usize) -> Self { Self { index: 0, len } }

    #[inline] pub fn len(&self) -> usize { self.len }
    #[inline] pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Jump to `index`; ignored if out of range.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len { return None; }
        self.index = index;
        Some(index)
    }

    pub fn advance(&mut self) -> Option<usize> {
        self.index = self.peek_next()?;
        Some(self.index)
    }

    pub fn retreat(&mut self) -> Option<usize> {
        self.index = self.peek_prev()?;
        Some(self.index)
    }

    pub fn peek_next(&self) -> Option<usize> {
        (self.len > 0).then(|| (self.index + 1) % self.len)
    }

    pub fn peek_prev(&self) -> Option<usize> {
        (self.len > 0).then(|| (self.index + self.len - 1) % self.len)
    }

    /// New record count (after a reload or delete). Keeps the index if still valid.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        if self.index >= len { self.index = len.saturating_sub(1); }
    }
}
