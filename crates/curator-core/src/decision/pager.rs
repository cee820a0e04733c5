//! Cursor over the working set for the one-photo-at-a-time presentation.

/// Zero-based position in the working set.
///
/// The pager does not own the photos; every move takes the current length so
/// it stays valid across reloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    index: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves forward; stays on the last photo.
    pub fn next(&mut self, len: usize) -> bool {
        if self.index + 1 < len {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves back; stays on the first photo.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `index` if it is inside the working set.
    pub fn goto(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Pulls the cursor back inside a working set of `len` photos.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
        } else if self.index >= len {
            self.index = len - 1;
        }
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.index + 1 < len
    }
}
