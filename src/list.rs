//! Cursor movement over a flat list.
//!
//! The dialog owns Up/Down itself (they wrap); everything else that moves
//! a list cursor lands here: Home, End and paging. The controller forwards
//! keys it did not consume and resynchronizes its cursor afterwards, so
//! this type stays a dumb position holder with clamping.

use crate::input::Key;

/// Rows jumped by PageUp/PageDown.
const PAGE: usize = 10;

/// Cursor over `len` rows, clamped at the edges (no wrapping here).
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCursor {
    len: usize,
    cursor: usize,
}

impl ListCursor {
    pub fn new(len: usize) -> Self {
        Self { len, cursor: 0 }
    }

    /// Current position. Meaningless when the list is empty.
    pub fn get(&self) -> usize {
        self.cursor
    }

    /// Move to `index`, clamped into range.
    pub fn set(&mut self, index: usize) {
        self.cursor = index.min(self.len.saturating_sub(1));
    }

    /// Update the row count, keeping the cursor in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Apply a navigation key. Returns true if the key meant something,
    /// whether or not the cursor actually moved.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.len == 0 {
            return false;
        }
        let last = self.len - 1;
        match key {
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = last,
            Key::PageUp => self.cursor = self.cursor.saturating_sub(PAGE),
            Key::PageDown => self.cursor = (self.cursor + PAGE).min(last),
            _ => return false,
        }
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
