//! Cursor memory across dialog instances.
//!
//! Menus are rebuilt every time a screen is entered, but users expect the
//! cursor where they left it. `SelectionMemory` is a small shared id->cursor
//! store: the embedding application creates one handle for the process and
//! passes clones to every dialog it constructs. Dialogs write on every
//! cursor change and read once, at construction. Entries are never removed.
//!
//! The handle is intentionally not `Send`: the widget set is single
//! threaded, and tests get isolation by creating fresh instances.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared id -> cursor store. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct SelectionMemory {
    slots: Rc<RefCell<HashMap<String, usize>>>,
}

impl SelectionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last remembered cursor for `id`, if any.
    pub fn recall(&self, id: &str) -> Option<usize> {
        self.slots.borrow().get(id).copied()
    }

    /// Store the cursor for `id`, replacing any previous value.
    pub fn remember(&self, id: &str, cursor: usize) {
        self.slots.borrow_mut().insert(id.to_string(), cursor);
    }
}

// =============================================================================
// Tests
// =============================================================================
