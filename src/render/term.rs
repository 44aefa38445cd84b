//! Fullscreen terminal presenter.
//!
//! Owns the terminal session for the life of the dialog: raw mode, the
//! alternate screen, optional mouse capture, and frame presentation with
//! differential updates. Between frames only changed cells are written,
//! inside a synchronized-output block, so redraws are flicker free.
//!
//! The core never touches this module; it exists for the demo and for
//! embedding applications that want the plumbing done.

use std::io;

use crossterm::terminal;

use super::ansi;
use super::buffer::FrameBuffer;
use crate::types::Cell;

/// Terminal session and frame presenter.
///
/// `open` enters the session, `present` draws frames, `close` restores the
/// terminal. Dropping the presenter closes the session as a fallback so a
/// panic or early return does not leave the terminal raw.
pub struct Terminal {
    out: ansi::OutputBuffer,
    writer: ansi::CellWriter,
    previous: Option<FrameBuffer>,
    mouse: bool,
    open: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            out: ansi::OutputBuffer::new(),
            writer: ansi::CellWriter::new(),
            previous: None,
            mouse: false,
            open: false,
        }
    }

    /// Current terminal size in cells, with the usual 80x24 fallback.
    pub fn size() -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    /// Enter raw mode and the alternate screen, optionally with mouse
    /// capture.
    pub fn open(&mut self, mouse: bool) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        ansi::enter_alt_screen(&mut self.out)?;
        ansi::cursor_hide(&mut self.out)?;
        ansi::clear_screen(&mut self.out)?;
        if mouse {
            ansi::enable_mouse(&mut self.out)?;
        }
        self.out.flush_stdout()?;
        self.mouse = mouse;
        self.open = true;
        self.invalidate();
        Ok(())
    }

    /// Restore the terminal: mouse off, SGR reset, cursor back, main
    /// screen, cooked mode.
    pub fn close(&mut self) -> io::Result<()> {
        if !self.open {
            return Ok(());
        }
        if self.mouse {
            ansi::disable_mouse(&mut self.out)?;
        }
        ansi::reset(&mut self.out)?;
        ansi::cursor_show(&mut self.out)?;
        ansi::exit_alt_screen(&mut self.out)?;
        self.out.flush_stdout()?;
        terminal::disable_raw_mode()?;
        self.open = false;
        Ok(())
    }

    /// Drop the stored previous frame; the next present redraws fully.
    ///
    /// Call after a resize, when stale cells may survive outside the new
    /// frame's bounds.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Present a frame, writing only cells that changed since the last one.
    pub fn present(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        ansi::begin_sync(&mut self.out)?;
        self.writer.reset();

        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|p| p.width() == frame.width() && p.height() == frame.height());
        if !same_size {
            ansi::reset(&mut self.out)?;
            ansi::clear_screen(&mut self.out)?;
        }

        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let Some(cell) = frame.get(x, y) else {
                    continue;
                };
                let unchanged = same_size
                    && self.previous.as_ref().and_then(|p| p.get(x, y)) == Some(cell)
                    && !cell_forces_redraw(cell);
                if !unchanged {
                    self.writer.write_cell(&mut self.out, x, y, cell);
                }
            }
        }

        ansi::end_sync(&mut self.out)?;
        self.out.flush_stdout()?;
        self.previous = Some(frame.clone());
        Ok(())
    }
}

/// Continuation cells always pass through so the writer can keep its
/// position tracking consistent with what is actually on screen.
#[inline]
fn cell_forces_redraw(cell: &Cell) -> bool {
    cell.char == 0
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_previous_frame() {
        let term = Terminal::new();
        assert!(term.previous.is_none());
        assert!(!term.open);
    }

    #[test]
    fn invalidate_clears_previous() {
        let mut term = Terminal::new();
        term.previous = Some(FrameBuffer::new(4, 2));
        term.invalidate();
        assert!(term.previous.is_none());
    }

    #[test]
    fn close_without_open_is_noop() {
        let mut term = Terminal::new();
        assert!(term.close().is_ok());
    }
}
