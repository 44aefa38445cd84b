//! ANSI escape output: sequence emitters, an output buffer, and a
//! stateful cell writer.
//!
//! The emitters cover exactly what the presenter needs: cursor motion and
//! visibility, screen/alt-screen control, synchronized output, SGR colors
//! and attributes, and mouse tracking. [`OutputBuffer`] accumulates bytes
//! so a frame reaches stdout in one syscall; [`CellWriter`] tracks the
//! terminal's SGR state and skips sequences that would not change it.

use std::io::{self, Write};

use crate::types::{Attr, Cell, Rgba};

// =============================================================================
// Escape emitters
// =============================================================================

/// Move the cursor to a 0-indexed cell position.
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Hide the cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?25l")
}

/// Show the cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?25h")
}

/// Clear the screen and scrollback, homing the cursor.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[2J\x1b[3J\x1b[H")
}

/// Enter the alternate screen buffer.
#[inline]
pub fn enter_alt_screen<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?1049h")
}

/// Leave the alternate screen buffer.
#[inline]
pub fn exit_alt_screen<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?1049l")
}

/// Begin synchronized output: the terminal holds updates until
/// [`end_sync`], preventing tearing mid-frame.
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?2026h")
}

/// End synchronized output.
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?2026l")
}

/// Reset all SGR state.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Set the foreground color.
pub fn fg<W: Write>(w: &mut W, color: Rgba) -> io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[39m")
    } else if color.is_ansi() {
        let index = color.ansi_index();
        if index < 8 {
            write!(w, "\x1b[{}m", 30 + index)
        } else if index < 16 {
            write!(w, "\x1b[{}m", 90 + index - 8)
        } else {
            write!(w, "\x1b[38;5;{index}m")
        }
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set the background color.
pub fn bg<W: Write>(w: &mut W, color: Rgba) -> io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[49m")
    } else if color.is_ansi() {
        let index = color.ansi_index();
        if index < 8 {
            write!(w, "\x1b[{}m", 40 + index)
        } else if index < 16 {
            write!(w, "\x1b[{}m", 100 + index - 8)
        } else {
            write!(w, "\x1b[48;5;{index}m")
        }
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set text attributes as one SGR sequence. Empty flags emit nothing.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    const CODES: [(Attr, u8); 8] = [
        (Attr::BOLD, 1),
        (Attr::DIM, 2),
        (Attr::ITALIC, 3),
        (Attr::UNDERLINE, 4),
        (Attr::BLINK, 5),
        (Attr::INVERSE, 7),
        (Attr::HIDDEN, 8),
        (Attr::STRIKETHROUGH, 9),
    ];

    write!(w, "\x1b[")?;
    let mut first = true;
    for (flag, code) in CODES {
        if attr.contains(flag) {
            if !first {
                write!(w, ";")?;
            }
            write!(w, "{code}")?;
            first = false;
        }
    }
    write!(w, "m")
}

/// Enable SGR-extended mouse tracking (press, release, drag).
#[inline]
pub fn enable_mouse<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?1000h\x1b[?1002h\x1b[?1006h")
}

/// Disable mouse tracking.
#[inline]
pub fn disable_mouse<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?1006l\x1b[?1002l\x1b[?1000l")
}

// =============================================================================
// OutputBuffer
// =============================================================================

/// Byte accumulator so a whole frame hits stdout in one write.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(16 * 1024),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Append one codepoint, UTF-8 encoded. Invalid codepoints are dropped.
    #[inline]
    pub fn push_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            let mut buf = [0u8; 4];
            self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    /// Write everything to stdout and clear.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// CellWriter
// =============================================================================

/// Writes cells while tracking cursor position and SGR state, emitting
/// escape sequences only when the terminal's state would actually change.
#[derive(Debug)]
pub struct CellWriter {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl CellWriter {
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Forget all tracked state. Call at the start of each frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Emit one cell at a position.
    ///
    /// Continuation cells (wide-glyph tails, `char == 0`) advance the
    /// tracked position without producing output; the glyph before them
    /// already covers their column.
    pub fn write_cell(&mut self, out: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        if cell.char == 0 {
            self.last_x = x as i32;
            self.last_y = y as i32;
            return;
        }

        // Cursor moves only when the cell is not the next one over.
        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            cursor_to(out, x, y).ok();
        }

        // Attribute changes need a full reset first (SGR has no "unset
        // bold only" that terminals agree on), which invalidates colors.
        if cell.attrs != self.last_attrs {
            reset(out).ok();
            attrs(out, cell.attrs).ok();
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg != Some(cell.fg) {
            fg(out, cell.fg).ok();
            self.last_fg = Some(cell.fg);
        }
        if self.last_bg != Some(cell.bg) {
            bg(out, cell.bg).ok();
            self.last_bg = Some(cell.bg);
        }

        out.push_codepoint(cell.char);
        self.last_x = x as i32;
        self.last_y = y as i32;
    }
}

impl Default for CellWriter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
