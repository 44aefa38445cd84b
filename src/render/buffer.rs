//! Cell grid that frames are drawn into.
//!
//! A `FrameBuffer` is a flat row-major grid of [`Cell`]s. Draw calls clip
//! at the grid edge instead of failing, so an undersized terminal costs
//! pixels, never panics. Wide characters occupy two cells: the second is a
//! continuation marker (`char == 0`) that the output layer skips.

use crate::text::char_width;
use crate::types::{Cell, Shadow, Style};

/// A 2D grid of terminal cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Create a buffer pre-filled with spaces in the given style.
    pub fn with_background(width: u16, height: u16, style: Style) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::styled(' ', style); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell, None when out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a single cell. Returns false when out of bounds.
    pub fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = Cell::styled(ch, style);
        true
    }

    /// Fill a rectangle with styled spaces, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, style: Style) {
        let x2 = x.saturating_add(width).min(self.width);
        let y2 = y.saturating_add(height).min(self.height);
        for row in y..y2 {
            for col in x..x2 {
                let idx = self.index(col, row);
                self.cells[idx] = Cell::styled(' ', style);
            }
        }
    }

    /// Draw text at a position, clipping at the right edge.
    ///
    /// Returns the number of columns used (wide characters take two).
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let w = char_width(ch);
            if w == 0 {
                continue;
            }

            if self.set_cell(col, y, ch, style) && w == 2 && col + 1 < self.width {
                // Continuation cell behind a wide glyph.
                let idx = self.index(col + 1, y);
                self.cells[idx] = Cell {
                    char: 0,
                    fg: style.fg,
                    bg: style.bg,
                    attrs: style.attrs,
                };
            }

            col += w as u16;
        }

        col.saturating_sub(x)
    }

    /// Draw a rectangular border with the two-tone bevel.
    ///
    /// Top and left edges take the lit style, bottom and right the shaded
    /// one. The top-left corner is lit; the other three corners contain a
    /// shaded stroke and take the shade style.
    pub fn draw_bevel_border(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        glyphs: crate::types::BorderGlyphs,
        lit: Style,
        shade: Style,
    ) {
        if width < 2 || height < 2 {
            return;
        }

        let x2 = x + width - 1;
        let y2 = y + height - 1;

        for col in (x + 1)..x2 {
            self.set_cell(col, y, glyphs.horizontal, lit);
            self.set_cell(col, y2, glyphs.horizontal, shade);
        }
        for row in (y + 1)..y2 {
            self.set_cell(x, row, glyphs.vertical, lit);
            self.set_cell(x2, row, glyphs.vertical, shade);
        }

        self.set_cell(x, y, glyphs.top_left, lit);
        self.set_cell(x2, y, glyphs.top_right, shade);
        self.set_cell(x2, y2, glyphs.bottom_right, shade);
        self.set_cell(x, y2, glyphs.bottom_left, shade);
    }

    /// Draw the drop shadow of a block: the block's rectangle offset one
    /// row down and one column right, minus the block itself.
    pub fn draw_shadow(&mut self, x: u16, y: u16, width: u16, height: u16, shadow: Shadow, style: Style) {
        if !shadow.is_enabled() || width == 0 || height == 0 {
            return;
        }

        let ch = shadow.glyph().unwrap_or(' ');
        // Right strip.
        for row in (y + 1)..=(y + height) {
            self.set_cell(x + width, row, ch, style);
        }
        // Bottom strip.
        for col in (x + 1)..(x + width) {
            self.set_cell(col, y + height, ch, style);
        }
    }

    /// The characters of one row as plain text, trailing spaces trimmed.
    ///
    /// Continuation cells are skipped so wide glyphs come out once.
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        if y >= self.height {
            return out;
        }
        for x in 0..self.width {
            let cell = &self.cells[self.index(x, y)];
            if cell.char == 0 {
                continue;
            }
            out.push(char::from_u32(cell.char).unwrap_or(' '));
        }
        out.trim_end().to_string()
    }

    /// The whole frame as plain text, one line per row.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Tests
// =============================================================================
