//! Rendering: the cell grid, the dialog layout pipeline, and the ANSI
//! presentation layer.
//!
//! `buffer` and `dialog` are pure (cells in memory, no I/O); `ansi` and
//! `term` are the adapter that puts frames on a real terminal.

pub mod ansi;
pub mod buffer;
pub mod dialog;
pub mod term;

pub use buffer::FrameBuffer;
pub use dialog::{button_set, render_dialog, ButtonSpec, DialogRow, DialogView};
pub use term::Terminal;
