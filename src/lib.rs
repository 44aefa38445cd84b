//! # ridge-tui
//!
//! A keyboard-and-mouse driven menu dialog for the terminal: a titled,
//! bordered panel with a vertical item list, a row of action buttons
//! (Select / Back / Exit), two-tone beveled borders and an optional drop
//! shadow, centered on a styled backdrop.
//!
//! The core is purely computational. A [`menu::Menu`] consumes
//! [`input::Event`]s and returns [`menu::Outcome`]s telling the embedding
//! runtime whether to redraw and which [`menu::Command`] to execute;
//! `render` produces a [`render::FrameBuffer`] of styled cells. Pointer
//! hit-testing runs against named [`zone`]s recorded during the same
//! render pass, so clicks always agree with what is on screen.
//!
//! Terminal plumbing (raw mode, alternate screen, mouse capture, input
//! decoding, differential frame presentation) lives in the adapter layer
//! ([`input`], [`render::ansi`], [`render::term`]) so embedders and the
//! demo need none of their own.
//!
//! ## Example
//!
//! ```
//! use ridge_tui::input::{Event, Key, KeyEvent};
//! use ridge_tui::menu::{Command, Menu, MenuConfig, MenuItem};
//! use ridge_tui::memory::SelectionMemory;
//!
//! #[derive(Clone)]
//! enum Action { NewGame }
//!
//! let config = MenuConfig::new("main")
//!     .title("Main Menu")
//!     .items(vec![MenuItem::new("New Game").action(Action::NewGame)]);
//! let mut menu = Menu::new(config, SelectionMemory::new());
//!
//! let outcome = menu.handle(Event::Key(KeyEvent::new(Key::Enter)));
//! assert!(matches!(outcome.command, Some(Command::Run(Action::NewGame))));
//! ```

pub mod focus;
pub mod input;
pub mod list;
pub mod memory;
pub mod menu;
pub mod render;
pub mod tags;
pub mod text;
pub mod theme;
pub mod types;
pub mod zone;

// Re-export the working set most embedders need.
pub use focus::FocusTarget;
pub use input::{convert_event, poll_event, read_event, Event, Key, KeyEvent, MouseEvent};
pub use memory::SelectionMemory;
pub use menu::{Command, Menu, MenuConfig, MenuItem, Outcome};
pub use render::{FrameBuffer, Terminal};
pub use tags::{resolve, TagTable};
pub use theme::{get_preset, slate, steel, terminal, DialogTheme, ThemeColor};
pub use types::{Attr, BorderStyle, Cell, Rect, Rgba, Shadow, Style};
pub use zone::ZoneRegistry;
