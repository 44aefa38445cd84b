//! Input events and the crossterm conversion layer.
//!
//! The controller consumes plain, backend-free event types; this module
//! defines them and converts crossterm's events into them. Key releases
//! never surface (menus act on press and auto-repeat), and terminal events
//! with no meaning here (focus, paste) convert to [`Event::None`], which
//! every consumer ignores.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use ridge_tui::input::{poll_event, Event, Key};
//!
//! # fn main() -> std::io::Result<()> {
//! match poll_event(Duration::from_millis(50))? {
//!     Event::Key(key) if key.key == Key::Esc => println!("back out"),
//!     Event::Resize(w, h) => println!("now {w}x{h}"),
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};

// =============================================================================
// Keyboard
// =============================================================================

/// Modifier key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers pressed.
    pub const fn none() -> Self {
        Self {
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        }
    }

    /// Only Ctrl.
    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            alt: false,
            shift: false,
            meta: false,
        }
    }

    /// Only Shift.
    pub const fn shift() -> Self {
        Self {
            ctrl: false,
            alt: false,
            shift: true,
            meta: false,
        }
    }
}

/// A key, independent of any terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Insert,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

/// A key press (or auto-repeat) with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::none(),
        }
    }

    pub const fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

// =============================================================================
// Mouse
// =============================================================================

/// Which physical button an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Motion and scroll events carry no button.
    #[default]
    None,
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Drag,
    ScrollUp,
    ScrollDown,
}

/// A pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub button: MouseButton,
    pub x: u16,
    pub y: u16,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// A primary-button press at the given cell.
    pub const fn down(x: u16, y: u16) -> Self {
        Self {
            action: MouseAction::Down,
            button: MouseButton::Left,
            x,
            y,
            modifiers: Modifiers::none(),
        }
    }

    /// Whether this is a primary-button press.
    pub fn is_primary_press(&self) -> bool {
        self.action == MouseAction::Down && self.button == MouseButton::Left
    }
}

// =============================================================================
// Event - what the controller consumes
// =============================================================================

/// Any input the dialog reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Terminal event with no meaning here (focus change, paste, release).
    None,
}

// =============================================================================
// Crossterm conversion
// =============================================================================

fn convert_modifiers(m: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: m.contains(KeyModifiers::CONTROL),
        alt: m.contains(KeyModifiers::ALT),
        shift: m.contains(KeyModifiers::SHIFT),
        meta: m.contains(KeyModifiers::META) || m.contains(KeyModifiers::SUPER),
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    })
}

fn convert_mouse_kind(kind: MouseEventKind) -> Option<(MouseAction, MouseButton)> {
    let button = |b: event::MouseButton| match b {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Middle => MouseButton::Middle,
        event::MouseButton::Right => MouseButton::Right,
    };

    Some(match kind {
        MouseEventKind::Down(b) => (MouseAction::Down, button(b)),
        MouseEventKind::Up(b) => (MouseAction::Up, button(b)),
        MouseEventKind::Drag(b) => (MouseAction::Drag, button(b)),
        MouseEventKind::Moved => (MouseAction::Move, MouseButton::None),
        MouseEventKind::ScrollUp => (MouseAction::ScrollUp, MouseButton::None),
        MouseEventKind::ScrollDown => (MouseAction::ScrollDown, MouseButton::None),
        _ => return None,
    })
}

/// Convert a crossterm event. Unmappable events become [`Event::None`].
pub fn convert_event(ct: CtEvent) -> Event {
    match ct {
        CtEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return Event::None;
            }
            match convert_key(key.code) {
                Some(k) => Event::Key(KeyEvent::with_modifiers(
                    k,
                    convert_modifiers(key.modifiers),
                )),
                None => Event::None,
            }
        }
        CtEvent::Mouse(mouse) => match convert_mouse_kind(mouse.kind) {
            Some((action, button)) => Event::Mouse(MouseEvent {
                action,
                button,
                x: mouse.column,
                y: mouse.row,
                modifiers: convert_modifiers(mouse.modifiers),
            }),
            None => Event::None,
        },
        CtEvent::Resize(w, h) => Event::Resize(w, h),
        _ => Event::None,
    }
}

/// Poll the terminal for an event, waiting at most `timeout`.
///
/// Returns [`Event::None`] when the timeout expires quietly.
pub fn poll_event(timeout: Duration) -> io::Result<Event> {
    if event::poll(timeout)? {
        Ok(convert_event(event::read()?))
    } else {
        Ok(Event::None)
    }
}

/// Block until the next terminal event.
pub fn read_event() -> io::Result<Event> {
    Ok(convert_event(event::read()?))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent as CtKeyEvent, KeyEventState, MouseEvent as CtMouseEvent};

    fn ct_key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CtEvent {
        CtEvent::Key(CtKeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn converts_plain_keys() {
        let ev = convert_event(ct_key(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Press,
        ));
        assert_eq!(ev, Event::Key(KeyEvent::new(Key::Char('q'))));

        let ev = convert_event(ct_key(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Press));
        assert_eq!(ev, Event::Key(KeyEvent::new(Key::Up)));

        let ev = convert_event(ct_key(
            KeyCode::F(1),
            KeyModifiers::NONE,
            KeyEventKind::Press,
        ));
        assert_eq!(ev, Event::Key(KeyEvent::new(Key::F(1))));
    }

    #[test]
    fn converts_modifiers() {
        let ev = convert_event(ct_key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
            KeyEventKind::Press,
        ));
        let Event::Key(key) = ev else {
            panic!("expected key event");
        };
        assert!(key.modifiers.ctrl);
        assert!(key.modifiers.shift);
        assert!(!key.modifiers.alt);
    }

    #[test]
    fn releases_are_dropped() {
        let ev = convert_event(ct_key(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(ev, Event::None);
    }

    #[test]
    fn repeats_pass_through() {
        let ev = convert_event(ct_key(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        ));
        assert_eq!(ev, Event::Key(KeyEvent::new(Key::Down)));
    }

    #[test]
    fn converts_mouse_press() {
        let ev = convert_event(CtEvent::Mouse(CtMouseEvent {
            kind: MouseEventKind::Down(event::MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }));
        let Event::Mouse(mouse) = ev else {
            panic!("expected mouse event");
        };
        assert!(mouse.is_primary_press());
        assert_eq!((mouse.x, mouse.y), (12, 7));
    }

    #[test]
    fn converts_scroll_without_button() {
        let ev = convert_event(CtEvent::Mouse(CtMouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        let Event::Mouse(mouse) = ev else {
            panic!("expected mouse event");
        };
        assert_eq!(mouse.action, MouseAction::ScrollDown);
        assert_eq!(mouse.button, MouseButton::None);
        assert!(!mouse.is_primary_press());
    }

    #[test]
    fn resize_and_focus() {
        assert_eq!(convert_event(CtEvent::Resize(80, 24)), Event::Resize(80, 24));
        assert_eq!(convert_event(CtEvent::FocusGained), Event::None);
    }
}
