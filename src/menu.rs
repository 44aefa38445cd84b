//! The menu dialog controller.
//!
//! [`Menu`] owns the dialog state (items, cursor, focus, size) and turns
//! input events into state changes plus commands for the embedding runtime
//! to execute. It is generic over the action type `A`: items and the back
//! action carry opaque `A` values that come straight back out through
//! [`Command::Run`], never inspected here.
//!
//! Dispatch order matters and is fixed: help first (so no hotkey can
//! shadow it), then the reserved cycle control, arrow navigation, Enter,
//! Esc, item hotkeys before button hotkeys, and finally the list
//! navigation fallback for keys the dialog itself does not claim.

use crate::focus::{button_next, button_prev, FocusTarget};
use crate::input::{Event, Key, KeyEvent, MouseEvent};
use crate::list::ListCursor;
use crate::memory::SelectionMemory;
use crate::render::buffer::FrameBuffer;
use crate::render::dialog::{button_set, render_dialog, DialogRow, DialogView};
use crate::tags::TagTable;
use crate::theme::DialogTheme;
use crate::zone::{item_zone_id, ZoneRegistry};

/// Terminal size assumed until the first resize event arrives.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

// =============================================================================
// Items and configuration
// =============================================================================

/// One selectable row of the menu.
#[derive(Debug, Clone)]
pub struct MenuItem<A> {
    pub label: String,
    pub description: String,
    pub help_text: String,
    /// Defaults to the label's first character when left unset.
    pub hotkey: Option<char>,
    /// `None` marks an informational row; activating it does nothing.
    pub action: Option<A>,
}

impl<A> MenuItem<A> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: String::new(),
            help_text: String::new(),
            hotkey: None,
            action: None,
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }

    pub fn hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }

    pub fn action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }
}

/// Everything a menu is built from.
#[derive(Debug, Clone)]
pub struct MenuConfig<A> {
    /// Stable identity; the Selection Memory key.
    pub id: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub items: Vec<MenuItem<A>>,
    /// Back action; also controls whether the Back button exists.
    pub back: Option<A>,
}

impl<A> MenuConfig<A> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            subtitle: None,
            items: Vec::new(),
            back: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn items(mut self, items: Vec<MenuItem<A>>) -> Self {
        self.items = items;
        self
    }

    pub fn back(mut self, action: A) -> Self {
        self.back = Some(action);
        self
    }
}

// =============================================================================
// Commands and outcomes
// =============================================================================

/// What the embedding runtime should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<A> {
    /// Execute an action value (item action or back action).
    Run(A),
    /// Leave the dialog / application.
    Quit,
    /// Open the help overlay.
    Help,
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<A> {
    /// Whether visible state changed (a redraw is due).
    pub changed: bool,
    pub command: Option<Command<A>>,
}

impl<A> Outcome<A> {
    /// Event meant nothing; no redraw, no command.
    fn none() -> Self {
        Self {
            changed: false,
            command: None,
        }
    }

    fn redraw() -> Self {
        Self {
            changed: true,
            command: None,
        }
    }

    fn command(command: Command<A>) -> Self {
        Self {
            changed: false,
            command: Some(command),
        }
    }

    fn redraw_with(command: Option<Command<A>>) -> Self {
        Self {
            changed: true,
            command,
        }
    }
}

// =============================================================================
// Menu controller
// =============================================================================

/// The dialog controller: state in, commands out, frames on demand.
#[derive(Debug)]
pub struct Menu<A> {
    id: String,
    title: Option<String>,
    subtitle: Option<String>,
    items: Vec<MenuItem<A>>,
    cursor: usize,
    focus: FocusTarget,
    back: Option<A>,
    width: u16,
    height: u16,
    memory: SelectionMemory,
    zones: ZoneRegistry,
    nav: ListCursor,
}

impl<A: Clone> Menu<A> {
    /// Build a menu, defaulting hotkeys and restoring the cursor from
    /// Selection Memory (clamped; 0 when absent or out of range).
    pub fn new(config: MenuConfig<A>, memory: SelectionMemory) -> Self {
        let MenuConfig {
            id,
            title,
            subtitle,
            mut items,
            back,
        } = config;

        for item in &mut items {
            if item.hotkey.is_none() {
                item.hotkey = item.label.chars().next();
            }
        }

        let cursor = match memory.recall(&id) {
            Some(k) if k < items.len() => k,
            _ => 0,
        };
        let mut nav = ListCursor::new(items.len());
        nav.set(cursor);

        Self {
            id,
            title,
            subtitle,
            items,
            cursor,
            focus: FocusTarget::List,
            back,
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            memory,
            zones: ZoneRegistry::new(),
            nav,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn selected_item(&self) -> Option<&MenuItem<A>> {
        self.items.get(self.cursor)
    }

    /// Help text of the selected item, for an embedding help bar.
    pub fn help_line(&self) -> Option<&str> {
        self.selected_item()
            .map(|item| item.help_text.as_str())
            .filter(|text| !text.is_empty())
    }

    fn has_back(&self) -> bool {
        self.back.is_some()
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    /// Process one input event.
    pub fn handle(&mut self, event: Event) -> Outcome<A> {
        match event {
            Event::Resize(w, h) => {
                self.width = w;
                self.height = h;
                Outcome::redraw()
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Key(key) => self.handle_key(key),
            Event::None => Outcome::none(),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Outcome<A> {
        if !mouse.is_primary_press() {
            return Outcome::none();
        }

        // Items first, in index order, then buttons. Before the first
        // render the registry is empty and everything misses.
        for i in 0..self.items.len() {
            if self.zones.hit_test(&item_zone_id(i), mouse.x, mouse.y) {
                self.cursor = i;
                self.focus = FocusTarget::List;
                self.memory.remember(&self.id, i);
                let activated = self.activate();
                return Outcome::redraw_with(activated.command);
            }
        }
        for button in button_set(self.has_back()) {
            if self.zones.hit_test(button.zone, mouse.x, mouse.y) {
                self.focus = button.target;
                let activated = self.activate();
                return Outcome::redraw_with(activated.command);
            }
        }
        Outcome::none()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Outcome<A> {
        // 1. Help, ahead of everything so hotkeys cannot shadow it.
        if matches!(key.key, Key::F(1) | Key::Char('?')) {
            return Outcome::command(Command::Help);
        }

        match key.key {
            // 2. Cycle control: reserved for multi-element screens.
            Key::Tab | Key::BackTab => Outcome::none(),

            // 3. Up/Down always belong to the list.
            Key::Up => self.move_cursor(-1),
            Key::Down => self.move_cursor(1),

            // 4. Left/Right walk the button ring.
            Key::Right => {
                self.focus = button_next(self.focus, self.has_back());
                Outcome::redraw()
            }
            Key::Left => {
                self.focus = button_prev(self.focus, self.has_back());
                Outcome::redraw()
            }

            Key::Enter => self.activate(),

            // Esc prefers the back action over quitting.
            Key::Esc => match self.back.clone() {
                Some(action) => Outcome::command(Command::Run(action)),
                None => Outcome::command(Command::Quit),
            },

            Key::Char(c) if !key.modifiers.ctrl && !key.modifiers.alt => self.handle_hotkey(c),

            // Everything else goes to the list navigation fallback.
            other => self.forward_to_list(other),
        }
    }

    /// Item hotkeys beat button hotkeys; first match in order wins.
    fn handle_hotkey(&mut self, c: char) -> Outcome<A> {
        for i in 0..self.items.len() {
            if self.items[i].hotkey.is_some_and(|h| chars_match(h, c)) {
                self.cursor = i;
                self.focus = FocusTarget::List;
                self.memory.remember(&self.id, i);
                let activated = self.activate();
                return Outcome::redraw_with(activated.command);
            }
        }
        for button in button_set(self.has_back()) {
            let hotkey = button.label.chars().next().unwrap_or_default();
            if chars_match(hotkey, c) {
                self.focus = button.target;
                let activated = self.activate();
                return Outcome::redraw_with(activated.command);
            }
        }
        Outcome::none()
    }

    fn move_cursor(&mut self, delta: isize) -> Outcome<A> {
        let refocused = self.focus != FocusTarget::List;
        self.focus = FocusTarget::List;

        let len = self.items.len();
        if len == 0 {
            return if refocused {
                Outcome::redraw()
            } else {
                Outcome::none()
            };
        }

        let step = if delta < 0 { len - 1 } else { 1 };
        self.cursor = (self.cursor + step) % len;
        self.memory.remember(&self.id, self.cursor);
        Outcome::redraw()
    }

    fn forward_to_list(&mut self, key: Key) -> Outcome<A> {
        if self.focus != FocusTarget::List {
            return Outcome::none();
        }
        self.nav.set_len(self.items.len());
        self.nav.set(self.cursor);
        if !self.nav.handle_key(key) {
            return Outcome::none();
        }
        let moved = self.nav.get() != self.cursor;
        self.cursor = self.nav.get();
        if moved {
            self.memory.remember(&self.id, self.cursor);
        }
        Outcome::redraw()
    }

    /// Activate whatever has focus.
    pub fn activate(&mut self) -> Outcome<A> {
        match self.focus {
            FocusTarget::List | FocusTarget::Select => {
                let action = self
                    .items
                    .get(self.cursor)
                    .and_then(|item| item.action.clone());
                match action {
                    Some(action) => {
                        self.memory.remember(&self.id, self.cursor);
                        Outcome::command(Command::Run(action))
                    }
                    None => Outcome::none(),
                }
            }
            FocusTarget::Back => match self.back.clone() {
                Some(action) => Outcome::command(Command::Run(action)),
                None => Outcome::none(),
            },
            FocusTarget::Exit => Outcome::command(Command::Quit),
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the dialog for the current state, rewriting the zone
    /// registry for the frame produced.
    pub fn render(&mut self, theme: &DialogTheme, tags: &TagTable) -> FrameBuffer {
        let view = DialogView {
            title: self.title.as_deref(),
            subtitle: self.subtitle.as_deref(),
            rows: self
                .items
                .iter()
                .map(|item| DialogRow {
                    label: &item.label,
                    description: &item.description,
                })
                .collect(),
            cursor: self.cursor,
            focus: self.focus,
            has_back: self.back.is_some(),
            width: self.width,
            height: self.height,
        };
        render_dialog(&view, theme, tags, &mut self.zones)
    }

    /// The zones of the last rendered frame (empty before the first).
    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }
}

/// Case-insensitive character comparison; non-ASCII compares via full
/// lowercasing so CJK and accented hotkeys still match exactly.
fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

// =============================================================================
// Tests
// =============================================================================
