//! Theme system for ridge-tui.
//!
//! Every visual role of the dialog chrome gets a semantic color slot:
//! backdrop, dialog surface, title, borders (lit and shaded for the bevel),
//! list items, hotkey highlight, buttons and shadow. Colors can be ANSI
//! palette indices (respecting the user's terminal scheme) or explicit RGB.
//!
//! # Color Types
//!
//! - `ThemeColor::Default` - Uses terminal's default color
//! - `ThemeColor::Ansi(n)` - ANSI palette index (0-255)
//! - `ThemeColor::Rgb(rgba)` - Explicit RGB color
//! - `ThemeColor::Str(s)` - String to be parsed (hex, "default")
//!
//! # Example
//!
//! ```rust
//! use ridge_tui::theme::get_preset;
//!
//! let steel = get_preset("steel").unwrap();
//! let lit = steel.border_lit.resolve();
//! assert!(!lit.is_terminal_default());
//! ```

use crate::types::{Attr, BorderStyle, Rgba, Shadow, Style};

pub mod presets;

pub use presets::{get_preset, slate, steel, terminal};

// =============================================================================
// ThemeColor - A color that can be ANSI, RGB, or string
// =============================================================================

/// Theme color can be:
/// - `Default`: Terminal's default color
/// - `Ansi(n)`: ANSI palette index (0-255)
/// - `Rgb(rgba)`: Explicit RGB color
/// - `Str(s)`: String to be parsed (hex, "default")
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeColor {
    /// Use terminal's default color.
    Default,
    /// ANSI palette index (0-255).
    /// - 0-7: Standard colors
    /// - 8-15: Bright colors
    /// - 16-231: 6x6x6 RGB cube
    /// - 232-255: Grayscale
    Ansi(u8),
    /// Explicit RGB color.
    Rgb(Rgba),
    /// String to be parsed (hex, "default").
    Str(String),
}

impl ThemeColor {
    /// Resolve to Rgba. Parses string if needed.
    ///
    /// - `Default` returns `Rgba::TERMINAL_DEFAULT`
    /// - `Ansi(n)` returns `Rgba::ansi(n)`
    /// - `Rgb(c)` returns the color directly
    /// - `Str(s)` parses the string, returning magenta on parse failure
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
            Self::Str(s) => Rgba::parse(s).unwrap_or(Rgba::MAGENTA),
        }
    }

    /// Check if this is the terminal default.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Check if this is an ANSI color.
    pub fn is_ansi(&self) -> bool {
        matches!(self, Self::Ansi(_))
    }

    /// Check if this is an RGB color.
    pub fn is_rgb(&self) -> bool {
        matches!(self, Self::Rgb(_))
    }
}

// =============================================================================
// From implementations for ergonomic construction
// =============================================================================

impl Default for ThemeColor {
    fn default() -> Self {
        Self::Default
    }
}

/// `()` means terminal default.
impl From<()> for ThemeColor {
    fn from(_: ()) -> Self {
        Self::Default
    }
}

/// `u8` is an ANSI index.
impl From<u8> for ThemeColor {
    fn from(index: u8) -> Self {
        Self::Ansi(index)
    }
}

/// `Rgba` is an RGB color.
impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

/// `&str` is a string to parse.
impl From<&str> for ThemeColor {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

/// `String` is a string to parse.
impl From<String> for ThemeColor {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// `u32` is an RGB integer (0xRRGGBB).
impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

// =============================================================================
// DialogTheme - All semantic roles of the dialog chrome
// =============================================================================

/// Theme definition covering every visual role of the dialog.
///
/// Slots are grouped by surface:
/// - Screen: backdrop behind the centered dialog
/// - Dialog: surface fg/bg, title, subtitle, help line
/// - Border: lit and shaded bevel colors plus the glyph family
/// - List: normal and selected item, hotkey highlight
/// - Buttons: active and inactive chip
/// - Shadow: color and density level
#[derive(Debug, Clone)]
pub struct DialogTheme {
    /// Theme name (e.g., "steel", "terminal").
    pub name: String,
    /// Theme description.
    pub description: String,

    // =========================================================================
    // Screen
    // =========================================================================
    /// Backdrop behind the dialog.
    pub screen: ThemeColor,

    // =========================================================================
    // Dialog surface
    // =========================================================================
    /// Dialog text color.
    pub dialog_fg: ThemeColor,
    /// Dialog surface color.
    pub dialog_bg: ThemeColor,
    /// Title text embedded in the top border.
    pub title_fg: ThemeColor,
    /// Subtitle line above the list block.
    pub subtitle_fg: ThemeColor,
    /// Help line shown by embedding screens.
    pub help_fg: ThemeColor,

    // =========================================================================
    // Border
    // =========================================================================
    /// Top and left bevel edges.
    pub border_lit: ThemeColor,
    /// Bottom and right bevel edges.
    pub border_shade: ThemeColor,
    /// Border glyph family.
    pub border_style: BorderStyle,

    // =========================================================================
    // List
    // =========================================================================
    /// Unselected item text.
    pub item_fg: ThemeColor,
    /// Selected item text.
    pub item_selected_fg: ThemeColor,
    /// Selection bar color.
    pub item_selected_bg: ThemeColor,
    /// Hotkey cell (first grapheme of the label).
    pub hotkey_fg: ThemeColor,

    // =========================================================================
    // Buttons
    // =========================================================================
    /// Unfocused button text.
    pub button_fg: ThemeColor,
    /// Focused button text.
    pub button_active_fg: ThemeColor,
    /// Focused button fill.
    pub button_active_bg: ThemeColor,

    // =========================================================================
    // Shadow
    // =========================================================================
    /// Shadow color.
    pub shadow_color: ThemeColor,
    /// Shadow density (None disables it).
    pub shadow: Shadow,
}

impl Default for DialogTheme {
    fn default() -> Self {
        terminal()
    }
}

impl DialogTheme {
    /// Create a new theme with all default colors.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            screen: ThemeColor::Default,
            dialog_fg: ThemeColor::Default,
            dialog_bg: ThemeColor::Default,
            title_fg: ThemeColor::Default,
            subtitle_fg: ThemeColor::Default,
            help_fg: ThemeColor::Default,
            border_lit: ThemeColor::Default,
            border_shade: ThemeColor::Default,
            border_style: BorderStyle::Single,
            item_fg: ThemeColor::Default,
            item_selected_fg: ThemeColor::Default,
            item_selected_bg: ThemeColor::Default,
            hotkey_fg: ThemeColor::Default,
            button_fg: ThemeColor::Default,
            button_active_fg: ThemeColor::Default,
            button_active_bg: ThemeColor::Default,
            shadow_color: ThemeColor::Default,
            shadow: Shadow::None,
        }
    }

    // =========================================================================
    // Role -> Style resolution
    // =========================================================================

    /// Backdrop fill behind the dialog.
    pub fn screen_style(&self) -> Style {
        Style::new(self.dialog_fg.resolve(), self.screen.resolve())
    }

    /// Dialog surface: interior fill and plain text.
    pub fn base_style(&self) -> Style {
        Style::new(self.dialog_fg.resolve(), self.dialog_bg.resolve())
    }

    /// Title embedded in the top border.
    pub fn title_style(&self) -> Style {
        Style::new(self.title_fg.resolve(), self.dialog_bg.resolve()).plus(Attr::BOLD)
    }

    /// Subtitle line (base style for tag resolution).
    pub fn subtitle_style(&self) -> Style {
        Style::new(self.subtitle_fg.resolve(), self.dialog_bg.resolve())
    }

    /// Help line for embedding screens.
    pub fn help_style(&self) -> Style {
        Style::new(self.help_fg.resolve(), self.screen.resolve())
    }

    /// Bevel edge style: lit (top/left) or shaded (bottom/right).
    pub fn border_style(&self, lit: bool) -> Style {
        let fg = if lit {
            self.border_lit.resolve()
        } else {
            self.border_shade.resolve()
        };
        Style::new(fg, self.dialog_bg.resolve())
    }

    /// List row style.
    pub fn item_style(&self, selected: bool) -> Style {
        if selected {
            Style::new(
                self.item_selected_fg.resolve(),
                self.item_selected_bg.resolve(),
            )
        } else {
            Style::new(self.item_fg.resolve(), self.dialog_bg.resolve())
        }
    }

    /// Hotkey cell style; background follows the row.
    pub fn hotkey_style(&self, selected: bool) -> Style {
        let bg = if selected {
            self.item_selected_bg.resolve()
        } else {
            self.dialog_bg.resolve()
        };
        Style::with_attrs(self.hotkey_fg.resolve(), bg, Attr::BOLD)
    }

    /// Button chip style.
    pub fn button_style(&self, active: bool) -> Style {
        if active {
            Style::new(
                self.button_active_fg.resolve(),
                self.button_active_bg.resolve(),
            )
            .plus(Attr::BOLD)
        } else {
            Style::new(self.button_fg.resolve(), self.dialog_bg.resolve())
        }
    }

    /// Shadow style: shade glyphs in the shadow color over the backdrop,
    /// or the shadow color as fill in solid mode.
    pub fn shadow_style(&self) -> Style {
        if self.shadow == Shadow::Solid {
            Style::new(self.shadow_color.resolve(), self.shadow_color.resolve())
        } else {
            Style::new(self.shadow_color.resolve(), self.screen.resolve())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
