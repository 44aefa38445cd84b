//! Theme presets for ridge-tui.
//!
//! Three built-in looks:
//! - steel (classic blue-screen installer panel, solid shadow)
//! - slate (dark truecolor, soft shadow)
//! - terminal (default - pure ANSI, respects the user's terminal scheme)

use super::{DialogTheme, ThemeColor};
use crate::types::{BorderStyle, Rgba, Shadow};

// =============================================================================
// Steel Theme
// =============================================================================

/// Steel - the classic setup-program look: silver panel on a deep blue
/// screen, double borders, solid black shadow.
pub fn steel() -> DialogTheme {
    DialogTheme {
        name: "steel".to_string(),
        description: "Silver panel on deep blue, solid shadow".to_string(),
        screen: ThemeColor::Rgb(Rgba::from_rgb_int(0x0000a8)),
        dialog_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0x000000)),
        dialog_bg: ThemeColor::Rgb(Rgba::from_rgb_int(0xc0c0c0)),
        title_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0x0000a8)),
        subtitle_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0x404040)),
        help_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0xffff54)),
        border_lit: ThemeColor::Rgb(Rgba::from_rgb_int(0xffffff)),
        border_shade: ThemeColor::Rgb(Rgba::from_rgb_int(0x545454)),
        border_style: BorderStyle::Double,
        item_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0x000000)),
        item_selected_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0xffffff)),
        item_selected_bg: ThemeColor::Rgb(Rgba::from_rgb_int(0x0000a8)),
        hotkey_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0xa80000)),
        button_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0x000000)),
        button_active_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0xffffff)),
        button_active_bg: ThemeColor::Rgb(Rgba::from_rgb_int(0x0000a8)),
        shadow_color: ThemeColor::Rgb(Rgba::from_rgb_int(0x000000)),
        shadow: Shadow::Solid,
    }
}

// =============================================================================
// Slate Theme
// =============================================================================

/// Slate - dark truecolor panel with rounded borders and a soft shadow.
pub fn slate() -> DialogTheme {
    let lit = Rgba::from_rgb_int(0x9aa5ce);
    DialogTheme {
        name: "slate".to_string(),
        description: "Dark gray panel, rounded borders".to_string(),
        screen: ThemeColor::Rgb(Rgba::from_rgb_int(0x16161e)),
        dialog_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0xd0d0d8)),
        dialog_bg: ThemeColor::Rgb(Rgba::from_rgb_int(0x2a2a35)),
        title_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0x82aaff)),
        subtitle_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0x8890a8)),
        help_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0x6a7089)),
        border_lit: ThemeColor::Rgb(lit),
        border_shade: ThemeColor::Rgb(lit.dim(0.55)),
        border_style: BorderStyle::Rounded,
        item_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0xc8ccd4)),
        item_selected_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0xffffff)),
        item_selected_bg: ThemeColor::Rgb(Rgba::from_rgb_int(0x3d59a1)),
        hotkey_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0xffc777)),
        button_fg: ThemeColor::Rgb(lit),
        button_active_fg: ThemeColor::Rgb(Rgba::from_rgb_int(0x16161e)),
        button_active_bg: ThemeColor::Rgb(Rgba::from_rgb_int(0x82aaff)),
        shadow_color: ThemeColor::Rgb(Rgba::from_rgb_int(0x0c0c10)),
        shadow: Shadow::Medium,
    }
}

// =============================================================================
// Terminal Theme (Default)
// =============================================================================

/// Terminal theme - uses ANSI colors to respect the user's terminal scheme.
/// This is the default. No shadow: the backdrop keeps the terminal's own
/// background.
pub fn terminal() -> DialogTheme {
    DialogTheme {
        name: "terminal".to_string(),
        description: "Uses terminal default colors".to_string(),
        screen: ThemeColor::Default,
        dialog_fg: ThemeColor::Default,
        dialog_bg: ThemeColor::Default,
        title_fg: ThemeColor::Ansi(12),    // bright blue
        subtitle_fg: ThemeColor::Ansi(8),  // bright black
        help_fg: ThemeColor::Ansi(8),
        border_lit: ThemeColor::Ansi(15),  // bright white
        border_shade: ThemeColor::Ansi(8),
        border_style: BorderStyle::Single,
        item_fg: ThemeColor::Default,
        item_selected_fg: ThemeColor::Ansi(15),
        item_selected_bg: ThemeColor::Ansi(4), // blue
        hotkey_fg: ThemeColor::Ansi(11),       // bright yellow
        button_fg: ThemeColor::Ansi(7),
        button_active_fg: ThemeColor::Ansi(0),
        button_active_bg: ThemeColor::Ansi(6), // cyan
        shadow_color: ThemeColor::Ansi(0),
        shadow: Shadow::None,
    }
}

// =============================================================================
// Preset lookup
// =============================================================================

/// Look up a preset theme by name (case-insensitive).
pub fn get_preset(name: &str) -> Option<DialogTheme> {
    match name.to_lowercase().as_str() {
        "steel" => Some(steel()),
        "slate" => Some(slate()),
        "terminal" => Some(terminal()),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_preset() {
        assert_eq!(get_preset("steel").map(|t| t.name), Some("steel".into()));
        assert_eq!(get_preset("SLATE").map(|t| t.name), Some("slate".into()));
        assert!(get_preset("nonexistent").is_none());
    }

    #[test]
    fn test_steel_has_solid_shadow() {
        let theme = steel();
        assert_eq!(theme.shadow, Shadow::Solid);
        assert_eq!(theme.border_style, BorderStyle::Double);
    }

    #[test]
    fn test_slate_shade_darker_than_lit() {
        let theme = slate();
        let lit = theme.border_lit.resolve();
        let shade = theme.border_shade.resolve();
        assert!(shade.r < lit.r && shade.g < lit.g && shade.b < lit.b);
    }

    #[test]
    fn test_terminal_respects_defaults() {
        let theme = terminal();
        assert!(theme.dialog_bg.is_default());
        assert_eq!(theme.shadow, Shadow::None);
        assert!(theme.item_selected_bg.is_ansi());
    }
}
