//! Inline style tags for titles and subtitles.
//!
//! Text handed to the dialog may carry `{{...}}` tags that restyle the
//! whole line:
//!
//! - `{{|bold|}}`, `{{|red|underline|}}` - literal code sequences
//! - `{{heading}}` - semantic names resolved through a caller-supplied
//!   [`TagTable`]
//!
//! The resolver strips every tag from the text and folds the codes into a
//! single [`Style`]. The moment any tag is seen, styling inherited from the
//! base is discarded except for its background, so tagged lines start from
//! a clean slate on the dialog surface. Unknown names and codes are ignored
//! rather than reported: a bad tag costs its styling, never the text.
//!
//! # Example
//!
//! ```
//! use ridge_tui::tags::{resolve, TagTable};
//! use ridge_tui::types::{Attr, Style};
//!
//! let (text, style) = resolve("{{|bold|}}Armory", Style::default(), &TagTable::new());
//! assert_eq!(text, "Armory");
//! assert!(style.attrs.contains(Attr::BOLD));
//! ```

use std::collections::HashMap;

use crate::types::{Attr, Rgba, Style};

// =============================================================================
// TagTable - semantic name -> code sequence
// =============================================================================

/// Lookup table mapping semantic tag names to literal code sequences.
///
/// Owned by the embedding application; the dialog only reads it.
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    entries: HashMap<String, Vec<String>>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a semantic tag. Codes apply in order.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(name.into(), codes.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Strip all `{{...}}` tags from `text` and resolve them into one style.
///
/// Returns the cleaned text and the resolved style. Text outside tags is
/// preserved verbatim; an unterminated `{{` is ordinary text. With no tags
/// at all, `base` comes back untouched.
pub fn resolve(text: &str, base: Style, table: &TagTable) -> (String, Style) {
    let mut out = String::with_capacity(text.len());
    let mut style = base;
    let mut seen_tag = false;

    let mut rest = text;
    while let Some(open) = rest.find("{{") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            // Unterminated: everything left is plain text.
            break;
        };

        out.push_str(&rest[..open]);
        let body = &after_open[..close];
        rest = &after_open[close + 2..];

        // First tag drops inherited styling, keeping only the background.
        if !seen_tag {
            seen_tag = true;
            style = Style::new(Rgba::TERMINAL_DEFAULT, base.bg);
        }

        if let Some(inner) = body.strip_prefix('|') {
            // Literal sequence: codes separated by pipes.
            let inner = inner.strip_suffix('|').unwrap_or(inner);
            for code in inner.split('|').filter(|c| !c.is_empty()) {
                apply_code(&mut style, code);
            }
        } else if let Some(codes) = table.get(body) {
            // Semantic: a trailing reset is a terminator for raw-ANSI
            // consumers, not an instruction, unless it is the whole entry.
            let codes = match codes {
                [head @ .., last] if !head.is_empty() && last == "reset" => head,
                all => all,
            };
            for code in codes {
                apply_code(&mut style, code);
            }
        }
        // Unknown semantic names fall through: stripped, nothing applied.
    }
    out.push_str(rest);

    (out, style)
}

/// Apply one style code. Unknown codes are ignored.
fn apply_code(style: &mut Style, code: &str) {
    let code = code.trim().to_lowercase();

    match code.as_str() {
        "reset" => {
            style.fg = Rgba::TERMINAL_DEFAULT;
            style.attrs = Attr::NONE;
            return;
        }
        "bold" => return style.attrs |= Attr::BOLD,
        "dim" => return style.attrs |= Attr::DIM,
        "italic" => return style.attrs |= Attr::ITALIC,
        "underline" => return style.attrs |= Attr::UNDERLINE,
        "blink" => return style.attrs |= Attr::BLINK,
        "reverse" => return style.attrs |= Attr::INVERSE,
        "strike" | "strikethrough" => return style.attrs |= Attr::STRIKETHROUGH,
        "bright" => {
            style.fg = style.fg.brighten();
            return;
        }
        _ => {}
    }

    if let Some(bg_name) = code.strip_prefix("on-") {
        if let Some(color) = named_color(bg_name) {
            style.bg = color;
        }
        return;
    }

    if let Some(color) = named_color(&code) {
        style.fg = color;
    }
}

/// Resolve a color code: ANSI names, `bright-` variants, or hex.
fn named_color(name: &str) -> Option<Rgba> {
    let (bright, name) = match name.strip_prefix("bright-") {
        Some(rest) => (true, rest),
        None => (false, name),
    };

    let index = match name {
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "magenta" => 5,
        "cyan" => 6,
        "white" => 7,
        "gray" | "grey" => 8,
        _ => return Rgba::parse(name),
    };

    Some(Rgba::ansi(if bright && index < 8 {
        index + 8
    } else {
        index
    }))
}

// =============================================================================
// Tests
// =============================================================================
