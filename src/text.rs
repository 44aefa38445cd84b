//! Display-width measurement for terminal text.
//!
//! Terminal cells are the unit of layout, so every measurement here is in
//! display columns, not bytes or chars. Grapheme clusters are measured as
//! units: emoji ZWJ sequences, flags and keycaps all count as one glyph of
//! width 2 even though they span many codepoints.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Zero-width joiner, the glue inside emoji sequences.
const ZWJ: char = '\u{200D}';
/// Variation selector-16: forces emoji presentation.
const VS16: char = '\u{FE0F}';
/// Combining enclosing keycap (1️⃣ and friends).
const KEYCAP: char = '\u{20E3}';

/// Display width of a single codepoint.
///
/// Defers to `unicode-width` but forces the emoji blocks that terminals
/// render double-wide regardless of their East Asian Width property.
pub fn char_width(c: char) -> usize {
    let cp = c as u32;

    let forced_wide = matches!(
        cp,
        0x2600..=0x27BF      // misc symbols + dingbats
        | 0x1F300..=0x1F5FF  // misc symbols and pictographs
        | 0x1F600..=0x1F64F  // emoticons
        | 0x1F680..=0x1F6FF  // transport and map symbols
        | 0x1F900..=0x1F9FF  // supplemental symbols
        | 0x1FA70..=0x1FAFF  // symbols extended-A
    );
    if forced_wide {
        return 2;
    }

    c.width().unwrap_or(0)
}

/// Display width of one grapheme cluster.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return 0,
    };

    // Single codepoint: the common case.
    if chars.clone().next().is_none() {
        return char_width(first);
    }

    // Regional indicator pair renders as one flag.
    let is_regional = |c: char| ('\u{1F1E6}'..='\u{1F1FF}').contains(&c);
    if is_regional(first) {
        return 2;
    }

    // ZWJ sequences, emoji presentation, skin tones and keycaps all
    // collapse to a single double-wide glyph.
    let emoji_joined = grapheme.chars().any(|c| {
        c == ZWJ || c == VS16 || c == KEYCAP || ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
    });
    if emoji_joined {
        return 2;
    }

    // Base char plus combining marks: the base decides.
    char_width(first)
}

/// Display width of a whole string.
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    // ASCII fast path: one column per printable byte.
    if s.is_ascii() {
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }

    s.graphemes(true).map(grapheme_width).sum()
}

/// Split off the first grapheme cluster: `(head, rest)`.
///
/// The head carries the hotkey emphasis in menu rows.
pub fn split_first_grapheme(s: &str) -> Option<(&str, &str)> {
    let head = s.graphemes(true).next()?;
    Some((head, &s[head.len()..]))
}

/// Longest prefix of `s` that fits in `max` display columns.
pub fn clip_to(s: &str, max: usize) -> &str {
    let mut used = 0;
    let mut end = 0;
    for g in s.graphemes(true) {
        let w = grapheme_width(g);
        if used + w > max {
            break;
        }
        used += w;
        end += g.len();
    }
    &s[..end]
}

/// Right-pad `s` with spaces up to `width` display columns.
///
/// Strings already at or over the target come back unchanged.
pub fn pad_to(s: &str, width: usize) -> String {
    let current = string_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + (width - current));
    out.push_str(s);
    for _ in current..width {
        out.push(' ');
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── char_width ──

    #[test]
    fn char_width_ascii() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(' '), 1);
    }

    #[test]
    fn char_width_cjk() {
        assert_eq!(char_width('中'), 2);
        assert_eq!(char_width('あ'), 2);
    }

    #[test]
    fn char_width_emoji_forced() {
        assert_eq!(char_width('☀'), 2);
        assert_eq!(char_width('🚀'), 2);
    }

    #[test]
    fn char_width_zero() {
        assert_eq!(char_width('\u{0301}'), 0); // combining acute
    }

    // ── grapheme_width ──

    #[test]
    fn grapheme_width_single() {
        assert_eq!(grapheme_width("x"), 1);
        assert_eq!(grapheme_width("中"), 2);
    }

    #[test]
    fn grapheme_width_flag() {
        assert_eq!(grapheme_width("🇧🇷"), 2);
    }

    #[test]
    fn grapheme_width_zwj_sequence() {
        assert_eq!(grapheme_width("👨‍👩‍👧"), 2);
    }

    #[test]
    fn grapheme_width_combining() {
        assert_eq!(grapheme_width("e\u{0301}"), 1);
    }

    // ── string_width ──

    #[test]
    fn string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn string_width_mixed() {
        assert_eq!(string_width("ab中"), 4);
    }

    // ── helpers ──

    #[test]
    fn split_first() {
        assert_eq!(split_first_grapheme("Quest"), Some(("Q", "uest")));
        assert_eq!(split_first_grapheme("中文"), Some(("中", "文")));
        assert_eq!(split_first_grapheme(""), None);
    }

    #[test]
    fn clip_fits() {
        assert_eq!(clip_to("hello", 10), "hello");
        assert_eq!(clip_to("hello", 3), "hel");
        assert_eq!(clip_to("中文字", 4), "中文");
        // A wide glyph never straddles the boundary.
        assert_eq!(clip_to("中文字", 5), "中文");
        assert_eq!(clip_to("hello", 0), "");
    }

    #[test]
    fn pad_widths() {
        assert_eq!(pad_to("ab", 4), "ab  ");
        assert_eq!(pad_to("abcd", 2), "abcd");
        assert_eq!(pad_to("中", 4), "中  ");
    }
}
