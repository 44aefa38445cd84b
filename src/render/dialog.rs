//! The dialog layout pipeline: measure, rows, buttons, compose, bevel,
//! shadow, center.
//!
//! `render_dialog` is a pure function of the view it is given: same view,
//! same theme, same frame and same zones. Zone rectangles are recorded in
//! the same pass that draws the cells they cover, from the same geometry,
//! so hit-testing can never drift from what is on screen.
//!
//! Two compositions exist. With a title, the item list gets its own
//! bordered box with the title embedded in the top border and the button
//! row sits in a second box directly below. Without one, both live in a
//! single box separated by a connector divider row.

use crate::focus::FocusTarget;
use crate::tags::{self, TagTable};
use crate::text::{clip_to, split_first_grapheme, string_width};
use crate::theme::DialogTheme;
use crate::types::Rect;
use crate::zone::{item_zone_id, ZoneRegistry, ZONE_BACK, ZONE_EXIT, ZONE_SELECT};

use super::buffer::FrameBuffer;

/// Gap between the label column and the description column.
const COLUMN_GAP: usize = 2;

/// One list row: label plus optional description column.
#[derive(Debug, Clone, Copy)]
pub struct DialogRow<'a> {
    pub label: &'a str,
    pub description: &'a str,
}

/// Everything the pipeline needs to draw one frame.
#[derive(Debug, Clone)]
pub struct DialogView<'a> {
    pub title: Option<&'a str>,
    pub subtitle: Option<&'a str>,
    pub rows: Vec<DialogRow<'a>>,
    pub cursor: usize,
    pub focus: FocusTarget,
    pub has_back: bool,
    pub width: u16,
    pub height: u16,
}

/// One button chip of the dialog's action row.
#[derive(Debug, Clone, Copy)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub zone: &'static str,
    pub target: FocusTarget,
}

/// The configured buttons, in Select / Back / Exit order.
pub fn button_set(has_back: bool) -> Vec<ButtonSpec> {
    let mut buttons = vec![ButtonSpec {
        label: "Select",
        zone: ZONE_SELECT,
        target: FocusTarget::Select,
    }];
    if has_back {
        buttons.push(ButtonSpec {
            label: "Back",
            zone: ZONE_BACK,
            target: FocusTarget::Back,
        });
    }
    buttons.push(ButtonSpec {
        label: "Exit",
        zone: ZONE_EXIT,
        target: FocusTarget::Exit,
    });
    buttons
}

/// Render one frame of the dialog, rewriting `zones` as a side effect.
pub fn render_dialog(
    view: &DialogView<'_>,
    theme: &DialogTheme,
    table: &TagTable,
    zones: &mut ZoneRegistry,
) -> FrameBuffer {
    zones.reset();

    let glyphs = theme.border_style.glyphs();
    let base = theme.base_style();
    let lit = theme.border_style(true);
    let shade = theme.border_style(false);

    let title = view
        .title
        .map(|t| tags::resolve(t, theme.title_style(), table));
    let subtitle = view
        .subtitle
        .map(|s| tags::resolve(s, theme.subtitle_style(), table));

    // 1. Measure. Everything below is display columns.
    let label_w = view
        .rows
        .iter()
        .map(|r| string_width(r.label))
        .max()
        .unwrap_or(0);
    let desc_w = view
        .rows
        .iter()
        .map(|r| string_width(r.description))
        .max()
        .unwrap_or(0);
    let item_w = if desc_w > 0 {
        label_w + COLUMN_GAP + desc_w
    } else {
        label_w
    };

    let buttons = button_set(view.has_back);
    let chips: Vec<String> = buttons.iter().map(|b| format!("< {} >", b.label)).collect();
    let chips_total: usize = chips.iter().map(|c| string_width(c)).sum();
    let buttons_min = chips_total + COLUMN_GAP * (chips.len() - 1);

    // Minimum content width keeps the title and full button row fitting;
    // only an undersized terminal can still clip, at the frame edge.
    let mut content = item_w.max(buttons_min);
    if let Some((text, _)) = &title {
        content = content.max(string_width(text) + 2);
    }
    if let Some((text, _)) = &subtitle {
        content = content.max(string_width(text));
    }

    let inner = content + 2; // one column of padding each side
    let box_w = inner + 2; // plus borders
    let sub_rows = usize::from(subtitle.is_some());
    let titled = title.is_some();
    let list_h = sub_rows + view.rows.len() + 2;
    let box_h = if titled {
        list_h + 3 // separate 3-row button box below
    } else {
        list_h + 2 // divider row + button row inside the same box
    };

    let shadow_pad = usize::from(theme.shadow.is_enabled());

    // 7/8. Center the dialog-plus-shadow block in the terminal.
    let x0 = (view.width as usize).saturating_sub(box_w + shadow_pad) / 2;
    let y0 = (view.height as usize).saturating_sub(box_h + shadow_pad) / 2;
    let (x0, y0) = (x0 as u16, y0 as u16);
    let (box_w16, box_h16) = (box_w as u16, box_h as u16);

    let mut fb = FrameBuffer::with_background(view.width, view.height, theme.screen_style());
    fb.draw_shadow(x0, y0, box_w16, box_h16, theme.shadow, theme.shadow_style());
    fb.fill_rect(x0, y0, box_w16, box_h16, base);

    // 4/5. Borders and chrome.
    if titled {
        fb.draw_bevel_border(x0, y0, box_w16, list_h as u16, glyphs, lit, shade);
        fb.draw_bevel_border(
            x0,
            y0 + list_h as u16,
            box_w16,
            3,
            glyphs,
            lit,
            shade,
        );
    } else {
        fb.draw_bevel_border(x0, y0, box_w16, box_h16, glyphs, lit, shade);
        // Divider: the two adjacent borders of the titled layout collapsed
        // into one row.
        let dy = y0 + (sub_rows + view.rows.len() + 1) as u16;
        for col in (x0 + 1)..(x0 + box_w16 - 1) {
            fb.set_cell(col, dy, glyphs.horizontal, shade);
        }
        fb.set_cell(x0, dy, glyphs.joint_left, lit);
        fb.set_cell(x0 + box_w16 - 1, dy, glyphs.joint_right, shade);
    }

    if let Some((text, style)) = &title {
        // Embedded centered in the top border: ...──┤ Title ├──...
        let embed = format!(" {text} ");
        let total = string_width(&embed) + 2;
        let sx = x0 + (box_w.saturating_sub(total) / 2) as u16;
        fb.set_cell(sx, y0, glyphs.joint_right, lit);
        let used = fb.draw_text(sx + 1, y0, &embed, *style);
        fb.set_cell(sx + 1 + used, y0, glyphs.joint_left, lit);
    }

    // Content origin: border plus one padding column.
    let cx = x0 + 2;
    let mut y = y0 + 1;

    if let Some((text, style)) = &subtitle {
        fb.draw_text(cx, y, clip_to(text, content), *style);
        y += 1;
    }

    // 2. Item rows.
    for (i, row) in view.rows.iter().enumerate() {
        let selected = i == view.cursor;
        let row_style = theme.item_style(selected);

        // The selection bar fills the whole content width evenly.
        fb.fill_rect(cx, y, content as u16, 1, row_style);

        let mut x = cx;
        if let Some((head, rest)) = split_first_grapheme(row.label) {
            x += fb.draw_text(x, y, head, theme.hotkey_style(selected));
            x += fb.draw_text(x, y, rest, row_style);
        }
        if desc_w > 0 && !row.description.is_empty() {
            let dx = cx + (label_w + COLUMN_GAP) as u16;
            fb.draw_text(dx.max(x), y, row.description, row_style);
        }

        zones.mark(item_zone_id(i), Rect::new(x0 + 1, y, inner as u16, 1));
        y += 1;
    }

    // 3. Button row: even spacing, centered within the content width.
    let btn_y = y0 + box_h16 - 2;
    let n = chips.len();
    let gap = content.saturating_sub(chips_total) / (n + 1);
    let used = chips_total + gap * (n + 1);
    let mut bx = cx + (gap + content.saturating_sub(used) / 2) as u16;
    let content_end = cx + content as u16;
    for (chip, button) in chips.iter().zip(&buttons) {
        let active = view.focus == button.target;
        let style = theme.button_style(active);
        // Clip rather than fail when the row cannot fit.
        let room = content_end.saturating_sub(bx) as usize;
        let text = clip_to(chip, room);
        if text.is_empty() {
            break;
        }
        let w = fb.draw_text(bx, btn_y, text, style);
        zones.mark(button.zone, Rect::new(bx, btn_y, w, 1));
        bx += w + gap as u16;
    }

    fb
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::terminal;
    use crate::types::Rgba;

    fn view<'a>(rows: Vec<DialogRow<'a>>) -> DialogView<'a> {
        DialogView {
            title: None,
            subtitle: None,
            rows,
            cursor: 0,
            focus: FocusTarget::List,
            has_back: false,
            width: 40,
            height: 12,
        }
    }

    fn rows2() -> Vec<DialogRow<'static>> {
        vec![
            DialogRow {
                label: "Start",
                description: "",
            },
            DialogRow {
                label: "Quit",
                description: "",
            },
        ]
    }

    #[test]
    fn titled_layout_geometry() {
        let mut v = view(rows2());
        v.title = Some("Menu");
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &terminal(), &TagTable::new(), &mut zones);

        // content = button row minimum (20), box 24x7 centered in 40x12.
        let top = fb.row_text(2);
        assert!(top.contains("┤ Menu ├"), "top border: {top}");
        assert!(fb.row_text(3).contains("Start"));
        assert!(fb.row_text(4).contains("Quit"));
        assert!(fb.row_text(7).contains("< Select >"));
        assert!(fb.row_text(7).contains("< Exit >"));

        assert_eq!(zones.get("item-0"), Some(Rect::new(9, 3, 22, 1)));
        assert_eq!(zones.get("item-1"), Some(Rect::new(9, 4, 22, 1)));
        assert_eq!(zones.get(ZONE_SELECT), Some(Rect::new(11, 7, 10, 1)));
        assert_eq!(zones.get(ZONE_EXIT), Some(Rect::new(21, 7, 8, 1)));
        assert_eq!(zones.get(ZONE_BACK), None);
    }

    #[test]
    fn merged_layout_has_divider() {
        let v = view(rows2());
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &terminal(), &TagTable::new(), &mut zones);

        // Single box: top, items, divider, buttons, bottom.
        let text = fb.to_text();
        assert!(text.contains("├"), "divider joints missing:\n{text}");
        assert!(text.contains("┤"));
        // One border less than the titled layout.
        let border_rows = text
            .lines()
            .filter(|l| l.contains('─') || l.contains('├'))
            .count();
        assert_eq!(border_rows, 3);
    }

    #[test]
    fn back_button_present_when_configured() {
        let mut v = view(rows2());
        v.has_back = true;
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &terminal(), &TagTable::new(), &mut zones);

        assert!(fb.to_text().contains("< Back >"));
        assert!(zones.get(ZONE_BACK).is_some());
    }

    #[test]
    fn selection_bar_fills_row() {
        let mut v = view(rows2());
        v.cursor = 1;
        let theme = terminal();
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &theme, &TagTable::new(), &mut zones);

        let row = zones.get("item-1").unwrap();
        let selected_bg = theme.item_style(true).bg;
        // The bar spans the full content width, not just the label.
        for x in (row.x + 1)..(row.x + row.width - 1) {
            assert_eq!(fb.get(x, row.y).unwrap().bg, selected_bg, "col {x}");
        }
        let other = zones.get("item-0").unwrap();
        assert_ne!(fb.get(other.x + 1, other.y).unwrap().bg, selected_bg);
    }

    #[test]
    fn hotkey_cell_is_highlighted() {
        let v = view(rows2());
        let theme = terminal();
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &theme, &TagTable::new(), &mut zones);

        let row = zones.get("item-0").unwrap();
        // First content column holds the label head in the hotkey color.
        let cell = fb.get(row.x + 1, row.y).unwrap();
        assert_eq!(cell.char, 'S' as u32);
        assert_eq!(cell.fg, theme.hotkey_style(true).fg);
    }

    #[test]
    fn active_button_styled() {
        let mut v = view(rows2());
        v.focus = FocusTarget::Exit;
        let theme = terminal();
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &theme, &TagTable::new(), &mut zones);

        let exit = zones.get(ZONE_EXIT).unwrap();
        let select = zones.get(ZONE_SELECT).unwrap();
        assert_eq!(
            fb.get(exit.x, exit.y).unwrap().bg,
            theme.button_style(true).bg
        );
        assert_ne!(
            fb.get(select.x, select.y).unwrap().bg,
            theme.button_style(true).bg
        );
    }

    #[test]
    fn description_column_aligned() {
        let v = view(vec![
            DialogRow {
                label: "New",
                description: "start a game",
            },
            DialogRow {
                label: "Load",
                description: "resume",
            },
        ]);
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &terminal(), &TagTable::new(), &mut zones);

        let r0 = zones.get("item-0").unwrap();
        let r1 = zones.get("item-1").unwrap();
        let text0 = fb.row_text(r0.y);
        let text1 = fb.row_text(r1.y);
        // label column (4 wide) + 2 gap before descriptions.
        let d0 = text0.find("start a game").unwrap();
        let d1 = text1.find("resume").unwrap();
        assert_eq!(d0, d1);
        assert!(text0.contains("New"));
    }

    #[test]
    fn subtitle_resolved_and_placed() {
        let mut v = view(rows2());
        v.subtitle = Some("{{|bold|}}choose wisely");
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &terminal(), &TagTable::new(), &mut zones);

        let text = fb.to_text();
        assert!(text.contains("choose wisely"));
        assert!(!text.contains("{{"));
        // Subtitle shifts every item row down one.
        assert_eq!(zones.get("item-0").unwrap().y, 4);
    }

    #[test]
    fn render_is_idempotent() {
        let mut v = view(rows2());
        v.title = Some("Menu");
        v.has_back = true;
        let theme = terminal();
        let table = TagTable::new();

        let mut zones_a = ZoneRegistry::new();
        let mut zones_b = ZoneRegistry::new();
        let a = render_dialog(&v, &theme, &table, &mut zones_a);
        let b = render_dialog(&v, &theme, &table, &mut zones_b);

        assert_eq!(a, b);
        for id in ["item-0", "item-1", ZONE_SELECT, ZONE_BACK, ZONE_EXIT] {
            assert_eq!(zones_a.get(id), zones_b.get(id), "zone {id}");
        }
    }

    #[test]
    fn shadow_drawn_when_enabled() {
        let mut theme = terminal();
        theme.shadow = crate::types::Shadow::Medium;
        theme.shadow_color = crate::theme::ThemeColor::Ansi(0);
        let v = view(rows2());
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &theme, &TagTable::new(), &mut zones);
        assert!(fb.to_text().contains('▒'));
    }

    #[test]
    fn empty_items_still_renders_buttons() {
        let v = view(Vec::new());
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &terminal(), &TagTable::new(), &mut zones);

        assert!(fb.to_text().contains("< Select >"));
        assert!(zones.get("item-0").is_none());
        assert!(zones.get(ZONE_SELECT).is_some());
    }

    #[test]
    fn tiny_terminal_clips_without_panic() {
        let mut v = view(rows2());
        v.title = Some("A very long menu title indeed");
        v.width = 10;
        v.height = 4;
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &terminal(), &TagTable::new(), &mut zones);
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 4);
    }

    #[test]
    fn wide_labels_measured_in_columns() {
        let v = view(vec![
            DialogRow {
                label: "中文菜单",
                description: "",
            },
            DialogRow {
                label: "exit",
                description: "",
            },
        ]);
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &terminal(), &TagTable::new(), &mut zones);
        let text = fb.to_text();
        assert!(text.contains("中文菜单"));
        // Both rows share one zone width.
        assert_eq!(
            zones.get("item-0").unwrap().width,
            zones.get("item-1").unwrap().width
        );
    }

    #[test]
    fn screen_backdrop_fills_margins() {
        let theme = crate::theme::steel();
        let v = view(rows2());
        let mut zones = ZoneRegistry::new();
        let fb = render_dialog(&v, &theme, &TagTable::new(), &mut zones);
        assert_eq!(fb.get(0, 0).unwrap().bg, Rgba::from_rgb_int(0x0000a8));
    }
}
