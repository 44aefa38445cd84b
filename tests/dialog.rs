//! Cross-module scenarios: controller, renderer, zones and memory
//! working together the way an embedding application drives them.

use ridge_tui::input::{Event, Key, KeyEvent, MouseEvent};
use ridge_tui::menu::{Command, Menu, MenuConfig, MenuItem};
use ridge_tui::tags::TagTable;
use ridge_tui::theme::{steel, terminal};
use ridge_tui::{FocusTarget, SelectionMemory};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Start,
    Options,
    Back,
}

fn key(k: Key) -> Event {
    Event::Key(KeyEvent::new(k))
}

fn config() -> MenuConfig<Action> {
    MenuConfig::new("game")
        .title("Adventure")
        .subtitle("{{|bold|}}Choose your path")
        .items(vec![
            MenuItem::new("Start")
                .description("begin a new journey")
                .help("Starts a fresh game")
                .action(Action::Start),
            MenuItem::new("Options")
                .description("tweak the settings")
                .action(Action::Options),
            MenuItem::new("Credits").description("who made this"),
        ])
}

fn sized_menu(config: MenuConfig<Action>, memory: SelectionMemory) -> Menu<Action> {
    let mut menu = Menu::new(config, memory);
    menu.handle(Event::Resize(60, 20));
    menu
}

#[test]
fn cursor_never_leaves_range_under_input_storm() {
    let mut menu = sized_menu(config(), SelectionMemory::new());
    let keys = [
        Key::Up,
        Key::Down,
        Key::Down,
        Key::Char('o'),
        Key::Up,
        Key::End,
        Key::Down,
        Key::Home,
        Key::Up,
        Key::PageDown,
    ];
    for k in keys.iter().cycle().take(100) {
        menu.handle(key(*k));
        assert!(menu.cursor() < 3, "cursor escaped: {}", menu.cursor());
    }
}

#[test]
fn selection_memory_survives_reconstruction() {
    let memory = SelectionMemory::new();
    let mut menu = sized_menu(config(), memory.clone());
    menu.handle(key(Key::Down));
    menu.handle(key(Key::Down));
    assert_eq!(menu.cursor(), 2);
    drop(menu);

    let menu = sized_menu(config(), memory.clone());
    assert_eq!(menu.cursor(), 2);

    // Shrink the item list below the remembered index: clamp to 0.
    let short = MenuConfig::new("game").items(vec![MenuItem::new("Only").action(Action::Start)]);
    let menu = sized_menu(short, memory);
    assert_eq!(menu.cursor(), 0);
}

#[test]
fn frames_and_zones_are_stable_between_events() {
    let mut menu = sized_menu(config(), SelectionMemory::new());
    let theme = steel();
    let tags = TagTable::new();

    let first = menu.render(&theme, &tags);
    let first_zones: Vec<_> = ["item-0", "item-1", "item-2", "btn-select", "btn-exit"]
        .iter()
        .map(|id| menu.zones().get(id))
        .collect();

    let second = menu.render(&theme, &tags);
    let second_zones: Vec<_> = ["item-0", "item-1", "item-2", "btn-select", "btn-exit"]
        .iter()
        .map(|id| menu.zones().get(id))
        .collect();

    assert_eq!(first, second);
    assert_eq!(first_zones, second_zones);
    assert!(first_zones.iter().all(Option::is_some));
}

#[test]
fn click_overrides_button_focus_and_activates() {
    let mut menu = sized_menu(config(), SelectionMemory::new());
    menu.handle(key(Key::Left));
    assert_eq!(menu.focus(), FocusTarget::Exit);
    menu.render(&terminal(), &TagTable::new());

    let rect = menu.zones().get("item-1").unwrap();
    let outcome = menu.handle(Event::Mouse(MouseEvent::down(
        rect.x + rect.width / 2,
        rect.y,
    )));
    assert_eq!(menu.cursor(), 1);
    assert_eq!(menu.focus(), FocusTarget::List);
    assert_eq!(outcome.command, Some(Command::Run(Action::Options)));
}

#[test]
fn click_tracks_layout_after_resize() {
    let mut menu = sized_menu(config(), SelectionMemory::new());
    menu.render(&terminal(), &TagTable::new());
    let before = menu.zones().get("item-0").unwrap();

    menu.handle(Event::Resize(100, 40));
    menu.render(&terminal(), &TagTable::new());
    let after = menu.zones().get("item-0").unwrap();
    assert_ne!(before, after, "zones should move with the layout");

    // A click at the old rectangle misses; the new one hits.
    let miss = menu.handle(Event::Mouse(MouseEvent::down(before.x, before.y)));
    assert!(miss.command.is_none());
    let hit = menu.handle(Event::Mouse(MouseEvent::down(after.x + 1, after.y)));
    assert_eq!(hit.command, Some(Command::Run(Action::Start)));
}

#[test]
fn esc_routes_to_back_action_when_configured() {
    let mut menu = sized_menu(config().back(Action::Back), SelectionMemory::new());
    menu.handle(key(Key::Right)); // focus somewhere else entirely
    let outcome = menu.handle(key(Key::Esc));
    assert_eq!(outcome.command, Some(Command::Run(Action::Back)));

    let mut menu = sized_menu(config(), SelectionMemory::new());
    let outcome = menu.handle(key(Key::Esc));
    assert_eq!(outcome.command, Some(Command::Quit));
}

#[test]
fn back_button_rendered_only_when_configured() {
    let tags = TagTable::new();
    let mut with_back = sized_menu(config().back(Action::Back), SelectionMemory::new());
    let frame = with_back.render(&terminal(), &tags);
    assert!(frame.to_text().contains("< Back >"));
    assert!(with_back.zones().get("btn-back").is_some());

    let mut without = sized_menu(config(), SelectionMemory::new());
    let frame = without.render(&terminal(), &tags);
    assert!(!frame.to_text().contains("< Back >"));
    assert!(without.zones().get("btn-back").is_none());
}

#[test]
fn subtitle_tags_stripped_in_rendered_frame() {
    let mut menu = sized_menu(config(), SelectionMemory::new());
    let frame = menu.render(&terminal(), &TagTable::new());
    let text = frame.to_text();
    assert!(text.contains("Choose your path"));
    assert!(!text.contains("{{"));
    assert!(text.contains("Adventure"));
}

#[test]
fn informational_item_activation_is_silent() {
    let mut menu = sized_menu(config(), SelectionMemory::new());
    menu.handle(key(Key::Up)); // wrap to Credits (index 2, no action)
    assert_eq!(menu.cursor(), 2);
    let outcome = menu.handle(key(Key::Enter));
    assert!(outcome.command.is_none());
}

#[test]
fn full_session_keyboard_walkthrough() {
    let memory = SelectionMemory::new();
    let tags = TagTable::new();
    let theme = steel();
    let mut menu = sized_menu(config().back(Action::Back), memory.clone());

    // Browse with arrows, render between events like a real loop.
    menu.handle(key(Key::Down));
    menu.render(&theme, &tags);
    menu.handle(key(Key::Down));
    menu.render(&theme, &tags);

    // Walk out to the buttons and back in.
    menu.handle(key(Key::Right));
    assert_eq!(menu.focus(), FocusTarget::Select);
    menu.handle(key(Key::Right));
    assert_eq!(menu.focus(), FocusTarget::Back);
    menu.handle(key(Key::Up));
    assert_eq!(menu.focus(), FocusTarget::List);
    assert_eq!(menu.cursor(), 1);

    // Hotkey activation persists the cursor for the next visit.
    let outcome = menu.handle(key(Key::Char('O')));
    assert_eq!(outcome.command, Some(Command::Run(Action::Options)));

    let revisit = sized_menu(config(), memory);
    assert_eq!(revisit.cursor(), 1);
}
