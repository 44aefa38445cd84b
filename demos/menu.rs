//! Interactive demo - a full menu dialog on the real terminal.
//!
//! Demonstrates everything working together:
//! - keyboard navigation (arrows, hotkeys, Enter, Esc)
//! - mouse clicks on items and buttons
//! - theme presets, bevel borders and the drop shadow
//! - the help line driven by the selected item
//!
//! Run with: cargo run --example menu
//! Keys: arrows move, letters jump, Enter activates, t cycles themes,
//! Esc/Exit quits.

use std::io;
use std::time::Duration;

use ridge_tui::input::{poll_event, Event};
use ridge_tui::menu::{Command, Menu, MenuConfig, MenuItem};
use ridge_tui::render::Terminal;
use ridge_tui::theme::get_preset;
use ridge_tui::{SelectionMemory, TagTable};

#[derive(Debug, Clone)]
enum Action {
    Greet,
    Theme,
    Nothing,
}

const THEMES: [&str; 3] = ["steel", "slate", "terminal"];

fn build_menu(memory: &SelectionMemory) -> Menu<Action> {
    let config = MenuConfig::new("demo")
        .title("ridge-tui")
        .subtitle("{{|bold|}}A dialog widget demo")
        .items(vec![
            MenuItem::new("Greet")
                .description("print a greeting on exit")
                .help("Prints a message after the dialog closes")
                .action(Action::Greet),
            MenuItem::new("Theme")
                .description("cycle the color preset")
                .hotkey('t')
                .help("Switches between steel, slate and terminal")
                .action(Action::Theme),
            MenuItem::new("Nothing")
                .description("an action that does nothing")
                .action(Action::Nothing),
        ]);
    Menu::new(config, memory.clone())
}

fn main() -> io::Result<()> {
    let memory = SelectionMemory::new();
    let tags = TagTable::new();
    let mut menu = build_menu(&memory);

    let mut theme_index = 0;
    let mut theme = get_preset(THEMES[theme_index]).unwrap_or_default();

    let mut term = Terminal::new();
    term.open(true)?;

    let (w, h) = Terminal::size();
    menu.handle(Event::Resize(w, h));

    let mut farewell: Option<String> = None;
    'main: loop {
        let frame = menu.render(&theme, &tags);
        term.present(&frame)?;

        let event = poll_event(Duration::from_millis(100))?;
        if let Event::Resize(..) = event {
            term.invalidate();
        }

        let outcome = menu.handle(event);
        let Some(command) = outcome.command else {
            continue;
        };
        match command {
            Command::Run(Action::Greet) => {
                farewell = Some("Hello from ridge-tui!".to_string());
                break 'main;
            }
            Command::Run(Action::Theme) => {
                theme_index = (theme_index + 1) % THEMES.len();
                theme = get_preset(THEMES[theme_index]).unwrap_or_default();
            }
            Command::Run(Action::Nothing) => {}
            Command::Help => {
                farewell = menu.help_line().map(|line| format!("Help: {line}"));
                break 'main;
            }
            Command::Quit => break 'main,
        }
    }

    term.close()?;
    if let Some(message) = farewell {
        println!("{message}");
    }
    Ok(())
}
