pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use app::InputMode;
use event::{Event, EventHandler};

use crate::wizard::Mode;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    // 250ms tick drives flash message expiry
    let mut events = EventHandler::new(250);

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Normal => match app.session.mode() {
            Mode::Collecting => handle_wizard_key(app, key),
            Mode::ShowingResult => handle_result_key(app, key),
        },
        InputMode::NameInput => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.finish_name_input(),
            KeyCode::Backspace => app.pop_name_char(),
            KeyCode::Char(c) if !c.is_control() => app.push_name_char(c),
            _ => {}
        },
        InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

fn handle_wizard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }

        // Answer the current criterion
        KeyCode::Char(' ') | KeyCode::Char('t') => app.toggle_current_answer(),
        KeyCode::Char('y') => app.set_current_answer(true),
        KeyCode::Char('n') => app.set_current_answer(false),

        // Step navigation; the last step's advance runs the scoring engine
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => app.next(),
        KeyCode::Left | KeyCode::Char('h') => app.previous(),

        // Funder name
        KeyCode::Char('e') => app.start_name_input(),

        // Help
        KeyCode::Char('?') => app.show_help(),

        _ => {}
    }
}

fn handle_result_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        KeyCode::Char('r') => app.start_over(),
        KeyCode::Char('?') => app.show_help(),
        _ => {}
    }
}
