mod app;
mod components;
mod config;
mod event;
mod logging;
mod reminders;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, InputMode};
use chrono::Local;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};

use crate::config::Config;
use crate::reminders::ReminderStore;
use crate::theme::Theme;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    logging::init(config.log_path().as_deref());
    theme::init(Theme::from_config(&config.theme));

    let store = ReminderStore::load(config.reminders_path());
    let mut app = App::new(store, Local::now().date_naive());
    log::info!(
        "Using reminders file {} with theme {}",
        app.store().path().display(),
        theme::current().name
    );

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;

    if let Err(ref err) = result {
        log::error!("Exiting after error: {:#}", err);
    }
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

            render_main(frame, layout[0], app);

            if app.show_help {
                components::Help::render(frame, area);
            }

            components::StatusBar::render(
                frame,
                layout[1],
                app.input_mode,
                app.status_message.as_deref(),
            );
        })?;

        if let Some(key) = event::next_key_press(Duration::from_millis(250))? {
            app.status_message = None;

            if app.show_help {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    app.show_help = false;
                }
                continue;
            }

            match app.input_mode {
                InputMode::Editing => handle_editing_input(app, key.code, key.modifiers)?,
                InputMode::Normal => handle_normal_input(app, key.code, key.modifiers)?,
            }
        }
    }

    Ok(())
}

fn handle_normal_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.prev_day(),
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.next_day(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.prev_week(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.next_week(),
        (KeyCode::Char('['), _) => app.prev_month(),
        (KeyCode::Char(']'), _) => app.next_month(),
        (KeyCode::Char('t'), _) => app.go_to_today(),
        (KeyCode::Char('a'), _) | (KeyCode::Char('i'), _) | (KeyCode::Enter, _) => {
            app.start_editing();
        }
        (KeyCode::Tab, _) => app.select_next_note(),
        (KeyCode::BackTab, _) => app.select_prev_note(),
        (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => app.delete_selected()?,
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
    match (code, modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.running = false,
        (KeyCode::Esc, _) => app.cancel_editing(),
        (KeyCode::Enter, _) => app.submit_input()?,
        (KeyCode::Backspace, _) => app.input_backspace(),
        (KeyCode::Char(c), _) => app.input_char(c),
        _ => {}
    }
    Ok(())
}

fn render_main(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    // Stack the calendar above the list on narrow terminals.
    let content = if area.width < 70 {
        Layout::vertical([Constraint::Length(9), Constraint::Min(5)]).split(area)
    } else {
        Layout::horizontal([Constraint::Length(37), Constraint::Min(30)]).split(area)
    };

    components::MonthView::render(
        frame,
        content[0],
        app.selected_date,
        app.today,
        &app.marked_days(),
    );
    components::ReminderList::render(
        frame,
        content[1],
        app.selected_date,
        app.notes(),
        app.selected_note,
        &app.input,
        app.input_mode,
    );
}
