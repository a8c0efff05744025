use std::collections::HashSet;

use chrono::{Datelike, Days, Months, NaiveDate};
use color_eyre::Result;

use crate::reminders::ReminderStore;

pub const NOTHING_SELECTED: &str = "Select a reminder to delete.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub selected_date: NaiveDate,
    pub today: NaiveDate,
    pub input: String,
    pub selected_note: usize,
    pub status_message: Option<String>,
    pub show_help: bool,
    store: ReminderStore,
}

impl App {
    pub fn new(store: ReminderStore, today: NaiveDate) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            selected_date: today,
            today,
            input: String::new(),
            selected_note: 0,
            status_message: None,
            show_help: false,
            store,
        }
    }

    pub fn store(&self) -> &ReminderStore {
        &self.store
    }

    /// Notes for the selected date.
    pub fn notes(&self) -> &[String] {
        self.store.reminders(self.selected_date)
    }

    /// Days of the visible month that carry reminders.
    pub fn marked_days(&self) -> HashSet<u32> {
        let (year, month) = (self.selected_date.year(), self.selected_date.month());
        self.store
            .dates_with_reminders()
            .into_iter()
            .filter(|d| d.year() == year && d.month() == month)
            .map(|d| d.day())
            .collect()
    }

    pub fn next_day(&mut self) {
        self.set_date(self.selected_date.succ_opt());
    }

    pub fn prev_day(&mut self) {
        self.set_date(self.selected_date.pred_opt());
    }

    pub fn next_week(&mut self) {
        self.set_date(self.selected_date.checked_add_days(Days::new(7)));
    }

    pub fn prev_week(&mut self) {
        self.set_date(self.selected_date.checked_sub_days(Days::new(7)));
    }

    /// Same day next month, clamped to the month's length.
    pub fn next_month(&mut self) {
        self.set_date(self.selected_date.checked_add_months(Months::new(1)));
    }

    pub fn prev_month(&mut self) {
        self.set_date(self.selected_date.checked_sub_months(Months::new(1)));
    }

    pub fn go_to_today(&mut self) {
        self.set_date(Some(self.today));
    }

    fn set_date(&mut self, date: Option<NaiveDate>) {
        if let Some(date) = date {
            self.selected_date = date;
            self.selected_note = 0;
        }
    }

    pub fn select_next_note(&mut self) {
        let len = self.notes().len();
        if len > 0 {
            self.selected_note = (self.selected_note + 1) % len;
        }
    }

    pub fn select_prev_note(&mut self) {
        let len = self.notes().len();
        if len > 0 {
            self.selected_note = (self.selected_note + len - 1) % len;
        }
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn cancel_editing(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Add the typed text to the selected date. Blank input is dropped quietly.
    pub fn submit_input(&mut self) -> Result<()> {
        let text = std::mem::take(&mut self.input);
        self.input_mode = InputMode::Normal;

        let before = self.notes().len();
        if let Err(err) = self.store.add_reminder(self.selected_date, &text) {
            self.input = text;
            return Err(err);
        }

        let after = self.notes().len();
        if after > before {
            self.selected_note = after - 1;
            self.status_message = Some("Reminder added".to_string());
        }
        Ok(())
    }

    pub fn delete_selected(&mut self) -> Result<()> {
        let Some(text) = self.notes().get(self.selected_note).cloned() else {
            self.status_message = Some(NOTHING_SELECTED.to_string());
            return Ok(());
        };

        if self.store.delete_reminder(self.selected_date, &text)? {
            self.status_message = Some("Reminder deleted".to_string());
        }
        self.selected_note = self
            .selected_note
            .min(self.notes().len().saturating_sub(1));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app_on(dir: &TempDir, today: NaiveDate) -> App {
        App::new(ReminderStore::load(dir.path().join("reminders.json")), today)
    }

    fn type_note(app: &mut App, text: &str) {
        app.start_editing();
        text.chars().for_each(|c| app.input_char(c));
        app.submit_input().unwrap();
    }

    #[test]
    fn typed_note_is_added_and_selected() {
        let dir = TempDir::new().unwrap();
        let mut app = app_on(&dir, date(2024, 3, 15));

        type_note(&mut app, "Dentist");
        type_note(&mut app, "Lunch");

        assert_eq!(app.notes(), ["Dentist", "Lunch"]);
        assert_eq!(app.selected_note, 1);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.input.is_empty());
        assert_eq!(app.marked_days(), HashSet::from([15]));
    }

    #[test]
    fn blank_input_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut app = app_on(&dir, date(2024, 3, 15));

        type_note(&mut app, "   ");

        assert!(app.notes().is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn backspace_and_cancel_edit_the_buffer() {
        let dir = TempDir::new().unwrap();
        let mut app = app_on(&dir, date(2024, 3, 15));

        app.start_editing();
        app.input_char('h');
        app.input_char('x');
        app.input_backspace();
        assert_eq!(app.input, "h");

        app.cancel_editing();
        assert!(app.input.is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.notes().is_empty());
    }

    #[test]
    fn delete_with_nothing_selected_reports_status() {
        let dir = TempDir::new().unwrap();
        let mut app = app_on(&dir, date(2024, 3, 15));

        app.delete_selected().unwrap();

        assert_eq!(app.status_message.as_deref(), Some(NOTHING_SELECTED));
        assert!(!dir.path().join("reminders.json").exists());
    }

    #[test]
    fn delete_removes_selected_note_and_clamps() {
        let dir = TempDir::new().unwrap();
        let mut app = app_on(&dir, date(2024, 3, 15));
        type_note(&mut app, "Dentist");
        type_note(&mut app, "Lunch");

        app.delete_selected().unwrap();
        assert_eq!(app.notes(), ["Dentist"]);
        assert_eq!(app.selected_note, 0);

        app.delete_selected().unwrap();
        assert!(app.notes().is_empty());
        assert!(app.marked_days().is_empty());
    }

    #[test]
    fn note_selection_wraps() {
        let dir = TempDir::new().unwrap();
        let mut app = app_on(&dir, date(2024, 3, 15));
        for note in ["a", "b", "c"] {
            type_note(&mut app, note);
        }

        app.select_next_note();
        assert_eq!(app.selected_note, 0);
        app.select_prev_note();
        assert_eq!(app.selected_note, 2);
    }

    #[test]
    fn navigation_moves_date_and_resets_selection() {
        let dir = TempDir::new().unwrap();
        let mut app = app_on(&dir, date(2024, 1, 31));
        type_note(&mut app, "a");
        type_note(&mut app, "b");

        app.next_month();
        assert_eq!(app.selected_date, date(2024, 2, 29));
        assert_eq!(app.selected_note, 0);

        app.prev_week();
        assert_eq!(app.selected_date, date(2024, 2, 22));
        app.next_day();
        assert_eq!(app.selected_date, date(2024, 2, 23));
        app.prev_month();
        assert_eq!(app.selected_date, date(2024, 1, 23));
        app.next_week();
        app.prev_day();
        assert_eq!(app.selected_date, date(2024, 1, 29));

        app.go_to_today();
        assert_eq!(app.selected_date, date(2024, 1, 31));
        assert_eq!(app.notes(), ["a", "b"]);
    }

    #[test]
    fn marked_days_only_cover_visible_month() {
        let dir = TempDir::new().unwrap();
        let mut app = app_on(&dir, date(2024, 3, 15));
        type_note(&mut app, "Dentist");
        app.next_month();
        app.next_day();
        type_note(&mut app, "Report");

        assert_eq!(app.marked_days(), HashSet::from([16]));
        assert_eq!(app.store().dates_with_reminders().len(), 2);
    }

    #[test]
    fn failed_add_keeps_typed_text() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = ReminderStore::load(blocker.join("reminders.json"));
        let mut app = App::new(store, date(2024, 3, 15));

        app.start_editing();
        app.input_char('x');
        assert!(app.submit_input().is_err());
        assert_eq!(app.input, "x");
        assert!(app.notes().is_empty());
    }
}
