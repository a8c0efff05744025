use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::InputMode;
use crate::theme;

const NOTE_PREFIX: &str = "\u{1F4DD}  ";

pub struct ReminderList;

impl ReminderList {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        date: NaiveDate,
        notes: &[String],
        selected_index: usize,
        input: &str,
        input_mode: InputMode,
    ) {
        let theme = theme::current();
        let w = area.width as usize;

        let title = if w >= 28 {
            format!(" Reminders for {} ", date.format("%Y-%m-%d"))
        } else {
            format!(" {} ", date.format("%m/%d"))
        };
        let count = match notes.len() {
            0 => String::new(),
            1 => " 1 reminder ".to_string(),
            n => format!(" {} reminders ", n),
        };

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(count, theme.dim)))
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).split(inner);
        render_input(frame, rows[0], input, input_mode);

        if notes.is_empty() {
            let msg = Paragraph::new(" No reminders").style(theme.dim);
            frame.render_widget(msg, rows[1]);
            return;
        }

        let max = (rows[1].width as usize).saturating_sub(NOTE_PREFIX.chars().count() + 2);
        let items: Vec<ListItem> = notes
            .iter()
            .enumerate()
            .map(|(i, note)| {
                let style = if i == selected_index {
                    theme.highlight
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(format!("{}{}", NOTE_PREFIX, truncate(note, max)), style),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items), rows[1]);
    }
}

fn render_input(frame: &mut Frame, area: Rect, input: &str, mode: InputMode) {
    let theme = theme::current();
    let (border, text) = match mode {
        InputMode::Editing => (theme.accent, Line::from(format!("{}_", input))),
        InputMode::Normal if input.is_empty() => (
            theme.border,
            Line::from(Span::styled("Add a reminder. (press a)", theme.dim)),
        ),
        InputMode::Normal => (theme.border, Line::from(input.to_string())),
    };

    let block = Block::default().borders(Borders::ALL).border_style(border);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Shorten `s` to at most `max` characters, marking the cut with "...".
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Call dentist", 20), "Call dentist");
        assert_eq!(truncate("Call dentist", 7), "Call...");
        assert_eq!(truncate("caf\u{e9} au lait", 5), "ca...");
        assert_eq!(truncate("abc", 2), "ab");
    }
}
