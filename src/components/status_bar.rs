use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::InputMode;
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    /// Mode on the left; the status message, or key hints sized to fit, on the right.
    pub fn render(frame: &mut Frame, area: Rect, mode: InputMode, message: Option<&str>) {
        let style = theme::current().status;
        let w = area.width as usize;

        let mode_str = match mode {
            InputMode::Normal => " [Calendar] ",
            InputMode::Editing => " [New Reminder] ",
        };

        let right = match (message, mode) {
            (Some(msg), _) => format!(" {} ", msg),
            (None, InputMode::Editing) => " Enter:Save Esc:Cancel ".to_string(),
            (None, InputMode::Normal) => hints(w).to_string(),
        };

        let padding = " ".repeat(w.saturating_sub(mode_str.len() + right.chars().count()));

        let line = Line::from(vec![
            Span::styled(mode_str, style),
            Span::styled(padding, style),
            Span::styled(right, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

fn hints(width: usize) -> &'static str {
    if width >= 90 {
        " hjkl:Nav [/]:Month t:Today a:Add Tab:Select d:Delete ?:Help q:Quit "
    } else if width >= 55 {
        " a:Add Tab:Select d:Del ?:Help q:Quit "
    } else {
        " ?:Help q:Quit "
    }
}
