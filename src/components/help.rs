use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Calendar",
        &[
            ("h/l  \u{2190}/\u{2192}", "Previous/next day"),
            ("k/j  \u{2191}/\u{2193}", "Previous/next week"),
            ("[/]", "Previous/next month"),
            ("t", "Jump to today"),
        ],
    ),
    (
        "Reminders",
        &[
            ("a/i/Enter", "Type a new reminder"),
            ("Tab/S-Tab", "Select next/previous"),
            ("d/Del", "Delete selected reminder"),
        ],
    ),
    ("", &[("q/Esc", "Quit / close popup")]),
];

pub struct Help;

impl Help {
    pub fn render(frame: &mut Frame, area: Rect) {
        let theme = theme::current();
        let popup_w = area.width.clamp(30, 52).min(area.width);
        let popup_h = area.height.clamp(12, 18).min(area.height);
        let x = area.x + area.width.saturating_sub(popup_w) / 2;
        let y = area.y + area.height.saturating_sub(popup_h) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keybindings ")
            .title_style(theme.accent.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(theme.accent);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let key_style = theme.header;
        let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let mut lines = Vec::new();
        for (i, (section, keys)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            if !section.is_empty() {
                lines.push(Line::from(Span::styled(*section, section_style)));
            }
            for (key, desc) in keys.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<12}", key), key_style),
                    Span::raw(*desc),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
