use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme for the rest of the process. Only the first call wins.
pub fn init(theme: Theme) {
    let _ = THEME.set(theme);
}

/// Get the active theme, falling back to the default preset.
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub today: Style,
    pub selected: Style,
    /// Days that have at least one reminder.
    pub marked: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub highlight: Style,
    pub accent: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            today: Style::default().fg(Color::Black).bg(Color::Yellow),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            marked: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            highlight: Style::default().fg(Color::Black).bg(Color::LightBlue),
            accent: Style::default().fg(Color::Green),
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = config
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        override_colors(&mut theme.today, &config.today_fg, &config.today_bg);
        override_colors(&mut theme.selected, &config.selected_fg, &config.selected_bg);
        override_colors(&mut theme.marked, &config.marked_fg, &config.marked_bg);
        override_colors(&mut theme.header, &config.header_fg, &None);
        override_colors(&mut theme.dim, &config.dim_fg, &None);
        override_colors(&mut theme.border, &config.border_fg, &None);
        override_colors(&mut theme.status, &config.status_fg, &config.status_bg);
        override_colors(&mut theme.highlight, &config.highlight_fg, &config.highlight_bg);
        override_colors(&mut theme.accent, &config.accent_fg, &None);

        theme
    }

    /// Get a built-in preset by name. Unknown names give the default.
    pub fn preset(name: &str) -> Self {
        match name {
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::default(),
        }
    }

    fn nord() -> Self {
        let panel = Color::Rgb(67, 76, 94);
        let snow = Color::Rgb(229, 233, 240);
        let frost = Color::Rgb(136, 192, 208);
        Self {
            name: "nord".to_string(),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(235, 203, 139)),
            selected: Style::default().fg(Color::Black).bg(frost),
            marked: Style::default()
                .fg(Color::Rgb(129, 161, 193))
                .add_modifier(Modifier::BOLD),
            header: Style::default().fg(snow).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(76, 86, 106)),
            border: Style::default().fg(panel),
            status: Style::default().fg(snow).bg(panel),
            highlight: Style::default().fg(Color::Black).bg(frost),
            accent: Style::default().fg(Color::Rgb(163, 190, 140)),
        }
    }

    fn gruvbox() -> Self {
        let panel = Color::Rgb(80, 73, 69);
        let cream = Color::Rgb(235, 219, 178);
        Self {
            name: "gruvbox".to_string(),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(250, 189, 47)),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(131, 165, 152)),
            marked: Style::default()
                .fg(Color::Rgb(254, 128, 25))
                .add_modifier(Modifier::BOLD),
            header: Style::default().fg(cream).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(146, 131, 116)),
            border: Style::default().fg(Color::Rgb(102, 92, 84)),
            status: Style::default().fg(cream).bg(panel),
            highlight: Style::default().fg(cream).bg(panel).add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::Rgb(184, 187, 38)),
        }
    }
}

fn override_colors(style: &mut Style, fg: &Option<String>, bg: &Option<String>) {
    if let Some(c) = fg.as_deref().and_then(parse_color) {
        *style = style.fg(c);
    }
    if let Some(c) = bg.as_deref().and_then(parse_color) {
        *style = style.bg(c);
    }
}

// ── TOML config types ──

/// The `[theme]` table of the config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub today_fg: Option<String>,
    pub today_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub marked_fg: Option<String>,
    pub marked_bg: Option<String>,
    pub header_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    pub highlight_fg: Option<String>,
    pub highlight_bg: Option<String>,
    pub accent_fg: Option<String>,
}

/// Parse a color string: hex "#rrggbb", a 256-colour index, or a named colour.
fn parse_color(s: &str) -> Option<Color> {
    s.trim().parse().ok()
}
