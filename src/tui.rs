use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch to the alternate screen in raw mode. A panic restores the terminal
/// before the previous hook prints its message.
pub fn init() -> io::Result<Tui> {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        previous_hook(panic_info);
    }));

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if let Err(err) = enable_raw_mode() {
        let _ = execute!(stdout, LeaveAlternateScreen);
        return Err(err);
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}
