//! Terminal setup and teardown for the easel shell.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used throughout the shell.
pub type EaselTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enables raw mode and enters the alternate screen.
///
/// Pair with [`restore_terminal`] on exit.
pub fn setup_terminal() -> io::Result<EaselTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leaves the alternate screen and hands the terminal back to the caller's
/// shell in a usable state.
pub fn restore_terminal(terminal: &mut EaselTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Installs a panic hook that restores the terminal before the panic message
/// prints, so a crash never leaves the host terminal in raw mode.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
