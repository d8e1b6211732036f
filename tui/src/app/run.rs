use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::state::{Action, App};
use crate::ui;

const POLL_TIMEOUT: Duration = Duration::from_millis(15);

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context(
            "failed to enter raw mode; make sure you are running inside a real terminal",
        )?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the visualizer until `Esc`/`q` or a terminal failure.
///
/// One loop iteration = poll input, advance training by elapsed time, redraw.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails. The terminal is
/// restored on every exit path, including errors.
pub fn run() -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("failed to create the terminal backend")?;
    terminal.clear()?;

    let mut app = App::new()?;
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                if let Action::Quit = app.handle_key(k.code) {
                    break;
                }
            }
        }

        let now = Instant::now();
        app.tick(now - last_frame);
        last_frame = now;
    }

    terminal.show_cursor()?;
    Ok(())
}
