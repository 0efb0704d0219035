//! Crossterm front-end for the pathfinding visualiser.
//!
//! Provides a [`Terminal`] guard that puts the terminal into raw mode on the
//! alternate screen, a [`TerminalRenderer`] implementing
//! [`pathviz_session::Renderer`], and [`read_input`] which maps key presses
//! and mouse clicks to [`Input`] commands.

use std::io::{self, Write};

use crossterm::{cursor, event, execute, terminal};

mod input;
mod render;

pub use input::{Input, Layout, Move, read_input, to_input};
pub use render::{Mark, TerminalRenderer, cell_style};

/// Raw-mode session on the alternate screen. Restores the terminal on drop.
pub struct Terminal {
    mouse: bool,
    active: bool,
}

impl Terminal {
    /// Enter raw mode and the alternate screen, optionally capturing mouse
    /// events.
    pub fn enter(mouse: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut term = Self {
            mouse,
            active: true,
        };
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        if term.mouse {
            if let Err(e) = execute!(stdout, event::EnableMouseCapture) {
                log::warn!("mouse capture unavailable: {e}");
                term.mouse = false;
            }
        }
        Ok(term)
    }

    /// Restore the terminal now instead of on drop.
    pub fn leave(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.leave();
    }
}
