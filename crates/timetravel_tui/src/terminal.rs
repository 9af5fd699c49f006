//! Raw mode and alternate screen, restored on drop.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::Write;
use tracing::{info, warn};

/// Holds the terminal in game mode until dropped.
///
/// Dropping restores the screen even when setup failed halfway or the game
/// loop returned an error.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then switches `out` to the alternate screen.
    pub fn enter(out: W) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = Self { out, raw: true };
        execute!(guard.out, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        info!("Terminal in raw mode");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
        if self.raw
            && let Err(err) = disable_raw_mode()
        {
            warn!(error = %err, "Failed to disable raw mode");
        }
        let _ = self.out.flush();
    }
}
