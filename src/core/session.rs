//! Raw-terminal session guard.
//!
//! Entering puts the terminal into raw mode on a cleared alternate
//! screen with the cursor hidden; leaving restores everything. Leave
//! is idempotent and reachable from every exit path: the normal quit
//! path calls it explicitly, `Drop` covers early returns, and the
//! panic hook covers unwinding while the screen is still owned.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};

use crate::error::{Result, TimerError};

/// Whether a session currently owns the terminal. Read by the panic
/// hook, which runs without access to the session value.
static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);
static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

pub struct TerminalSession {
    entered: bool,
}

impl TerminalSession {
    /// Switch to raw mode on a cleared alternate screen. The raw-mode
    /// layer snapshots the pre-program attributes before any change;
    /// a partial failure is rolled back before returning, so the
    /// terminal is either fully entered or untouched.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().map_err(TimerError::TerminalConfig)?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            let _ = terminal::disable_raw_mode();
            return Err(TimerError::TerminalConfig(e));
        }

        SESSION_ACTIVE.store(true, Ordering::SeqCst);
        Ok(Self { entered: true })
    }

    /// Restore the pre-program terminal. Only the first call does
    /// anything; later calls are no-ops.
    pub fn leave(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        SESSION_ACTIVE.store(false, Ordering::SeqCst);

        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetAttribute(Attribute::Reset),
            Show,
            LeaveAlternateScreen
        )
        .map_err(TimerError::TerminalConfig)?;
        stdout.flush().map_err(TimerError::TerminalConfig)?;
        terminal::disable_raw_mode().map_err(TimerError::TerminalConfig)?;
        Ok(())
    }

    /// Current terminal size as (columns, rows).
    pub fn size() -> Result<(u16, u16)> {
        terminal::size().map_err(TimerError::TerminalConfig)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// Restore the terminal before the default panic report so the message
/// lands on a readable screen. Installed once, ahead of any session.
pub fn install_panic_hook() {
    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
            let mut stdout = io::stdout();
            let _ = execute!(
                stdout,
                SetAttribute(Attribute::Reset),
                Show,
                LeaveAlternateScreen
            );
            let _ = terminal::disable_raw_mode();
        }
        previous(info);
    }));
}
