//! Signal-to-flag bridge.
//!
//! Handlers set an atomic flag and do nothing else, so they are safe
//! to run at any point relative to the main loop. Interrupt, quit,
//! hangup, and terminate all mean "stop and restore the terminal";
//! window-change means "re-measure and re-lay-out". Terminal stop
//! (Ctrl-Z) gets a handler so the default suspend action cannot fire
//! while the alternate screen is active; its flag is never consulted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::Result;

/// Pending signal requests, cleared by the read that returned them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalFlags {
    pub resize_requested: bool,
    pub terminate_requested: bool,
}

/// Owns the flag state shared with the OS signal handlers.
pub struct SignalBridge {
    resize: Arc<AtomicBool>,
    terminate: Arc<AtomicBool>,
}

impl SignalBridge {
    /// Register all handlers. Runs before raw mode is entered, so a
    /// failure here needs no terminal restoration.
    pub fn install() -> Result<Self> {
        let resize = Arc::new(AtomicBool::new(false));
        let terminate = Arc::new(AtomicBool::new(false));

        #[cfg(unix)]
        {
            use signal_hook::consts::{SIGHUP, SIGINT, SIGQUIT, SIGTERM, SIGTSTP, SIGWINCH};

            use crate::error::TimerError;

            for sig in [SIGINT, SIGQUIT, SIGHUP, SIGTERM] {
                signal_hook::flag::register(sig, Arc::clone(&terminate))
                    .map_err(TimerError::SignalSetup)?;
            }
            signal_hook::flag::register(SIGWINCH, Arc::clone(&resize))
                .map_err(TimerError::SignalSetup)?;
            // registration alone replaces the default stop action
            signal_hook::flag::register(SIGTSTP, Arc::new(AtomicBool::new(false)))
                .map_err(TimerError::SignalSetup)?;
        }

        Ok(Self { resize, terminate })
    }

    /// Read and clear the pending flags. The swap is atomic, so a flag
    /// raised between the read and the clear lands in the next
    /// snapshot instead of being lost.
    pub fn poll_and_clear(&self) -> SignalFlags {
        SignalFlags {
            resize_requested: self.resize.swap(false, Ordering::SeqCst),
            terminate_requested: self.terminate.swap(false, Ordering::SeqCst),
        }
    }
}
