//! Error taxonomy for the timer.
//!
//! Everything fatal funnels into [`TimerError`]: failures before raw
//! mode is entered are printed straight to stderr, failures after it
//! are routed through the session teardown first so the message lands
//! on a restored screen.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimerError {
    #[error("failed to configure the terminal: {0}")]
    TerminalConfig(#[source] io::Error),

    #[error("failed to install signal handlers: {0}")]
    SignalSetup(#[source] io::Error),

    #[error(
        "terminal too small: need at least {min_cols}x{min_rows}, have {cols}x{rows}"
    )]
    InsufficientSpace {
        min_rows: u16,
        min_cols: u16,
        rows: u16,
        cols: u16,
    },

    #[error("unknown font '{name}' (available: {})", .available.join(", "))]
    UnknownFont {
        name: String,
        available: Vec<&'static str>,
    },
}

pub type Result<T> = std::result::Result<T, TimerError>;
