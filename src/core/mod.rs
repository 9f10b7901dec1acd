//! Timer core components.
//!
//! The pieces the event loop coordinates:
//!
//! - **session**: raw-mode/alternate-screen guard with guaranteed restoration
//! - **signals**: async-signal-safe flag bridge for resize/termination
//! - **timer**: the pure working/paused/stopped state machine
//!
//! # Ownership
//!
//! ```text
//! event loop (main.rs)
//! ├── TerminalSession (exclusive, scoped to the run)
//! ├── SignalBridge    (flags shared with the OS handlers)
//! └── TimerState      (mutated once per accepted event)
//! ```

pub mod session;
pub mod signals;
pub mod timer;
