//! Session Module
//!
//! Per-session mutable state and the persisted action log.

pub mod log;
pub mod state;

pub use log::{LogEntry, LogWriteError, SessionLog, SESSION_END, SESSION_START};
pub use state::SessionState;
