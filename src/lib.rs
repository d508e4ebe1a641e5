//! vfs-shell - A minimal shell over a read-only, archive-backed file system
//!
//! The VFS is loaded once from a zip archive and never mutated. A session
//! replays an optional startup script, then reads commands interactively,
//! recording every command in an XML action log written on `exit`.

pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod session;
pub mod shell;

pub use config::{ConfigError, ShellConfig};
pub use error::ShellError;
pub use fs::{PathMap, VfsError};
pub use session::{SessionLog, SessionState};
pub use shell::Shell;
