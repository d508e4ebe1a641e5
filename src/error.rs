//! Fatal session errors.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::fs::VfsError;

/// Errors that abort the session before or outside the command loop.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Archive(#[from] VfsError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
