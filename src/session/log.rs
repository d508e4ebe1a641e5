//! Session Log
//!
//! Ordered, append-only record of every dispatched command. Held in memory for
//! the whole session and written out once, as an XML document, on `exit`.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

pub const SESSION_START: &str = "session_start";
pub const SESSION_END: &str = "session_end";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The log could not be written. Reported, never fatal.
#[derive(Error, Debug)]
#[error("Failed to write session log to {path}: {source}")]
pub struct LogWriteError {
    pub path: String,
    pub source: io::Error,
}

/// One `<action>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub user: String,
    pub timestamp: String,
    pub command: String,
}

#[derive(Debug, Clone)]
pub struct SessionLog {
    user: String,
    destination: PathBuf,
    entries: Vec<LogEntry>,
}

impl SessionLog {
    /// Create the log and record the `session_start` marker.
    pub fn start(user: &str, destination: impl Into<PathBuf>) -> Self {
        let mut log = Self {
            user: user.to_string(),
            destination: destination.into(),
            entries: Vec::new(),
        };
        log.append(SESSION_START);
        log
    }

    /// Append an entry for the session user.
    pub fn append(&mut self, command: &str) {
        let user = self.user.clone();
        self.append_as(command, &user);
    }

    /// Append an entry on behalf of an explicit user.
    pub fn append_as(&mut self, command: &str, user: &str) {
        self.entries.push(LogEntry {
            user: user.to_string(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            command: command.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Render the whole log as a `<session>` document.
    pub fn to_xml(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<session>\n");
        for entry in &self.entries {
            out.push_str("  <action>\n");
            push_element(&mut out, "user", &entry.user);
            push_element(&mut out, "timestamp", &entry.timestamp);
            push_element(&mut out, "command", &entry.command);
            out.push_str("  </action>\n");
        }
        out.push_str("</session>\n");
        out
    }

    /// Overwrite the destination file with the full log.
    pub fn persist(&self) -> Result<(), LogWriteError> {
        std::fs::write(&self.destination, self.to_xml()).map_err(|source| LogWriteError {
            path: self.destination.display().to_string(),
            source,
        })
    }
}

fn push_element(out: &mut String, name: &str, text: &str) {
    out.push_str(&format!("    <{}>{}</{}>\n", name, escape_xml(text), name));
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
