// src/session/state.rs
use chrono::{DateTime, Local};

/// Mutable per-session context handed to every command.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub username: String,
    pub computer_name: String,
    /// Working directory. Always `/` or a `/`-terminated prefix.
    pub cwd: String,
    /// Raw command lines that dispatched to a known command, in order.
    pub history: Vec<String>,
    pub started_at: DateTime<Local>,
}

impl SessionState {
    pub fn new(username: &str, computer_name: &str) -> Self {
        Self {
            username: username.to_string(),
            computer_name: computer_name.to_string(),
            cwd: "/".to_string(),
            history: Vec::new(),
            started_at: Local::now(),
        }
    }

    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.username, self.computer_name, self.cwd)
    }
}
