// src/commands/types.rs
use crate::fs::PathMap;
use crate::session::{SessionLog, SessionState};

/// Result of running one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Set by `exit`: the session must close after this command.
    pub terminate: bool,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, ..Default::default() }
    }

    pub fn error(stderr: String) -> Self {
        Self { stderr, exit_code: 1, ..Default::default() }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code, terminate: false }
    }

    /// The line matched no command.
    pub fn not_found(line: &str) -> Self {
        Self::with_exit_code(format!("Command not found: {}\n", line), String::new(), 127)
    }
}

/// Whether a command takes an argument after its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Optional,
    Required,
}

impl Arity {
    pub fn accepts(self, arg: Option<&str>) -> bool {
        match self {
            Arity::None => arg.is_none(),
            Arity::Optional => true,
            Arity::Required => arg.is_some(),
        }
    }
}

/// Everything a command may read or mutate.
pub struct CommandContext<'a> {
    /// Raw text after the command name, if any.
    pub arg: Option<&'a str>,
    pub vfs: &'a PathMap,
    pub session: &'a mut SessionState,
    pub log: &'a mut SessionLog,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        arg: Option<&'a str>,
        vfs: &'a PathMap,
        session: &'a mut SessionState,
        log: &'a mut SessionLog,
    ) -> Self {
        Self { arg, vfs, session, log }
    }
}

pub trait Command {
    fn name(&self) -> &'static str;
    fn arity(&self) -> Arity {
        Arity::None
    }
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult;
}
