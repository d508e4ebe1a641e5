//! VFS Shell
//!
//! Main entry point for a shell session. Ties together the loaded VFS, the
//! session state, the action log and the builtin commands.
//!
//! Every line, whether it comes from the startup script or the interactive
//! prompt, goes through [`Shell::dispatch`].

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::commands::{create_builtin_registry, CommandContext, CommandRegistry, CommandResult};
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::fs::{load_zip_file, PathMap};
use crate::session::{SessionLog, SessionState};

/// Extension a startup script must carry to be replayed.
const SCRIPT_EXTENSION: &str = "sh";

/// One interactive session over a read-only VFS.
pub struct Shell {
    vfs: PathMap,
    state: SessionState,
    log: SessionLog,
    registry: CommandRegistry,
    start_script: Option<PathBuf>,
    closed: bool,
}

impl Shell {
    /// Create a session over an already loaded VFS. The log starts here.
    pub fn new(config: &ShellConfig, vfs: PathMap) -> Self {
        info!(user = config.username(), entries = vfs.len(), "session started");
        Self {
            vfs,
            state: SessionState::new(config.username(), config.computer_name()),
            log: SessionLog::start(config.username(), config.paths.log.clone()),
            registry: create_builtin_registry(),
            start_script: config.paths.start_script.clone(),
            closed: false,
        }
    }

    /// Load the archive, start the log and replay the startup script.
    ///
    /// Decode warnings and script output are written to `out`/`err`.
    pub fn bootstrap(
        config: &ShellConfig,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Self, ShellError> {
        let loaded = load_zip_file(&config.paths.vfs)?;
        for warning in &loaded.warnings {
            writeln!(out, "{}", warning)?;
        }
        let mut shell = Shell::new(config, loaded.map);
        shell.run_start_script(out, err)?;
        Ok(shell)
    }

    /// Parse one command line, run it, and record it.
    ///
    /// Every line yields exactly one log entry, except `exit`, whose
    /// `session_end` marker closes the log instead. Only lines that reach a
    /// builtin are added to the history.
    pub fn dispatch(&mut self, line: &str) -> CommandResult {
        if self.closed {
            return CommandResult::error("session closed\n".to_string());
        }
        debug!(command = line, cwd = %self.state.cwd, "dispatch");

        let (name, arg) = match line.split_once(' ') {
            Some((name, arg)) => (name, Some(arg)),
            None => (line, None),
        };

        let result = match self.registry.get(name) {
            Some(cmd) if cmd.arity().accepts(arg) => {
                let mut ctx = CommandContext::new(arg, &self.vfs, &mut self.state, &mut self.log);
                let result = cmd.execute(&mut ctx);
                self.state.history.push(line.to_string());
                result
            }
            _ => CommandResult::not_found(line),
        };

        if result.terminate {
            info!(entries = self.log.len(), "session ended");
            self.closed = true;
        } else {
            self.log.append(line);
        }
        result
    }

    /// Replay the configured startup script, if it exists and is a `.sh` file.
    pub fn run_start_script(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<()> {
        let path = match &self.start_script {
            Some(path) if path.exists() => path.clone(),
            _ => return Ok(()),
        };
        if path.extension().and_then(|e| e.to_str()) != Some(SCRIPT_EXTENSION) {
            debug!(script = %path.display(), "not a shell script, skipping");
            return Ok(());
        }

        writeln!(out, "Running start script: {}", path.display())?;
        let script = std::fs::read_to_string(&path)?;
        for line in script.lines() {
            let command = line.trim();
            if command.is_empty() || command.starts_with('#') {
                continue;
            }
            if self.closed {
                break;
            }
            writeln!(out, "Executing command from script: {}", command)?;
            let result = self.dispatch(command);
            emit(&result, out, err)?;
        }
        Ok(())
    }

    /// Interactive read-execute loop. Returns once the session is closed.
    ///
    /// End of input behaves like `exit` so the log is still written.
    pub fn run(
        &mut self,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), ShellError> {
        let mut line = String::new();
        while !self.closed {
            write!(out, "{}", self.prompt())?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                let result = self.dispatch("exit");
                emit(&result, out, err)?;
                break;
            }

            let command = line.trim_end_matches(&['\n', '\r'][..]);
            if command.trim().is_empty() {
                continue;
            }
            let result = self.dispatch(command);
            emit(&result, out, err)?;
        }
        Ok(())
    }

    pub fn prompt(&self) -> String {
        self.state.prompt()
    }

    pub fn cwd(&self) -> &str {
        &self.state.cwd
    }

    pub fn history(&self) -> &[String] {
        &self.state.history
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn vfs(&self) -> &PathMap {
        &self.vfs
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

fn emit(result: &CommandResult, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<()> {
    out.write_all(result.stdout.as_bytes())?;
    err.write_all(result.stderr.as_bytes())?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
