use tracing::error;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::session::SESSION_END;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        ctx.log.append(SESSION_END);
        // A failed write is reported but never keeps the session open.
        let stderr = match ctx.log.persist() {
            Ok(()) => String::new(),
            Err(e) => {
                error!(error = %e, "session log was not persisted");
                format!("{}\n", e)
            }
        };
        CommandResult {
            stdout: "Exiting...\n".to_string(),
            stderr,
            exit_code: 0,
            terminate: true,
        }
    }
}
