use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str { "history" }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let mut stdout = String::new();
        for cmd in &ctx.session.history {
            stdout.push_str(cmd);
            stdout.push('\n');
        }
        CommandResult::success(stdout)
    }
}
