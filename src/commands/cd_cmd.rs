use crate::commands::{Arity, Command, CommandContext, CommandResult};
use crate::fs::{navigate, Navigation};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn arity(&self) -> Arity {
        Arity::Required
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let target = ctx.arg.unwrap_or_default();
        match navigate(ctx.vfs, &ctx.session.cwd, target) {
            Ok(Navigation::AtRoot) => CommandResult::success(String::new()),
            Ok(Navigation::Parent(path)) => {
                let stdout = format!("Moved up one level: '{}'\n", path);
                ctx.session.cwd = path;
                CommandResult::success(stdout)
            }
            Ok(Navigation::Child(path)) => {
                let stdout = format!("{}\n", path);
                ctx.session.cwd = path;
                CommandResult::success(stdout)
            }
            Err(e) => CommandResult::with_exit_code(format!("{}\n", e), String::new(), 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Fixture;

    #[test]
    fn test_cd_into_explicit_directory() {
        let mut fx = Fixture::sample();
        let result = fx.run(&CdCommand, Some("3"));
        assert_eq!(result.stdout, "/3/\n");
        assert_eq!(fx.session.cwd, "/3/");
    }

    #[test]
    fn test_cd_then_parent() {
        let mut fx = Fixture::sample();
        let first = fx.run(&CdCommand, Some("3"));
        let second = fx.run(&CdCommand, Some(".."));
        assert_eq!(
            format!("{}{}", first.stdout, second.stdout),
            "/3/\nMoved up one level: '/'\n"
        );
        assert_eq!(fx.session.cwd, "/");
    }

    #[test]
    fn test_cd_parent_at_root_is_silent_noop() {
        let mut fx = Fixture::sample();
        let result = fx.run(&CdCommand, Some(".."));
        assert_eq!(result.stdout, "");
        assert_eq!(result.exit_code, 0);
        assert_eq!(fx.session.cwd, "/");
    }

    #[test]
    fn test_cd_missing_directory() {
        let mut fx = Fixture::sample();
        let result = fx.run(&CdCommand, Some("nowhere"));
        assert_eq!(result.stdout, "No such directory: nowhere\n");
        assert_eq!(result.exit_code, 1);
        assert_eq!(fx.session.cwd, "/");
    }

    #[test]
    fn test_cd_directory_known_only_by_its_files() {
        let mut fx = Fixture::sample();
        let result = fx.run(&CdCommand, Some("1"));
        assert_eq!(result.stdout, "No such directory: 1\n");
        assert_eq!(fx.session.cwd, "/");
    }

    #[test]
    fn test_cd_parent_keeps_trailing_slash() {
        let mut fx = Fixture::new(&["a/", "a/b/", "b/", "a/b/c.txt"]);
        fx.run(&CdCommand, Some("a"));
        fx.run(&CdCommand, Some("b"));
        assert_eq!(fx.session.cwd, "/a/b/");
        let result = fx.run(&CdCommand, Some(".."));
        assert_eq!(result.stdout, "Moved up one level: '/a/'\n");
        assert_eq!(fx.session.cwd, "/a/");
    }
}
