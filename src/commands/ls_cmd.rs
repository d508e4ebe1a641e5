use crate::commands::{Arity, Command, CommandContext, CommandResult};
use crate::fs::{navigate, PathMap};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn arity(&self) -> Arity {
        Arity::Optional
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let cwd = &ctx.session.cwd;
        // `ls <path>` lists the target without moving the session.
        let dir = match ctx.arg {
            None => cwd.clone(),
            Some(target) => match navigate(ctx.vfs, cwd, target) {
                Ok(nav) => nav.target(cwd).to_string(),
                Err(e) => {
                    return CommandResult::with_exit_code(format!("{}\n", e), String::new(), 1)
                }
            },
        };
        CommandResult::success(list_dir(ctx.vfs, &dir))
    }
}

/// Immediate children of `dir`, sorted, one per line.
pub fn list_dir(vfs: &PathMap, dir: &str) -> String {
    vfs.children_of(dir)
        .into_iter()
        .map(|name| format!("{}\n", name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Fixture;

    #[test]
    fn test_ls_root() {
        let mut fx = Fixture::sample();
        let result = fx.run(&LsCommand, None);
        assert_eq!(result.stdout, "1\n2\n3\n4.txt\nstart.sh\n");
    }

    #[test]
    fn test_ls_independent_of_member_order() {
        let mut fx = Fixture::new(&["z.txt", "b/x", "a.txt", "b/y", "/c/"]);
        let result = fx.run(&LsCommand, None);
        assert_eq!(result.stdout, "a.txt\nb\nc\nz.txt\n");
    }

    #[test]
    fn test_ls_with_path_restores_cwd() {
        let mut fx = Fixture::new(&["docs/", "docs/readme.md", "docs/guide.md", "top.txt"]);
        let result = fx.run(&LsCommand, Some("docs"));
        assert_eq!(result.stdout, "guide.md\nreadme.md\n");
        assert_eq!(fx.session.cwd, "/");
    }

    #[test]
    fn test_ls_parent() {
        let mut fx = Fixture::sample();
        fx.session.cwd = "/3/".to_string();
        let result = fx.run(&LsCommand, Some(".."));
        assert_eq!(result.stdout, "1\n2\n3\n4.txt\nstart.sh\n");
        assert_eq!(fx.session.cwd, "/3/");
    }

    #[test]
    fn test_ls_missing_path() {
        let mut fx = Fixture::sample();
        let result = fx.run(&LsCommand, Some("ghost"));
        assert_eq!(result.stdout, "No such directory: ghost\n");
        assert_eq!(fx.session.cwd, "/");
    }

    #[test]
    fn test_ls_empty_directory_prints_nothing() {
        let mut fx = Fixture::sample();
        let result = fx.run(&LsCommand, Some("3"));
        assert_eq!(result.stdout, "");
        assert_eq!(result.exit_code, 0);
    }
}
