use std::collections::HashSet;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{dir_prefix, PathMap};

pub struct TreeCommand;

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let mut output = String::new();
        build_tree(ctx.vfs, &dir_prefix(&ctx.session.cwd), "", &mut output);
        CommandResult::success(output)
    }
}

/// Depth-first rendering of everything below `prefix`.
///
/// A name is a directory when the remaining relative path still contains a
/// separator. An explicit empty directory renders as one blank indented line.
fn build_tree(vfs: &PathMap, prefix: &str, indent: &str, output: &mut String) {
    let mut printed: HashSet<&str> = HashSet::new();

    for (key, _) in vfs.under(prefix) {
        let relative = &key[prefix.len()..];
        match relative.split_once('/') {
            Some((dir, _)) => {
                if printed.insert(dir) {
                    output.push_str(&format!("{}{}/\n", indent, dir));
                    let child = format!("{}{}/", prefix, dir);
                    build_tree(vfs, &child, &format!("{}  ", indent), output);
                }
            }
            None => output.push_str(&format!("{}{}\n", indent, relative)),
        }
    }
}
