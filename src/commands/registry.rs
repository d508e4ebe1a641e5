// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cd_cmd::CdCommand;
use super::exit_cmd::ExitCommand;
use super::history_cmd::HistoryCommand;
use super::ls_cmd::LsCommand;
use super::pwd_cmd::PwdCommand;
use super::tree_cmd::TreeCommand;
use super::uptime_cmd::UptimeCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register every builtin of the VFS shell.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(HistoryCommand));
    registry.register(Box::new(UptimeCommand));
    registry.register(Box::new(ExitCommand));
}

/// Registry preloaded with all builtins.
pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = create_builtin_registry();
        assert_eq!(
            registry.names(),
            vec!["cd", "exit", "history", "ls", "pwd", "tree", "uptime", "whoami"]
        );
        assert!(registry.contains("tree"));
        assert!(registry.get("foobar").is_none());
    }
}
