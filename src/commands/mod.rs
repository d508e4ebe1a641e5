// src/commands/mod.rs
pub mod cd_cmd;
pub mod exit_cmd;
pub mod history_cmd;
pub mod ls_cmd;
pub mod pwd_cmd;
pub mod registry;
pub mod tree_cmd;
pub mod types;
pub mod uptime_cmd;
pub mod whoami_cmd;

pub use registry::{create_builtin_registry, CommandRegistry};
pub use types::{Arity, Command, CommandContext, CommandResult};
