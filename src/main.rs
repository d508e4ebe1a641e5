use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vfs_shell::{Shell, ShellConfig, ShellError};

#[derive(Parser)]
#[command(name = "vfs-shell")]
#[command(about = "A shell emulator over a read-only zip-backed file system")]
#[command(version)]
struct Cli {
    /// TOML configuration file (user, archive, log and startup script paths)
    #[arg()]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout belongs to the shell.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ShellError> {
    let config = ShellConfig::load(&cli.config)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let mut shell = Shell::bootstrap(&config, &mut stdout, &mut stderr)?;
    shell.run(&mut input, &mut stdout, &mut stderr)
}
