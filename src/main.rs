//! CLI entry point and command handlers for regform.

mod cli;
mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.quiet {
        std::env::set_var("REGFORM_QUIET", "1");
    }

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init { force } => cmd::init::cmd_init(config_path, force),
        Commands::Format { field, value } => cmd::format::cmd_format(field, &value),
        Commands::Check {
            email,
            password,
            confirm_password,
            tax_id,
            phone,
            role,
            json,
        } => cmd::check::cmd_check(
            config_path,
            cmd::check::CheckInput {
                email,
                password,
                confirm_password,
                tax_id,
                phone,
                role,
            },
            json,
        ),
        Commands::Replay { script, json } => cmd::replay::cmd_replay(config_path, &script, json),
        Commands::Register => cmd::register::cmd_register(config_path),
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "regform=debug" } else { "regform=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "regform", &mut io::stdout());
    Ok(())
}
