//! CLI argument definitions for regform.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use regform::field::FieldKind;

#[derive(Parser)]
#[command(name = "regform")]
#[command(version)]
#[command(about = "Registration form masks, validation and submit gating", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    regform format tax-id 1234567890\n    regform check --email www@ww.pl --password 'ZAQ!1qaz' --confirm-password 'ZAQ!1qaz' --tax-id 1234567890 --role Administrator\n    regform replay scenario.yaml"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log pipeline decisions to stderr (same as RUST_LOG=regform=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of .regform/config.md
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default config to .regform/config.md
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print a raw value as the form would display it
    Format {
        /// Field the value is typed into
        #[arg(value_enum)]
        field: FieldKind,
        /// Raw input
        value: String,
    },
    /// Fill in the form and report every field verdict
    ///
    /// Fields are entered in the order e-mail, password, confirmation,
    /// tax id, phone, role. Omitted fields stay untouched.
    Check {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        confirm_password: Option<String>,
        #[arg(long)]
        tax_id: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        role: Option<String>,
        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay a YAML script of input events and check its expectations
    Replay {
        /// Script path
        script: PathBuf,
        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Fill in the form interactively
    Register,
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
