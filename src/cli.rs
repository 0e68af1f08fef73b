use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "prepdesk", about = "Interview preparation assistant (chat + account CLI)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the interactive chat shell
    Chat,
    /// Sign in with email and password
    Login,
    /// Create an account
    Register,
    /// Forget the stored session token
    Logout,
    /// Show the signed-in account
    Whoami,
    /// One-time passcode operations
    Otp {
        #[command(subcommand)]
        command: OtpCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum OtpCommand {
    /// Ask the backend to send a code to an email address
    Send {
        #[arg(long)]
        email: String,
    },
    /// Verify a code received by email
    Verify {
        #[arg(long)]
        email: String,
        #[arg(long)]
        code: String,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}
