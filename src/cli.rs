use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "recipebook")]
#[command(version)]
#[command(about = "Recipe book and shopping list backed by a realtime database")]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Starts the interactive terminal UI (default)
    Tui,
    /// Fetches the stored recipes and prints them
    List,
    /// Forgets the stored login session
    Logout,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Tui)
    }
}
