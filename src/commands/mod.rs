use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::env;
use crate::error::Result;
use crate::password::RequestedLength;
use crate::settings::Settings;

pub mod get;
pub mod tui;

#[derive(Parser)]
#[command(name = "passfetch")]
#[command(about = "Fetch random passwords from a password generation API", long_about = None)]
#[command(version)]
#[command(help_expected = true)]
pub struct Cli {
    /// Password generation endpoint (default: BASE_URL env var)
    #[arg(long, env = env::BASE_URL, global = true)]
    pub base_url: Option<String>,

    /// API key sent as the X-Api-Key header (default: API_KEY env var)
    #[arg(long, env = env::API_KEY, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Password length to request first
    #[arg(short, long, default_value_t = RequestedLength::DEFAULT, global = true)]
    pub length: RequestedLength,

    /// Give up on a request after this many seconds (default: no timeout)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Write logs to this file (the TUI defaults to the user cache directory)
    #[arg(long, env = env::PASSFETCH_LOG_FILE, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one password and print it
    Get(get::GetCommand),

    /// Interactive password view (default)
    Tui(tui::TuiCommand),
}

impl Cli {
    pub fn is_tui(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui(_)))
    }

    pub async fn run(&self) -> Result<()> {
        let settings = Settings::from_cli(self);
        tracing::debug!("Using {:?}", settings);

        match &self.command {
            Some(Commands::Get(cmd)) => cmd.run(settings).await,
            Some(Commands::Tui(cmd)) => cmd.run(settings).await,
            None => tui::TuiCommand.run(settings).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_tui() {
        let cli = Cli::try_parse_from(["passfetch"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.is_tui());

        let cli = Cli::try_parse_from(["passfetch", "tui"]).unwrap();
        assert!(cli.is_tui());
    }

    #[test]
    fn test_get_with_copy() {
        let cli = Cli::try_parse_from(["passfetch", "get", "--copy", "-l", "40"]).unwrap();
        assert!(!cli.is_tui());
        assert_eq!(cli.length.get(), 40);
        match cli.command {
            Some(Commands::Get(cmd)) => assert!(cmd.copy),
            _ => panic!("expected get command"),
        }
    }

    #[test]
    fn test_copy_help_mentions_clipboard_hold() {
        let cmd = Cli::command();
        let get = cmd.find_subcommand("get").unwrap();
        let copy = get
            .get_arguments()
            .find(|arg| arg.get_id() == "copy")
            .unwrap();
        let help = copy.get_long_help().unwrap().to_string();
        assert!(help.contains("keeps running to serve the clipboard"));
    }

    #[test]
    fn test_rejects_non_numeric_length() {
        assert!(Cli::try_parse_from(["passfetch", "--length", "abc"]).is_err());
    }
}
