//! CLI module - Command-line interface for extrack
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// extrack - Exercise tracker
/// Register users, log exercises and query exercise logs over HTTP
#[derive(Parser)]
#[command(name = "extrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "daemon")]
    Serve,

    /// Create default config file
    Init,

    /// List registered users
    #[command(alias = "ls")]
    Users,

    /// Show a user's exercise log
    Log {
        /// User ID
        user_id: String,
        /// Only entries after this date (yyyy-mm-dd)
        #[arg(long)]
        from: Option<String>,
        /// Only entries before this date (yyyy-mm-dd)
        #[arg(long)]
        to: Option<String>,
        /// Maximum number of entries
        #[arg(long)]
        limit: Option<String>,
    },
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_command() {
        let cli = Cli::try_parse_from([
            "extrack", "log", "aB3dE", "--from", "2021-01-01", "--limit", "2",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Log {
                user_id,
                from,
                to,
                limit,
            }) => {
                assert_eq!(user_id, "aB3dE");
                assert_eq!(from.as_deref(), Some("2021-01-01"));
                assert!(to.is_none());
                assert_eq!(limit.as_deref(), Some("2"));
            }
            _ => panic!("expected log command"),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["extrack"]).unwrap();
        assert!(cli.command.is_none());
    }
}
