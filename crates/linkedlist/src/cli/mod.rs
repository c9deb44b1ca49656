//! Command-line interface for linkedlist.
//!
//! This module provides the CLI structure for the `llist` binary. Every
//! command builds a list from its trailing values and runs one operation on
//! it.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, GetCommand, RemoveCommand, SetCommand, SliceCommand, ValuesArgs,
};

/// llist - Build a linked list from the command line and operate on it
#[derive(Debug, Parser)]
#[command(name = "llist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the elements of the list
    Show(ValuesArgs),

    /// Print the number of elements
    Len(ValuesArgs),

    /// Print the elements as a JSON array
    List(ValuesArgs),

    /// Print the element a number of steps from the head, or None
    Get(GetCommand),

    /// Print a new list made from a position or a slice
    Slice(SliceCommand),

    /// Remove the first matching element and print the list
    Remove(RemoveCommand),

    /// Overwrite the element at a position and print the list
    Set(SetCommand),

    /// Walk through every operation on a sample list
    Demo,

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{Index, Slice};
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "llist");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        let mut cli = Cli {
            config: None,
            verbose: 0,
            quiet: false,
            command: Command::Demo,
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        cli.verbose = 1;
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        cli.verbose = 2;
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);

        cli.quiet = true;
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["llist", "show", "7", "Hello", "[1, 2, 3]"]).unwrap();
        match cli.command {
            Command::Show(args) => assert_eq!(args.values.len(), 3),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_get_negative_index() {
        let cli = Cli::try_parse_from(["llist", "get", "-1", "a", "b"]).unwrap();
        match cli.command {
            Command::Get(cmd) => {
                assert_eq!(cmd.index, -1);
                assert_eq!(cmd.list.values, vec!["a", "b"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_slice() {
        let cli = Cli::try_parse_from(["llist", "slice", "::-1", "1", "2"]).unwrap();
        match cli.command {
            Command::Slice(cmd) => assert_eq!(cmd.index, Index::Slice(Slice::reversed())),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_slice_rejects_bad_index() {
        assert!(Cli::try_parse_from(["llist", "slice", "abc", "1"]).is_err());
    }

    #[test]
    fn test_parse_remove() {
        let cli = Cli::try_parse_from(["llist", "remove", "Hello", "7", "Hello"]).unwrap();
        match cli.command {
            Command::Remove(cmd) => {
                assert_eq!(cmd.target, "Hello");
                assert_eq!(cmd.list.values.len(), 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_set() {
        let cli = Cli::try_parse_from(["llist", "set", "0", "9", "7", "8"]).unwrap();
        match cli.command {
            Command::Set(cmd) => {
                assert_eq!(cmd.index, Index::Position(0));
                assert_eq!(cmd.value, "9");
                assert_eq!(cmd.list.values, vec!["7", "8"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let cli =
            Cli::try_parse_from(["llist", "-c", "/custom/config.toml", "len", "1"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let cli = Cli::try_parse_from(["llist", "-vv", "demo"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["llist", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }
}
