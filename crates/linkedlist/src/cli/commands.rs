//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use clap::{Args, Subcommand};

use crate::index::Index;
use crate::list::LinkedList;
use crate::value::Value;

/// The values a command builds its list from.
#[derive(Debug, Args)]
pub struct ValuesArgs {
    /// List elements, each read as JSON or else as a bare string
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub values: Vec<String>,
}

impl ValuesArgs {
    /// Build a list by appending every value in order.
    #[must_use]
    pub fn to_list(&self) -> LinkedList {
        let mut list = LinkedList::new();
        list.append(self.values.iter().map(|arg| Value::from_arg(arg)));
        list
    }
}

/// Get command arguments.
#[derive(Debug, Args)]
pub struct GetCommand {
    /// Number of steps from the head
    #[arg(allow_negative_numbers = true)]
    pub index: isize,

    /// The list to operate on
    #[command(flatten)]
    pub list: ValuesArgs,
}

/// Slice command arguments.
#[derive(Debug, Args)]
pub struct SliceCommand {
    /// A position (`2`, `-1`) or a slice (`1:3`, `::-1`)
    #[arg(allow_hyphen_values = true)]
    pub index: Index,

    /// The list to operate on
    #[command(flatten)]
    pub list: ValuesArgs,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// The value to remove (first occurrence only)
    #[arg(allow_hyphen_values = true)]
    pub target: String,

    /// The list to operate on
    #[command(flatten)]
    pub list: ValuesArgs,
}

/// Set command arguments.
#[derive(Debug, Args)]
pub struct SetCommand {
    /// Position to overwrite
    #[arg(allow_hyphen_values = true)]
    pub index: Index,

    /// The new value
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// The list to operate on
    #[command(flatten)]
    pub list: ValuesArgs,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(args: &[&str]) -> ValuesArgs {
        ValuesArgs {
            values: args.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_to_list_parses_each_value() {
        let list = values(&["7", "Hello", "[1, 2, 3]"]).to_list();
        assert_eq!(list.to_string(), "7 -> Hello -> [1, 2, 3] -> None");
        assert_eq!(list.get(0), Some(&Value::Int(7)));
    }

    #[test]
    fn test_to_list_empty() {
        assert!(values(&[]).to_list().is_empty());
    }

    #[test]
    fn test_slice_command_debug() {
        let cmd = SliceCommand {
            index: Index::Position(1),
            list: values(&["a"]),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Position"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
