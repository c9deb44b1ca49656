//! `linkedlist` - A singly-linked list of heterogeneous values
//!
//! This library provides a [`LinkedList`] container supporting append,
//! removal by value, indexed and sliced access, indexed assignment, length
//! queries and conversion to a `Vec`, along with the configuration and
//! logging used by the `llist` command-line tool.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod list;
pub mod logging;
pub mod node;
pub mod value;

pub use config::{Config, DisplayConfig};
pub use error::{Error, Result};
pub use index::{Index, Slice};
pub use list::LinkedList;
pub use logging::init_logging;
pub use node::Node;
pub use value::Value;
