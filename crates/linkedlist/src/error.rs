//! Error types for linkedlist.
//!
//! This module defines all error types used throughout the linkedlist crate,
//! covering both the container operations and the configuration layer.

use thiserror::Error;

/// The main error type for linkedlist operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Container Errors ===
    /// The operation needs at least one element and the list is empty.
    #[error("no values present in linked list")]
    EmptyContainer,

    /// `remove` scanned the whole chain without finding the value.
    #[error("'{value}' not present in linked list")]
    ValueNotFound {
        /// Rendering of the value that was searched for.
        value: String,
    },

    /// The index has a shape the operation does not accept.
    #[error("invalid index type `{index}`: expected {expected}")]
    InvalidIndexType {
        /// Rendering of the rejected index.
        index: String,
        /// Which index shapes the operation accepts.
        expected: &'static str,
    },

    /// An integer index falls outside the chain.
    #[error("index {index} out of range for linked list of length {len}")]
    IndexOutOfRange {
        /// The index as given by the caller.
        index: isize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// A slice was given a step of zero.
    #[error("slice step cannot be zero")]
    ZeroSliceStep,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Writing a rendering failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for linkedlist operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a value-not-found error from anything displayable.
    #[must_use]
    pub fn value_not_found(value: impl std::fmt::Display) -> Self {
        Self::ValueNotFound {
            value: value.to_string(),
        }
    }

    /// Create an invalid-index-type error.
    #[must_use]
    pub fn invalid_index_type(index: impl std::fmt::Display, expected: &'static str) -> Self {
        Self::InvalidIndexType {
            index: index.to_string(),
            expected,
        }
    }

    /// Create an index-out-of-range error.
    #[must_use]
    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if this error was caused by an empty list.
    #[must_use]
    pub fn is_empty_container(&self) -> bool {
        matches!(self, Self::EmptyContainer)
    }

    /// Check if this error is about a bad index (shape, range or step).
    #[must_use]
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidIndexType { .. } | Self::IndexOutOfRange { .. } | Self::ZeroSliceStep
        )
    }
}
