//! Error types for `OxiVec` storage operations.
//!
//! This module defines the errors surfaced by the fallible allocation paths:
//! capacity arithmetic overflow and raw allocation failure. Both are reported
//! before any element is touched, so a caller that observes an error also
//! observes an unchanged vector.

use std::fmt;

/// Errors that can occur while creating or growing raw storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested capacity exceeds the largest block a single allocation
    /// may span (`isize::MAX` bytes).
    CapacityOverflow {
        /// The requested capacity in elements.
        requested: usize,
    },

    /// The system allocator returned null for the requested block.
    AllocFailed {
        /// The size of the failed request in bytes.
        bytes: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityOverflow { requested } => {
                write!(
                    f,
                    "Capacity overflow: {requested} elements exceed the maximum allocation size"
                )
            }
            Error::AllocFailed { bytes } => {
                write!(f, "Failed to allocate storage block of {bytes} bytes")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for `OxiVec` storage operations.
pub type Result<T> = std::result::Result<T, Error>;
