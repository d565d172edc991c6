//! `OxiVec`: a growable contiguous array built on explicit raw storage
//!
//! `OxiVec` separates raw memory allocation from element construction and
//! keeps both layers visible. It provides:
//!
//! - **Explicit Storage** through [`RawStorage`], a fixed-capacity block of
//!   uninitialized slots with no liveness tracking
//! - **A Complete Vector** in [`Vector`], with doubling growth,
//!   exact-capacity reservation, positional insert/remove, and the full
//!   slice API through deref
//! - **Panic-Safe Mutation**: growth constructs the incoming element into
//!   the staged block before any live element moves, so a failed
//!   construction leaves the vector untouched
//! - **Memory Safety** with unsafe internals behind a safe public API and
//!   comprehensive safety documentation
//!
//! # Architecture
//!
//! `OxiVec` is built on a layered architecture:
//!
//! - **Storage Layer**: [`RawStorage`] owns one allocation and hands out raw
//!   slots
//! - **Container Layer**: [`Vector`] tracks which slots are live and
//!   implements growth, insertion, removal, and assignment on top
//!
//! # Example
//!
//! ```rust
//! use oxivec::Vector;
//!
//! let mut v: Vector<i32> = Vector::with_len(8);
//! v[0] = 41;
//! v[1] = 43;
//!
//! let inserted = *v.insert(1, 42);
//! assert_eq!(inserted, 42);
//! assert_eq!(v.len(), 9);
//! assert_eq!(v.capacity(), 16);
//! assert_eq!(&v[..3], [41, 42, 43]);
//! ```

pub mod error;
pub mod iter;
pub mod raw;
pub mod vector;

// Re-export commonly used types
pub use error::{Error, Result};
pub use iter::IntoIter;
pub use raw::RawStorage;
pub use vector::Vector;
