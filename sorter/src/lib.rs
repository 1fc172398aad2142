//! Click-to-sort table core.
//!
//! A table session holds a small record set and reorders it whenever a column
//! is selected: a new column sorts ascending, the same column again flips the
//! direction. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (sort state, collation, stable
//!   sorting, view projection). No I/O, fully testable in isolation.
//! - **[`io`]**: Config, record files, and scaffolding on disk.
//!
//! [`session`] owns the mutable state; [`render`] turns a view into text or JSON.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod record;
pub mod render;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
