//! Deterministic, pure logic shared by the sorter.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod collation;
pub mod sort_state;
pub mod sorter;
pub mod types;
pub mod view;
