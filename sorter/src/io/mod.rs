//! I/O helpers for sorter commands.

pub mod config;
pub mod init;
pub mod records;
