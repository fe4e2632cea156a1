//! Songforge CLI library
//!
//! Exposes the command implementations so integration tests can drive the
//! same code paths as the `songforge` binary.

pub mod commands;
pub mod logging;
