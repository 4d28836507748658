//! # reponote-cli
//!
//! Command definitions and output formatting for the `reponote` binary.

pub mod commands;
pub mod output;

pub use commands::Cli;
