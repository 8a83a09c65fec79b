//! Command line interface for sentir.
//!
//! The binary in `main.rs` only parses [`args::SentirArgs`], sets up
//! logging and hands over to [`commands::execute_command`].

pub mod args;
pub mod commands;
pub mod output;

pub use args::SentirArgs;
pub use commands::execute_command;
