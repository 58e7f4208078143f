//! # FitLayout CLI Library
//!
//! Thin command shell around `fitlayout-client`: session bootstrap,
//! command parsing and an interactive mode. All repository logic lives
//! in the client crate.

pub mod commands;
pub mod interactive;

pub use commands::{CommandExecutor, CommandResult, ShellCli, ShellCommand};
pub use interactive::start_interactive;
