//! Terminal host for the listing wizard.

pub mod commands;
pub mod output;
pub mod prompts;
pub mod render;
mod shell;

pub use shell::{run_cli, CliMode};
