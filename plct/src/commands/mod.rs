//! Command modules for the plct CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;

pub mod config;
pub mod lex;
pub mod repl;

// Re-export command types and functions
pub use config::{run_config, ConfigArgs};
pub use lex::{run_lex, LexArgs};
pub use repl::{run_repl, ReplArgs};
