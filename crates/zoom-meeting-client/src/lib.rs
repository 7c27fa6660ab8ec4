//! CLI, credentials loading, link actions
//!
//! This crate provides the `zoom-meeting` command-line interface.

pub mod actions;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
