//! Command-line interface module.

mod args;
pub mod collections;
pub mod common;
pub mod query;
pub mod theme;
pub mod validate;

pub use args::{Cli, Commands, ValidateArgs};
