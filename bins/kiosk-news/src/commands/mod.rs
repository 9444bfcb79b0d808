//! Subcommand implementations

pub mod health;
pub mod read;
pub mod sections;
pub mod top;
