//! Configuration loading and schema definitions
//!
//! Shared configuration types used across the kiosk applications.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
