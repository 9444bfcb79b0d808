//! Shared foundation for the kiosk terminal applications
//!
//! This crate provides the functionality every kiosk app relies on:
//!
//! - **Error handling**: coded errors with context and recovery suggestions
//! - **Validation**: fluent validation for user input and form fields
//! - **Configuration**: TOML-based configuration with standard search paths
//!
//! # Example
//!
//! ```rust
//! use kiosk_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("email", "ana@example.com")
//!     .email("email", "ana@example.com")
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{ValidationResult, Validator};
}
