//! Four-operator integer calculator engine
//!
//! A pure, synchronous state machine: one keystroke in, one updated state
//! out. The presentation layer owns a [`Calculator`] and feeds it tokens;
//! after every press it re-renders [`Calculator::display`].
//!
//! The engine has no failure channel. Unparsable display values coerce to
//! zero and division by zero is defined to yield zero.
//!
//! # Example
//!
//! ```rust
//! use kiosk_calc::{Calculator, Token};
//!
//! let mut calc = Calculator::new();
//! for key in ["7", "+", "3", "="] {
//!     if let Some(token) = Token::parse(key) {
//!         calc.press(token);
//!     }
//! }
//! assert_eq!(calc.display(), "10");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod token;

pub use engine::{Calculator, CalculatorState};
pub use token::{Operator, Token};
