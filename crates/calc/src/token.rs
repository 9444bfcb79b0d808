//! Input tokens for the calculator engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `x`
    Multiply,
    /// `÷`
    Divide,
}

impl Operator {
    /// Apply the operator to two operands.
    ///
    /// Division by zero is defined to yield 0, not an error. The policy is
    /// intentional and pinned by a regression test; see DESIGN.md.
    /// Overflow wraps in two's complement.
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Subtract => a.wrapping_sub(b),
            Self::Multiply => a.wrapping_mul(b),
            Self::Divide => {
                if b == 0 {
                    0
                } else {
                    a.wrapping_div(b)
                }
            }
        }
    }

    /// The keypad symbol for this operator
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A recognized keypad token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A digit key, `0`–`9`
    Digit(u8),
    /// An operator key
    Operator(Operator),
    /// The `=` key
    Equals,
    /// The `C` key
    Clear,
}

impl Token {
    /// Parse a single keypad token.
    ///
    /// Accepts ASCII spellings alongside the keypad symbols (`*` for `x`,
    /// `/` for `÷`, `−` for `-`). Returns `None` for anything else —
    /// unrecognized keys, including `.`, are ignored by the engine.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
                Some(Self::Digit(input.as_bytes()[0] - b'0'))
            }
            "+" => Some(Self::Operator(Operator::Add)),
            "-" | "−" => Some(Self::Operator(Operator::Subtract)),
            "x" | "X" | "*" | "×" => Some(Self::Operator(Operator::Multiply)),
            "÷" | "/" => Some(Self::Operator(Operator::Divide)),
            "=" => Some(Self::Equals),
            "C" | "c" => Some(Self::Clear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        assert_eq!(Token::parse("0"), Some(Token::Digit(0)));
        assert_eq!(Token::parse("9"), Some(Token::Digit(9)));
    }

    #[test]
    fn test_parse_operators() {
        assert_eq!(Token::parse("+"), Some(Token::Operator(Operator::Add)));
        assert_eq!(Token::parse("x"), Some(Token::Operator(Operator::Multiply)));
        assert_eq!(Token::parse("*"), Some(Token::Operator(Operator::Multiply)));
        assert_eq!(Token::parse("÷"), Some(Token::Operator(Operator::Divide)));
        assert_eq!(Token::parse("/"), Some(Token::Operator(Operator::Divide)));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        assert_eq!(Token::parse("."), None);
        assert_eq!(Token::parse("%"), None);
        assert_eq!(Token::parse("12"), None);
        assert_eq!(Token::parse(""), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(7, 3), 10);
        assert_eq!(Operator::Subtract.apply(7, 3), 4);
        assert_eq!(Operator::Multiply.apply(7, 3), 21);
        assert_eq!(Operator::Divide.apply(7, 3), 2);
    }

    #[test]
    fn test_divide_by_zero_yields_zero() {
        assert_eq!(Operator::Divide.apply(5, 0), 0);
        assert_eq!(Operator::Divide.apply(0, 0), 0);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(Operator::Divide.apply(-7, 2), -3);
    }
}
