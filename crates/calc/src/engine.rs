//! The calculator state machine
//!
//! Four state elements: the display string, the pending left-hand operand,
//! the pending operator, and the replace-next-digit flag. Pending operand
//! and pending operator are always both present or both absent.

use crate::token::{Operator, Token};
use serde::Serialize;

/// Calculator state, reduced one token at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    display: String,
    operand: Option<i64>,
    operator: Option<Operator>,
    replace_next: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            operand: None,
            operator: None,
            replace_next: false,
        }
    }
}

impl Calculator {
    /// Create a calculator in its default state: display `"0"`, nothing
    /// pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// The value currently shown on the display
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether a binary operation is waiting for its right-hand operand
    pub fn has_pending_operation(&self) -> bool {
        self.operand.is_some()
    }

    /// Feed one token to the engine
    pub fn press(&mut self, token: Token) {
        match token {
            Token::Digit(d) => self.press_digit(d),
            Token::Operator(op) => self.press_operator(op),
            Token::Equals => self.press_equals(),
            Token::Clear => *self = Self::default(),
        }
    }

    /// Parse and feed one keypad input.
    ///
    /// Unrecognized input is ignored with no state change; returns whether
    /// the input was recognized.
    pub fn press_key(&mut self, input: &str) -> bool {
        match Token::parse(input) {
            Some(token) => {
                self.press(token);
                true
            }
            None => false,
        }
    }

    fn press_digit(&mut self, digit: u8) {
        if self.replace_next {
            self.display = digit.to_string();
            self.replace_next = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push((b'0' + digit) as char);
        }
    }

    fn press_operator(&mut self, op: Operator) {
        match (self.operand, self.operator) {
            // A full operation is pending: evaluate it first so chained
            // expressions reduce left to right.
            (Some(a), Some(pending)) => {
                let result = pending.apply(a, self.parsed_display());
                self.operand = Some(result);
                self.display = result.to_string();
            }
            _ => {
                self.operand = Some(self.parsed_display());
            }
        }
        self.operator = Some(op);
        self.replace_next = true;
    }

    fn press_equals(&mut self) {
        // Flag is deliberately left as-is: digits typed after `=` extend
        // the result.
        if let (Some(a), Some(op)) = (self.operand, self.operator) {
            let result = op.apply(a, self.parsed_display());
            self.display = result.to_string();
            self.operand = None;
            self.operator = None;
        }
    }

    // Unparsable display values coerce to 0.
    fn parsed_display(&self) -> i64 {
        self.display.parse().unwrap_or(0)
    }

    /// Snapshot of the state tuple, for `--format json` output
    pub fn state(&self) -> CalculatorState {
        CalculatorState {
            display: self.display.clone(),
            operand: self.operand,
            operator: self.operator,
            replace_next: self.replace_next,
        }
    }
}

/// Serializable snapshot of the four state elements
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorState {
    /// The display value
    pub display: String,
    /// Pending left-hand operand, if any
    pub operand: Option<i64>,
    /// Pending operator, if any
    pub operator: Option<Operator>,
    /// Whether the next digit replaces the display
    pub replace_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn press_all(calc: &mut Calculator, keys: &[&str]) {
        for key in keys {
            calc.press_key(key);
        }
    }

    #[test]
    fn test_digits_concatenate() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2", "3"]);
        assert_eq!(calc.display(), "123");
    }

    #[test]
    fn test_leading_zero_suppressed() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["0", "0", "7"]);
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_simple_addition() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "+", "3", "="]);
        assert_eq!(calc.display(), "10");
    }

    #[test]
    fn test_chained_operators_evaluate_left_to_right() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "+", "3"]);
        calc.press_key("+");
        // Intermediate result shows as soon as the second operator lands.
        assert_eq!(calc.display(), "10");
        press_all(&mut calc, &["2", "="]);
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn test_division_by_zero_displays_zero() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "÷", "0", "="]);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "+", "3", "C"]);
        assert_eq!(calc.display(), "0");
        let state = calc.state();
        assert_eq!(state.operand, None);
        assert_eq!(state.operator, None);
        assert!(!state.replace_next);
    }

    #[test]
    fn test_operator_after_equals_seeds_from_result() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "+", "3", "=", "x", "2", "="]);
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_digit_after_equals_extends_result() {
        // The replace-next flag is untouched by `=`, so a digit typed
        // right after it appends to the result.
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "+", "3", "=", "2"]);
        assert_eq!(calc.display(), "102");
    }

    #[test]
    fn test_operator_replaces_display_on_next_digit() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "+", "3"]);
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn test_repeated_operator_presses() {
        // Second operator press with the flag still set evaluates with the
        // untouched display as the right-hand operand.
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "+"]);
        assert_eq!(calc.display(), "10");
    }

    #[test]
    fn test_equals_without_pending_operation_is_noop() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "2", "="]);
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_dead_keys_leave_state_unchanged() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["3", "."]);
        assert!(!calc.press_key("."));
        assert!(!calc.press_key("%"));
        assert_eq!(calc.display(), "3");
        assert_eq!(calc.state().operand, None);
    }

    #[test]
    fn test_subtraction_below_zero() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["3", "-", "8", "="]);
        assert_eq!(calc.display(), "-5");
    }

    #[test]
    fn test_operand_and_operator_move_together() {
        let mut calc = Calculator::new();

        let state = calc.state();
        assert_eq!(state.operand.is_some(), state.operator.is_some());

        for key in ["7", "+", "3", "=", "÷", "2", "=", "C"] {
            calc.press_key(key);
            let state = calc.state();
            assert_eq!(state.operand.is_some(), state.operator.is_some());
        }
    }

    proptest! {
        // Digit presses from a fresh state concatenate, with leading
        // zeros suppressed.
        #[test]
        fn prop_digit_entry_concatenates(digits in proptest::collection::vec(0u8..=9, 1..12)) {
            let mut calc = Calculator::new();
            for d in &digits {
                calc.press(Token::Digit(*d));
            }

            let expected: String = {
                let joined: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
                let trimmed = joined.trim_start_matches('0');
                if trimmed.is_empty() {
                    "0".to_string()
                } else {
                    trimmed.to_string()
                }
            };
            prop_assert_eq!(calc.display(), expected.as_str());
        }

        // The engine never panics on arbitrary key sequences and the
        // operand/operator invariant holds throughout.
        #[test]
        fn prop_invariant_holds_for_any_sequence(
            keys in proptest::collection::vec(
                proptest::sample::select(vec!["0", "5", "9", "+", "-", "x", "÷", "=", "C", "."]),
                0..40,
            )
        ) {
            let mut calc = Calculator::new();
            for key in keys {
                calc.press_key(key);
                let state = calc.state();
                prop_assert_eq!(state.operand.is_some(), state.operator.is_some());
            }
        }
    }
}
