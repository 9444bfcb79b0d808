//! Input validation for forms and checkout flows
//!
//! Provides a fluent validator for user-entered values: required fields,
//! lengths, patterns, allowed values, numeric ranges, and the digit-count
//! checks used by payment methods.
//!
//! # Example
//!
//! ```rust
//! use kiosk_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("name", "Ana")
//!     .exact_digits("phone", "912345678", 9)
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

use crate::error::{Error, ErrorCode, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").expect("valid email pattern"));

static POSTAL_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{3}$").expect("valid postal code pattern"));

/// A single validation failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of a validation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(Error::new(
                ErrorCode::ValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    /// Validate that a field is not empty
    #[must_use]
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Field is required".to_string(),
                code: "REQUIRED".to_string(),
                expected: Some("non-empty value".to_string()),
                actual: Some("empty".to_string()),
            });
        }
        self
    }

    /// Validate minimum length
    #[must_use]
    pub fn min_length(mut self, field: &str, value: &str, min: usize) -> Self {
        if value.len() < min {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be at least {} characters", min),
                code: "MIN_LENGTH".to_string(),
                expected: Some(format!(">= {} chars", min)),
                actual: Some(format!("{} chars", value.len())),
            });
        }
        self
    }

    /// Validate maximum length
    #[must_use]
    pub fn max_length(mut self, field: &str, value: &str, max: usize) -> Self {
        if value.len() > max {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be at most {} characters", max),
                code: "MAX_LENGTH".to_string(),
                expected: Some(format!("<= {} chars", max)),
                actual: Some(format!("{} chars", value.len())),
            });
        }
        self
    }

    /// Validate against a regex pattern
    #[must_use]
    pub fn pattern(mut self, field: &str, value: &str, pattern: &Regex, description: &str) -> Self {
        if !pattern.is_match(value) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must match {}", description),
                code: "PATTERN".to_string(),
                expected: Some(description.to_string()),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate an email address
    #[must_use]
    pub fn email(self, field: &str, value: &str) -> Self {
        self.pattern(field, value, &EMAIL_RE, "email format")
    }

    /// Validate a postal code (`NNNN-NNN`)
    #[must_use]
    pub fn postal_code(self, field: &str, value: &str) -> Self {
        self.pattern(field, value, &POSTAL_CODE_RE, "postal code format (0000-000)")
    }

    /// Validate that a value is exactly `count` decimal digits
    ///
    /// Used for card numbers, CVVs, and phone numbers.
    #[must_use]
    pub fn exact_digits(mut self, field: &str, value: &str, count: usize) -> Self {
        let all_digits = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
        if !all_digits || value.len() != count {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be exactly {} digits", count),
                code: "EXACT_DIGITS".to_string(),
                expected: Some(format!("{} digits", count)),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate that a value is in a list of allowed values
    #[must_use]
    pub fn one_of(mut self, field: &str, value: &str, allowed: &[&str]) -> Self {
        if !allowed.contains(&value) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be one of: {}", allowed.join(", ")),
                code: "ONE_OF".to_string(),
                expected: Some(allowed.join(", ")),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate a numeric range
    #[must_use]
    pub fn range<T: PartialOrd + std::fmt::Display>(
        mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        if value < min || value > max {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be between {} and {}", min, max),
                code: "RANGE".to_string(),
                expected: Some(format!("{} - {}", min, max)),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate that a value parses as an integer
    #[must_use]
    pub fn integer(mut self, field: &str, value: &str) -> Self {
        if value.trim().parse::<i64>().is_err() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Must be a whole number".to_string(),
                code: "INTEGER".to_string(),
                expected: Some("integer".to_string()),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Add a custom validation
    #[must_use]
    pub fn custom<F>(mut self, field: &str, f: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        if let Some(message) = f() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message,
                code: "CUSTOM".to_string(),
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

/// Validate a credit card payment block: 16-digit number (dashes stripped)
/// and 3-digit CVV.
pub fn validate_card(number: &str, cvv: &str) -> ValidationResult {
    let digits = number.replace('-', "");
    Validator::new()
        .exact_digits("card_number", &digits, 16)
        .exact_digits("cvv", cvv, 3)
        .validate()
}

/// Validate an MB Way payment block: 9-digit phone number.
pub fn validate_mbway(phone: &str) -> ValidationResult {
    Validator::new().exact_digits("mbway_phone", phone, 9).validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validation() {
        let result = Validator::new().required("name", "").validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "REQUIRED");
    }

    #[test]
    fn test_min_length_validation() {
        let result = Validator::new().min_length("name", "ab", 3).validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "MIN_LENGTH");
    }

    #[test]
    fn test_email_validation() {
        let ok = Validator::new().email("email", "ana@example.com").validate();
        assert!(ok.is_valid());

        let bad = Validator::new().email("email", "not-an-email").validate();
        assert!(!bad.is_valid());
        assert_eq!(bad.errors()[0].code, "PATTERN");
    }

    #[test]
    fn test_postal_code_validation() {
        assert!(Validator::new().postal_code("postal", "4470-296").validate().is_valid());
        assert!(!Validator::new().postal_code("postal", "44702-96").validate().is_valid());
    }

    #[test]
    fn test_exact_digits() {
        assert!(Validator::new().exact_digits("cvv", "123", 3).validate().is_valid());
        assert!(!Validator::new().exact_digits("cvv", "12a", 3).validate().is_valid());
        assert!(!Validator::new().exact_digits("cvv", "1234", 3).validate().is_valid());
        assert!(!Validator::new().exact_digits("cvv", "", 3).validate().is_valid());
    }

    #[test]
    fn test_one_of_validation() {
        let result = Validator::new()
            .one_of("size", "EU 35", &["EU 36", "EU 37", "EU 38"])
            .validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "ONE_OF");
    }

    #[test]
    fn test_range_validation() {
        let result = Validator::new().range("age", 150, 0, 130).validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "RANGE");
    }

    #[test]
    fn test_integer_validation() {
        assert!(Validator::new().integer("age", "42").validate().is_valid());
        assert!(!Validator::new().integer("age", "forty-two").validate().is_valid());
    }

    #[test]
    fn test_card_validation() {
        assert!(validate_card("1234-5678-9012-3456", "123").is_valid());
        assert!(validate_card("1234567890123456", "123").is_valid());
        assert!(!validate_card("1234-5678", "123").is_valid());
        assert!(!validate_card("1234567890123456", "12").is_valid());
    }

    #[test]
    fn test_mbway_validation() {
        assert!(validate_mbway("912345678").is_valid());
        assert!(!validate_mbway("91234567").is_valid());
    }

    #[test]
    fn test_chained_validation() {
        let result = Validator::new()
            .required("name", "Ana")
            .min_length("name", "Ana", 2)
            .max_length("name", "Ana", 50)
            .validate();
        assert!(result.is_valid());
    }

    #[test]
    fn test_to_result() {
        let err = Validator::new().required("name", "").validate().to_result();
        assert!(err.is_err());
    }
}
