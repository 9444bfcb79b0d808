//! Form definitions and per-line validation

use kiosk_core::validation::{ValidationResult, Validator};
use serde::{Deserialize, Serialize};

/// A whole form: a title and its lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Title shown above the prompts
    #[serde(default)]
    pub title: Option<String>,
    /// The form lines, prompted in order
    #[serde(rename = "line")]
    pub lines: Vec<FormLine>,
}

impl FormDefinition {
    /// Parse a form definition from TOML text
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let form: Self = toml::from_str(text)?;
        if form.lines.is_empty() {
            anyhow::bail!("form definition has no lines");
        }
        Ok(form)
    }

    /// The built-in form used when no definition file is given
    pub fn default_form() -> Self {
        Self {
            title: Some("Sign-up".to_string()),
            lines: vec![
                FormLine {
                    name: "Username".to_string(),
                    kind: FieldKind::Text,
                    hint: "Enter your username".to_string(),
                    min: None,
                    max: None,
                },
                FormLine {
                    name: "Email".to_string(),
                    kind: FieldKind::Email,
                    hint: "Enter your email".to_string(),
                    min: None,
                    max: None,
                },
                FormLine {
                    name: "Age".to_string(),
                    kind: FieldKind::Number,
                    hint: "Enter your age".to_string(),
                    min: Some(0),
                    max: Some(130),
                },
            ],
        }
    }
}

/// One form line: a field name, its kind, and the hint shown while empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormLine {
    /// Field name
    pub name: String,
    /// Field kind, drives validation
    pub kind: FieldKind,
    /// Placeholder hint
    pub hint: String,
    /// Lower bound for number fields
    #[serde(default)]
    pub min: Option<i64>,
    /// Upper bound for number fields
    #[serde(default)]
    pub max: Option<i64>,
}

impl FormLine {
    /// Validate a value entered for this line
    pub fn validate(&self, value: &str) -> ValidationResult {
        let validator = Validator::new().required(&self.name, value);

        match self.kind {
            FieldKind::Text => validator.max_length(&self.name, value, 200).validate(),
            FieldKind::Email => validator.email(&self.name, value).validate(),
            FieldKind::Number => {
                let mut result = validator.integer(&self.name, value).validate();
                if result.is_valid() {
                    if let (Ok(n), Some(min), Some(max)) =
                        (value.trim().parse::<i64>(), self.min, self.max)
                    {
                        result.merge(Validator::new().range(&self.name, n, min, max).validate());
                    }
                }
                result
            }
        }
    }
}

/// The field kinds a form line can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text
    Text,
    /// Whole number, optionally bounded
    Number,
    /// Email address
    Email,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_shape() {
        let form = FormDefinition::default_form();
        assert_eq!(form.lines.len(), 3);
        assert_eq!(form.lines[0].name, "Username");
        assert_eq!(form.lines[2].kind, FieldKind::Number);
    }

    #[test]
    fn test_parse_toml_definition() {
        let form = FormDefinition::from_toml(
            r#"
            title = "Contact"

            [[line]]
            name = "Name"
            kind = "text"
            hint = "Your name"

            [[line]]
            name = "Email"
            kind = "email"
            hint = "Your email"
            "#,
        )
        .unwrap();

        assert_eq!(form.title.as_deref(), Some("Contact"));
        assert_eq!(form.lines.len(), 2);
        assert_eq!(form.lines[1].kind, FieldKind::Email);
    }

    #[test]
    fn test_empty_definition_rejected() {
        assert!(FormDefinition::from_toml("title = \"Empty\"").is_err());
    }

    #[test]
    fn test_text_line_requires_value() {
        let line = &FormDefinition::default_form().lines[0];
        assert!(!line.validate("").is_valid());
        assert!(line.validate("ana").is_valid());
    }

    #[test]
    fn test_email_line_validates_format() {
        let line = &FormDefinition::default_form().lines[1];
        assert!(!line.validate("not-an-email").is_valid());
        assert!(line.validate("ana@example.com").is_valid());
    }

    #[test]
    fn test_number_line_validates_range() {
        let line = &FormDefinition::default_form().lines[2];
        assert!(!line.validate("abc").is_valid());
        assert!(!line.validate("200").is_valid());
        assert!(line.validate("23").is_valid());
    }
}
