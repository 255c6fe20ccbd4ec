//! # Field Validation
//!
//! Single-field validation for calculator inputs. Validation never errors
//! and never panics: it produces a list of [`ValidationResult`] records that
//! a front-end can surface directly as form feedback.
//!
//! Each calculator declares its checks as a static table of [`Rule`]s on its
//! descriptor; the engine runs [`check`] over that table before computing.
//!
//! ## Example
//!
//! ```rust
//! use hub_core::validation::validate_amount;
//!
//! let bad = validate_amount(-5.0);
//! assert!(!bad.is_valid);
//! assert_eq!(bad.message, "Amount must be greater than 0");
//!
//! let ok = validate_amount(10.0);
//! assert!(ok.is_valid);
//! assert_eq!(ok.message, "Valid amount");
//! ```

use serde::{Deserialize, Serialize};

use crate::contracts::{Field, Inputs};

/// Pass/fail outcome of a single field check, with a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// The input field the message refers to
    pub field: String,
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// Create a passing result
    pub fn valid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationResult {
            field: field.into(),
            is_valid: true,
            message: message.into(),
        }
    }

    /// Create a failing result
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationResult {
            field: field.into(),
            is_valid: false,
            message: message.into(),
        }
    }
}

/// A declarative per-field check.
///
/// Every rule implies the field is required; `Required` is for fields that
/// need presence and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field must be present and a finite number
    Required(Field),
    /// Field must be present and >= 0 (monetary amounts)
    NonNegative(Field),
    /// Field must be present and within 0..=1 (rates as fractions)
    Fraction(Field),
    /// Field must be present and > 0 (counts, durations)
    Positive(Field),
}

impl Rule {
    /// The field this rule applies to
    pub fn field(&self) -> Field {
        match self {
            Rule::Required(f) | Rule::NonNegative(f) | Rule::Fraction(f) | Rule::Positive(f) => *f,
        }
    }

    /// Apply the rule to an input record.
    pub fn apply(&self, inputs: &Inputs) -> ValidationResult {
        let field = self.field();
        let raw = match inputs.get(field) {
            Some(raw) => raw,
            None => {
                return ValidationResult::invalid(
                    field.name(),
                    format!("{} is required", field.label()),
                )
            }
        };

        match self {
            Rule::Required(_) => validate_number(field, raw),
            Rule::NonNegative(_) => validate_non_negative(field, raw),
            Rule::Fraction(_) => validate_fraction(field, raw),
            Rule::Positive(_) => validate_positive(field, raw),
        }
    }
}

/// Run a rule table against an input record, returning only the failures.
///
/// An empty result means the inputs pass.
pub fn check(rules: &[Rule], inputs: &Inputs) -> Vec<ValidationResult> {
    rules
        .iter()
        .map(|rule| rule.apply(inputs))
        .filter(|result| !result.is_valid)
        .collect()
}

fn validate_number(field: Field, raw: f64) -> ValidationResult {
    if !raw.is_finite() {
        return ValidationResult::invalid(
            field.name(),
            format!("{} must be a number", field.label()),
        );
    }
    ValidationResult::valid(field.name(), format!("Valid {}", field.name()))
}

fn validate_non_negative(field: Field, raw: f64) -> ValidationResult {
    if !raw.is_finite() {
        return ValidationResult::invalid(
            field.name(),
            format!("{} must be a number", field.label()),
        );
    }
    if raw < 0.0 {
        return ValidationResult::invalid(
            field.name(),
            format!("{} must be greater than 0", field.label()),
        );
    }
    ValidationResult::valid(field.name(), format!("Valid {}", field.name()))
}

fn validate_fraction(field: Field, raw: f64) -> ValidationResult {
    if !raw.is_finite() {
        return ValidationResult::invalid(
            field.name(),
            format!("{} must be a number", field.label()),
        );
    }
    if !(0.0..=1.0).contains(&raw) {
        return ValidationResult::invalid(
            field.name(),
            format!("{} must be between 0 and 1", field.label()),
        );
    }
    ValidationResult::valid(field.name(), format!("Valid {}", field.name()))
}

fn validate_positive(field: Field, raw: f64) -> ValidationResult {
    if !raw.is_finite() {
        return ValidationResult::invalid(
            field.name(),
            format!("{} must be a number", field.label()),
        );
    }
    if raw <= 0.0 {
        return ValidationResult::invalid(
            field.name(),
            format!("{} must be positive", field.label()),
        );
    }
    ValidationResult::valid(field.name(), format!("Valid {}", field.name()))
}

/// Validate a monetary amount: must be a finite, non-negative number.
pub fn validate_amount(amount: f64) -> ValidationResult {
    validate_non_negative(Field::Amount, amount)
}

/// Validate a rate expressed as a fraction: must be within 0..=1.
pub fn validate_rate(rate: f64) -> ValidationResult {
    validate_fraction(Field::Rate, rate)
}

/// Validate a generic value: must be a finite number.
pub fn validate_value(value: f64) -> ValidationResult {
    validate_number(Field::Value, value)
}

/// Validate a count or duration: must be strictly positive.
pub fn validate_quantity(quantity: f64) -> ValidationResult {
    validate_positive(Field::Quantity, quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_amount_rejected() {
        let result = validate_amount(-5.0);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Amount must be greater than 0");
    }

    #[test]
    fn test_valid_amount() {
        let result = validate_amount(10.0);
        assert!(result.is_valid);
        assert_eq!(result.message, "Valid amount");
    }

    #[test]
    fn test_rate_range() {
        assert!(validate_rate(0.0).is_valid);
        assert!(validate_rate(0.5).is_valid);
        assert!(validate_rate(1.0).is_valid);
        assert!(!validate_rate(1.5).is_valid);
        assert!(!validate_rate(-0.1).is_valid);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(!validate_value(f64::NAN).is_valid);
        assert!(!validate_amount(f64::INFINITY).is_valid);
        assert_eq!(validate_rate(f64::NAN).message, "Rate must be a number");
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert!(!validate_quantity(0.0).is_valid);
        assert!(!validate_quantity(-1.0).is_valid);
        assert!(validate_quantity(12.0).is_valid);
    }

    #[test]
    fn test_check_reports_missing_fields() {
        let rules = [
            Rule::NonNegative(Field::Amount),
            Rule::Fraction(Field::Rate),
        ];
        let failures = check(&rules, &Inputs::new().with_rate(0.05));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "amount");
        assert_eq!(failures[0].message, "Amount is required");
    }

    #[test]
    fn test_check_passes_clean_inputs() {
        let rules = [
            Rule::NonNegative(Field::Amount),
            Rule::Fraction(Field::Rate),
            Rule::Positive(Field::Quantity),
        ];
        let inputs = Inputs::new()
            .with_amount(1000.0)
            .with_rate(0.06)
            .with_quantity(10.0);
        assert!(check(&rules, &inputs).is_empty());
    }

    #[test]
    fn test_validation_result_serialization() {
        let result = validate_amount(-5.0);
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
