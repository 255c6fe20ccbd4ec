//! # Calculator Data Shapes
//!
//! The four generic records shared by every calculator in the catalog:
//! [`Inputs`], [`Results`], [`Metrics`], and [`Analysis`]. Calculators are
//! stateless pure functions from an `Inputs` record to an [`Outcome`] bundle.
//!
//! The input shape is deliberately generic - four optional numeric fields -
//! and each calculator documents how it maps them onto its domain quantities
//! (e.g. for `loan-payment`: `amount` = principal, `rate` = annual rate,
//! `quantity` = term in years).
//!
//! ## Example
//!
//! ```rust
//! use hub_core::contracts::Inputs;
//!
//! let inputs = Inputs::new().with_amount(100_000.0).with_value(150_000.0);
//! assert_eq!(inputs.amount, Some(100_000.0));
//!
//! // All shapes are JSON-serializable
//! let json = serde_json::to_string(&inputs).unwrap();
//! assert_eq!(json, r#"{"value":150000.0,"amount":100000.0}"#);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{HubError, HubResult};

/// The four generic input fields every calculator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Value,
    Rate,
    Amount,
    Quantity,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [Field::Value, Field::Rate, Field::Amount, Field::Quantity];

    /// JSON/field name (lowercase)
    pub fn name(&self) -> &'static str {
        match self {
            Field::Value => "value",
            Field::Rate => "rate",
            Field::Amount => "amount",
            Field::Quantity => "quantity",
        }
    }

    /// Capitalized label for user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::Value => "Value",
            Field::Rate => "Rate",
            Field::Amount => "Amount",
            Field::Quantity => "Quantity",
        }
    }
}

/// Generic input record for a calculator run.
///
/// All fields are optional; a calculator's validation rules declare which
/// ones it actually needs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Inputs {
    /// Primary value (e.g. final value, unit price, height)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Rate as a fraction in 0..=1 (e.g. interest rate, commission rate)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    /// Monetary amount (e.g. principal, investment, fixed costs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Count or duration (e.g. years, units, hours)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl Inputs {
    /// Create an empty input record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Get a field by name
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Value => self.value,
            Field::Rate => self.rate,
            Field::Amount => self.amount,
            Field::Quantity => self.quantity,
        }
    }

    /// Get a required field, or fail with MissingField / InvalidInput.
    ///
    /// Compute functions use this so they stay safe when called directly,
    /// outside the engine's validation pass.
    pub fn require(&self, field: Field) -> HubResult<f64> {
        let raw = self
            .get(field)
            .ok_or_else(|| HubError::missing_field(field.name()))?;
        if !raw.is_finite() {
            return Err(HubError::invalid_input(
                field.name(),
                raw.to_string(),
                "must be a finite number",
            ));
        }
        Ok(raw)
    }
}

/// Qualitative risk classification attached to every calculator outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Display name for UI output
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Primary numeric result of a calculator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    /// The headline number (units documented per calculator)
    pub result: f64,

    /// Optional one-line interpretation of the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// Metrics record; mirrors the headline result for downstream consumers
/// that only track numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub result: f64,
}

/// Qualitative assessment of a calculator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Actionable recommendation text
    pub recommendation: String,

    /// Risk classification derived from domain thresholds
    pub risk_level: RiskLevel,
}

/// Everything a compute function produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub results: Results,
    pub metrics: Metrics,
    pub analysis: Analysis,
}

impl Outcome {
    /// Build a complete outcome from the headline result and its assessment.
    pub fn new(
        result: f64,
        analysis: impl Into<String>,
        recommendation: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        Outcome {
            results: Results {
                result,
                analysis: Some(analysis.into()),
            },
            metrics: Metrics { result },
            analysis: Analysis {
                recommendation: recommendation.into(),
                risk_level,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_builder() {
        let inputs = Inputs::new().with_amount(10.0).with_rate(0.05);
        assert_eq!(inputs.get(Field::Amount), Some(10.0));
        assert_eq!(inputs.get(Field::Rate), Some(0.05));
        assert_eq!(inputs.get(Field::Value), None);
    }

    #[test]
    fn test_require_missing() {
        let inputs = Inputs::new();
        let err = inputs.require(Field::Amount).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_require_non_finite() {
        let inputs = Inputs::new().with_value(f64::NAN);
        let err = inputs.require(Field::Value).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_inputs_serialization() {
        let inputs = Inputs::new().with_amount(100.0);
        let json = serde_json::to_string(&inputs).unwrap();
        assert_eq!(json, r#"{"amount":100.0}"#);

        let roundtrip: Inputs = serde_json::from_str(&json).unwrap();
        assert_eq!(inputs, roundtrip);
    }

    #[test]
    fn test_outcome_mirrors_result() {
        let outcome = Outcome::new(42.0, "answer", "ship it", RiskLevel::Low);
        assert_eq!(outcome.results.result, outcome.metrics.result);
        assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
    }
}
