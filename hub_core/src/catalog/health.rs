//! Health calculators.

use crate::contracts::{Field, Inputs, Outcome, RiskLevel};
use crate::errors::{HubError, HubResult};
use crate::registry::{Category, Descriptor};
use crate::validation::Rule;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![Descriptor {
        id: "bmi",
        title: "Body Mass Index",
        description: "BMI from metric units. amount = weight in kg, \
                      value = height in meters",
        category: Category::Health,
        compute: bmi,
        rules: &[
            Rule::NonNegative(Field::Amount),
            Rule::Positive(Field::Value),
        ],
    }]
}

/// Body mass index with WHO classification bands.
///
/// `BMI = weight / height^2`
///
/// Mapping: `amount` = weight in kilograms, `value` = height in meters.
pub fn bmi(inputs: &Inputs) -> HubResult<Outcome> {
    let weight_kg = inputs.require(Field::Amount)?;
    let height_m = inputs.require(Field::Value)?;

    // Plausibility bounds catch unit mix-ups (cm instead of m)
    if !(0.5..=2.8).contains(&height_m) {
        return Err(HubError::invalid_input(
            "value",
            height_m.to_string(),
            "height must be in meters (0.5 to 2.8)",
        ));
    }

    let bmi = weight_kg / (height_m * height_m);

    let (band, risk_level) = if bmi < 16.0 {
        ("severely underweight", RiskLevel::High)
    } else if bmi < 18.5 {
        ("underweight", RiskLevel::Medium)
    } else if bmi < 25.0 {
        ("normal weight", RiskLevel::Low)
    } else if bmi < 30.0 {
        ("overweight", RiskLevel::Medium)
    } else {
        ("obese", RiskLevel::High)
    };
    let recommendation = match risk_level {
        RiskLevel::Low => "Within the healthy range; maintain current habits",
        RiskLevel::Medium => "Outside the healthy range; gradual changes to diet and activity help",
        RiskLevel::High => "Well outside the healthy range; discuss with a healthcare provider",
    };

    Ok(Outcome::new(
        bmi,
        format!("BMI of {bmi:.1} ({band})"),
        recommendation,
        risk_level,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_normal() {
        let inputs = Inputs::new().with_amount(70.0).with_value(1.75);
        let outcome = bmi(&inputs).unwrap();
        assert!((outcome.results.result - 22.857).abs() < 0.001);
        assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_bmi_obese_band() {
        let inputs = Inputs::new().with_amount(110.0).with_value(1.70);
        let outcome = bmi(&inputs).unwrap();
        assert_eq!(outcome.analysis.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_bmi_rejects_centimeter_height() {
        let inputs = Inputs::new().with_amount(70.0).with_value(175.0);
        assert!(bmi(&inputs).is_err());
    }
}
