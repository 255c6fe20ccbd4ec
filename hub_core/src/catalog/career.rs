//! Career calculators.

use crate::contracts::{Field, Inputs, Outcome, RiskLevel};
use crate::errors::HubResult;
use crate::registry::{Category, Descriptor};
use crate::validation::Rule;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![Descriptor {
        id: "hourly-to-salary",
        title: "Hourly to Salary",
        description: "Annualized gross salary. value = hourly rate, \
                      quantity = hours per week",
        category: Category::Career,
        compute: hourly_to_salary,
        rules: &[
            Rule::Positive(Field::Value),
            Rule::Positive(Field::Quantity),
        ],
    }]
}

/// Annual gross salary from an hourly rate, assuming 52 paid weeks.
///
/// Mapping: `value` = hourly rate, `quantity` = hours per week.
pub fn hourly_to_salary(inputs: &Inputs) -> HubResult<Outcome> {
    let hourly_rate = inputs.require(Field::Value)?;
    let hours_per_week = inputs.require(Field::Quantity)?;

    let annual = hourly_rate * hours_per_week * 52.0;

    let risk_level = if hours_per_week > 50.0 {
        RiskLevel::High
    } else if hours_per_week > 40.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let recommendation = match risk_level {
        RiskLevel::High => "Sustained 50+ hour weeks inflate the annualized figure; budget on 40",
        RiskLevel::Medium => "Includes regular overtime; confirm it is contractual",
        RiskLevel::Low => "Standard full-time schedule",
    };

    Ok(Outcome::new(
        annual,
        format!("Annualized gross salary of {annual:.2}"),
        recommendation,
        risk_level,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_to_salary() {
        let inputs = Inputs::new().with_value(30.0).with_quantity(40.0);
        let outcome = hourly_to_salary(&inputs).unwrap();
        assert!((outcome.results.result - 62_400.0).abs() < 1e-9);
        assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_overtime_flagged() {
        let inputs = Inputs::new().with_value(30.0).with_quantity(55.0);
        let outcome = hourly_to_salary(&inputs).unwrap();
        assert_eq!(outcome.analysis.risk_level, RiskLevel::High);
    }
}
