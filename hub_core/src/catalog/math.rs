//! Math calculators.

use crate::contracts::{Field, Inputs, Outcome, RiskLevel};
use crate::errors::HubResult;
use crate::registry::{Category, Descriptor};
use crate::validation::Rule;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![Descriptor {
        id: "percentage-of",
        title: "Percentage Of",
        description: "Fraction of a base value. value = base, rate = fraction",
        category: Category::Math,
        compute: percentage_of,
        rules: &[Rule::Required(Field::Value), Rule::Fraction(Field::Rate)],
    }]
}

/// The portion of a base value a fraction represents.
///
/// Mapping: `value` = base, `rate` = fraction in 0..=1.
pub fn percentage_of(inputs: &Inputs) -> HubResult<Outcome> {
    let base = inputs.require(Field::Value)?;
    let fraction = inputs.require(Field::Rate)?;

    let portion = base * fraction;

    Ok(Outcome::new(
        portion,
        format!("{pct:.1}% of {base:.2} is {portion:.2}", pct = fraction * 100.0),
        "Exact arithmetic; no interpretation needed",
        RiskLevel::Low,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_of() {
        let inputs = Inputs::new().with_value(250.0).with_rate(0.18);
        let outcome = percentage_of(&inputs).unwrap();
        assert!((outcome.results.result - 45.0).abs() < 1e-9);
    }
}
