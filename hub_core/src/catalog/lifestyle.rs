//! Lifestyle calculators.

use crate::contracts::{Field, Inputs, Outcome, RiskLevel};
use crate::errors::HubResult;
use crate::registry::{Category, Descriptor};
use crate::validation::Rule;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![Descriptor {
        id: "tip",
        title: "Tip Calculator",
        description: "Tip on a bill. amount = bill total, rate = tip rate",
        category: Category::Lifestyle,
        compute: tip,
        rules: &[Rule::NonNegative(Field::Amount), Rule::Fraction(Field::Rate)],
    }]
}

/// Tip amount on a bill.
///
/// Mapping: `amount` = bill total, `rate` = tip rate as a fraction.
pub fn tip(inputs: &Inputs) -> HubResult<Outcome> {
    let bill = inputs.require(Field::Amount)?;
    let rate = inputs.require(Field::Rate)?;

    let tip_amount = bill * rate;
    let total = bill + tip_amount;

    Ok(Outcome::new(
        tip_amount,
        format!("Tip {tip_amount:.2}, total {total:.2}"),
        "US sit-down service customarily runs 15-20%",
        RiskLevel::Low,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip() {
        let inputs = Inputs::new().with_amount(80.0).with_rate(0.20);
        let outcome = tip(&inputs).unwrap();
        assert!((outcome.results.result - 16.0).abs() < 1e-9);
    }
}
