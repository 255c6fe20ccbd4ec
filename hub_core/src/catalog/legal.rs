//! Legal calculators.

use crate::contracts::{Field, Inputs, Outcome, RiskLevel};
use crate::errors::{HubError, HubResult};
use crate::registry::{Category, Descriptor};
use crate::validation::Rule;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![Descriptor {
        id: "personal-injury-settlement",
        title: "Personal Injury Settlement",
        description: "Settlement estimate via the multiplier method. \
                      amount = special damages, quantity = pain multiplier (1-5)",
        category: Category::Legal,
        compute: personal_injury_settlement,
        rules: &[
            Rule::NonNegative(Field::Amount),
            Rule::Positive(Field::Quantity),
        ],
    }]
}

/// Settlement estimate using the insurance-industry multiplier method.
///
/// `settlement = special damages * multiplier`, with the multiplier
/// conventionally between 1 and 5 depending on injury severity.
///
/// Mapping: `amount` = special (economic) damages, `quantity` = multiplier.
pub fn personal_injury_settlement(inputs: &Inputs) -> HubResult<Outcome> {
    let special_damages = inputs.require(Field::Amount)?;
    let multiplier = inputs.require(Field::Quantity)?;

    if !(1.0..=5.0).contains(&multiplier) {
        return Err(HubError::invalid_input(
            "quantity",
            multiplier.to_string(),
            "pain multiplier must be between 1 and 5",
        ));
    }

    let settlement = special_damages * multiplier;

    let risk_level = if multiplier >= 4.0 {
        RiskLevel::High
    } else if multiplier >= 2.5 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let recommendation = match risk_level {
        RiskLevel::High => "A multiplier this high needs strong documentation of severe injury",
        RiskLevel::Medium => "Typical range for moderate injury; gather medical records",
        RiskLevel::Low => "Conservative estimate suitable for an opening demand",
    };

    Ok(Outcome::new(
        settlement,
        format!("Estimated settlement of {settlement:.2} ({multiplier:.1}x multiplier)"),
        recommendation,
        risk_level,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settlement_estimate() {
        let inputs = Inputs::new().with_amount(20_000.0).with_quantity(3.0);
        let outcome = personal_injury_settlement(&inputs).unwrap();
        assert!((outcome.results.result - 60_000.0).abs() < 1e-9);
        assert_eq!(outcome.analysis.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_multiplier_out_of_range() {
        let inputs = Inputs::new().with_amount(20_000.0).with_quantity(8.0);
        assert!(personal_injury_settlement(&inputs).is_err());
    }
}
