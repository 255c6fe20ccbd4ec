//! Construction calculators.

use crate::contracts::{Field, Inputs, Outcome, RiskLevel};
use crate::errors::HubResult;
use crate::registry::{Category, Descriptor};
use crate::validation::Rule;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![Descriptor {
        id: "concrete-slab-volume",
        title: "Concrete Slab Volume",
        description: "Slab volume in cubic meters. value = length in m, \
                      amount = width in m, quantity = thickness in m",
        category: Category::Construction,
        compute: concrete_slab_volume,
        rules: &[
            Rule::Positive(Field::Value),
            Rule::Positive(Field::Amount),
            Rule::Positive(Field::Quantity),
        ],
    }]
}

/// Volume of a rectangular slab, with a 5% waste allowance in the analysis.
///
/// Mapping: `value` = length (m), `amount` = width (m),
/// `quantity` = thickness (m).
pub fn concrete_slab_volume(inputs: &Inputs) -> HubResult<Outcome> {
    let length_m = inputs.require(Field::Value)?;
    let width_m = inputs.require(Field::Amount)?;
    let thickness_m = inputs.require(Field::Quantity)?;

    let volume_m3 = length_m * width_m * thickness_m;
    let with_waste = volume_m3 * 1.05;

    // Thin slabs crack; structural slabs are typically 100mm or more
    let risk_level = if thickness_m < 0.075 {
        RiskLevel::High
    } else if thickness_m < 0.1 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let recommendation = match risk_level {
        RiskLevel::High => "Slab under 75mm is prone to cracking; increase thickness",
        RiskLevel::Medium => "Thickness is light for structural use; confirm the load case",
        RiskLevel::Low => "Order with a waste allowance and verify subgrade preparation",
    };

    Ok(Outcome::new(
        volume_m3,
        format!("Volume {volume_m3:.2} m3; order {with_waste:.2} m3 with 5% waste"),
        recommendation,
        risk_level,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slab_volume() {
        let inputs = Inputs::new()
            .with_value(6.0)
            .with_amount(4.0)
            .with_quantity(0.15);
        let outcome = concrete_slab_volume(&inputs).unwrap();
        assert!((outcome.results.result - 3.6).abs() < 1e-9);
        assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_thin_slab_flagged() {
        let inputs = Inputs::new()
            .with_value(6.0)
            .with_amount(4.0)
            .with_quantity(0.05);
        let outcome = concrete_slab_volume(&inputs).unwrap();
        assert_eq!(outcome.analysis.risk_level, RiskLevel::High);
    }
}
