//! Business calculators: unit economics and cash-flow metrics.

use crate::contracts::{Field, Inputs, Outcome, RiskLevel};
use crate::errors::{HubError, HubResult};
use crate::registry::{Category, Descriptor};
use crate::validation::Rule;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor {
            id: "ad-agency-commission",
            title: "Ad Agency Commission",
            description: "Commission on media spend. amount = media spend, \
                          rate = commission rate",
            category: Category::Business,
            compute: ad_agency_commission,
            rules: &[Rule::NonNegative(Field::Amount), Rule::Fraction(Field::Rate)],
        },
        Descriptor {
            id: "break-even-point",
            title: "Break-Even Point",
            description: "Units to cover fixed costs. amount = fixed costs, \
                          value = unit price, quantity = unit variable cost",
            category: Category::Business,
            compute: break_even_point,
            rules: &[
                Rule::NonNegative(Field::Amount),
                Rule::Positive(Field::Value),
                Rule::NonNegative(Field::Quantity),
            ],
        },
        Descriptor {
            id: "payback-period",
            title: "Payback Period",
            description: "Months to recover an investment. amount = initial \
                          investment, value = monthly net cash inflow",
            category: Category::Business,
            compute: payback_period,
            rules: &[Rule::NonNegative(Field::Amount), Rule::Positive(Field::Value)],
        },
        Descriptor {
            id: "churn-rate",
            title: "Churn Rate",
            description: "Customer churn percentage. amount = customers lost, \
                          quantity = customers at period start",
            category: Category::Business,
            compute: churn_rate,
            rules: &[
                Rule::NonNegative(Field::Amount),
                Rule::Positive(Field::Quantity),
            ],
        },
        Descriptor {
            id: "customer-lifetime-value",
            title: "Customer Lifetime Value",
            description: "CLV under a flat retention model. value = average \
                          order value, quantity = purchases per year, \
                          rate = annual retention rate",
            category: Category::Business,
            compute: customer_lifetime_value,
            rules: &[
                Rule::Required(Field::Value),
                Rule::Positive(Field::Quantity),
                Rule::Fraction(Field::Rate),
            ],
        },
    ]
}

/// Agency commission on media spend.
///
/// Mapping: `amount` = media spend, `rate` = commission rate (the
/// traditional agency rate is 15%).
pub fn ad_agency_commission(inputs: &Inputs) -> HubResult<Outcome> {
    let spend = inputs.require(Field::Amount)?;
    let rate = inputs.require(Field::Rate)?;

    let commission = spend * rate;

    let risk_level = if rate > 0.25 {
        RiskLevel::High
    } else if rate > 0.15 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let recommendation = match risk_level {
        RiskLevel::High => "Commission is well above the traditional 15%; renegotiate the agreement",
        RiskLevel::Medium => "Commission is above the traditional 15% benchmark",
        RiskLevel::Low => "Commission is within the standard agency range",
    };

    Ok(Outcome::new(
        commission,
        format!("Commission of {commission:.2} on {spend:.2} media spend"),
        recommendation,
        risk_level,
    ))
}

/// Units required to cover fixed costs.
///
/// `units = fixed / (price - variable)`; requires positive contribution
/// margin.
///
/// Mapping: `amount` = fixed costs, `value` = unit price, `quantity` = unit
/// variable cost.
pub fn break_even_point(inputs: &Inputs) -> HubResult<Outcome> {
    let fixed_costs = inputs.require(Field::Amount)?;
    let unit_price = inputs.require(Field::Value)?;
    let unit_variable_cost = inputs.require(Field::Quantity)?;

    if unit_price <= unit_variable_cost {
        return Err(HubError::invalid_input(
            "value",
            unit_price.to_string(),
            "unit price must exceed unit variable cost",
        ));
    }

    let contribution = unit_price - unit_variable_cost;
    let units = fixed_costs / contribution;
    let margin_ratio = contribution / unit_price;

    let risk_level = if margin_ratio < 0.2 {
        RiskLevel::High
    } else if margin_ratio < 0.4 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let recommendation = match risk_level {
        RiskLevel::High => "Thin contribution margin; small cost increases move the break-even sharply",
        RiskLevel::Medium => "Workable margin; monitor variable costs closely",
        RiskLevel::Low => "Healthy contribution margin",
    };

    Ok(Outcome::new(
        units,
        format!("Break-even at {units:.0} units ({margin_ratio:.0}% margin)", margin_ratio = margin_ratio * 100.0),
        recommendation,
        risk_level,
    ))
}

/// Months to recover the initial investment from level monthly cash flow.
///
/// Mapping: `amount` = initial investment, `value` = monthly net cash
/// inflow.
pub fn payback_period(inputs: &Inputs) -> HubResult<Outcome> {
    let investment = inputs.require(Field::Amount)?;
    let monthly_cash_flow = inputs.require(Field::Value)?;

    if monthly_cash_flow <= 0.0 {
        return Err(HubError::invalid_input(
            "value",
            monthly_cash_flow.to_string(),
            "monthly cash flow must be positive to recover the investment",
        ));
    }

    let months = investment / monthly_cash_flow;

    let risk_level = if months > 24.0 {
        RiskLevel::High
    } else if months > 12.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let recommendation = match risk_level {
        RiskLevel::High => "Recovery takes over two years; reassess cash flow assumptions",
        RiskLevel::Medium => "Recovery within two years; acceptable for most projects",
        RiskLevel::Low => "Fast recovery; the investment is self-funding within a year",
    };

    Ok(Outcome::new(
        months,
        format!("Investment recovered in {months:.1} months"),
        recommendation,
        risk_level,
    ))
}

/// Customer churn over a period as a percentage.
///
/// Mapping: `amount` = customers lost, `quantity` = customers at the start
/// of the period.
pub fn churn_rate(inputs: &Inputs) -> HubResult<Outcome> {
    let lost = inputs.require(Field::Amount)?;
    let starting = inputs.require(Field::Quantity)?;

    if lost > starting {
        return Err(HubError::invalid_input(
            "amount",
            lost.to_string(),
            "customers lost cannot exceed customers at period start",
        ));
    }

    let churn_pct = lost / starting * 100.0;

    let risk_level = if churn_pct > 5.0 {
        RiskLevel::High
    } else if churn_pct > 2.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let recommendation = match risk_level {
        RiskLevel::High => "Churn above 5% erodes growth quickly; prioritize retention work",
        RiskLevel::Medium => "Churn is manageable but trending costly; survey departing customers",
        RiskLevel::Low => "Retention is healthy",
    };

    Ok(Outcome::new(
        churn_pct,
        format!("Churn rate of {churn_pct:.1}% for the period"),
        recommendation,
        risk_level,
    ))
}

/// Customer lifetime value under a flat retention model.
///
/// `CLV = order value * purchases per year / (1 - retention)`
///
/// Mapping: `value` = average order value, `quantity` = purchases per year,
/// `rate` = annual retention rate (must be below 1).
pub fn customer_lifetime_value(inputs: &Inputs) -> HubResult<Outcome> {
    let order_value = inputs.require(Field::Value)?;
    let purchases_per_year = inputs.require(Field::Quantity)?;
    let retention = inputs.require(Field::Rate)?;

    if retention >= 1.0 {
        return Err(HubError::invalid_input(
            "rate",
            retention.to_string(),
            "retention rate must be below 1 for a finite lifetime",
        ));
    }

    let annual_value = order_value * purchases_per_year;
    let clv = annual_value / (1.0 - retention);

    let risk_level = if retention >= 0.8 {
        RiskLevel::Low
    } else if retention >= 0.5 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };
    let recommendation = match risk_level {
        RiskLevel::Low => "Strong retention supports acquisition spend up to a third of CLV",
        RiskLevel::Medium => "Average retention; loyalty programs would lift lifetime value",
        RiskLevel::High => "Low retention caps lifetime value; fix churn before scaling acquisition",
    };

    Ok(Outcome::new(
        clv,
        format!("Lifetime value of {clv:.2} ({annual_value:.2} per year)"),
        recommendation,
        risk_level,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_agency_commission() {
        let inputs = Inputs::new().with_amount(10_000.0).with_rate(0.15);
        let outcome = ad_agency_commission(&inputs).unwrap();
        assert!((outcome.results.result - 1500.0).abs() < 1e-9);
        assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_break_even_point() {
        let inputs = Inputs::new()
            .with_amount(50_000.0)
            .with_value(20.0)
            .with_quantity(15.0);
        let outcome = break_even_point(&inputs).unwrap();
        assert!((outcome.results.result - 10_000.0).abs() < 1e-9);
        assert_eq!(outcome.analysis.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_break_even_requires_margin() {
        let inputs = Inputs::new()
            .with_amount(50_000.0)
            .with_value(10.0)
            .with_quantity(15.0);
        let err = break_even_point(&inputs).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_payback_period() {
        let inputs = Inputs::new().with_amount(120_000.0).with_value(10_000.0);
        let outcome = payback_period(&inputs).unwrap();
        assert!((outcome.results.result - 12.0).abs() < 1e-9);
        assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_payback_rejects_non_positive_cash_flow() {
        let inputs = Inputs::new().with_amount(120_000.0).with_value(0.0);
        assert!(payback_period(&inputs).is_err());
    }

    #[test]
    fn test_churn_rate() {
        let inputs = Inputs::new().with_amount(5.0).with_quantity(200.0);
        let outcome = churn_rate(&inputs).unwrap();
        assert!((outcome.results.result - 2.5).abs() < 1e-9);
        assert_eq!(outcome.analysis.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_churn_cannot_exceed_base() {
        let inputs = Inputs::new().with_amount(300.0).with_quantity(200.0);
        assert!(churn_rate(&inputs).is_err());
    }

    #[test]
    fn test_customer_lifetime_value() {
        let inputs = Inputs::new()
            .with_value(50.0)
            .with_quantity(12.0)
            .with_rate(0.75);
        let outcome = customer_lifetime_value(&inputs).unwrap();
        assert!((outcome.results.result - 2400.0).abs() < 1e-9);
        assert_eq!(outcome.analysis.risk_level, RiskLevel::Medium);
    }
}
