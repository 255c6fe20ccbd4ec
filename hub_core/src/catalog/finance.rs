//! Finance calculators: returns, interest, and lending ratios.
//!
//! Each compute function documents how the generic input fields map onto
//! its domain quantities.

use crate::contracts::{Field, Inputs, Outcome, RiskLevel};
use crate::errors::{HubError, HubResult};
use crate::registry::{Category, Descriptor};
use crate::validation::Rule;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor {
            id: "roi",
            title: "Return on Investment",
            description: "ROI percentage. amount = initial investment, value = final value",
            category: Category::Finance,
            compute: roi,
            rules: &[Rule::NonNegative(Field::Amount), Rule::Required(Field::Value)],
        },
        Descriptor {
            id: "compound-interest",
            title: "Compound Interest",
            description: "Future value with annual compounding. amount = principal, \
                          rate = annual rate, quantity = years",
            category: Category::Finance,
            compute: compound_interest,
            rules: &[
                Rule::NonNegative(Field::Amount),
                Rule::Fraction(Field::Rate),
                Rule::Positive(Field::Quantity),
            ],
        },
        Descriptor {
            id: "loan-payment",
            title: "Loan Payment",
            description: "Amortized monthly payment. amount = principal, \
                          rate = annual rate, quantity = term in years",
            category: Category::Finance,
            compute: loan_payment,
            rules: &[
                Rule::NonNegative(Field::Amount),
                Rule::Fraction(Field::Rate),
                Rule::Positive(Field::Quantity),
            ],
        },
        Descriptor {
            id: "loan-to-value-ratio",
            title: "Loan-to-Value Ratio",
            description: "LTV percentage. amount = loan amount, value = property value",
            category: Category::Finance,
            compute: loan_to_value,
            rules: &[Rule::NonNegative(Field::Amount), Rule::Required(Field::Value)],
        },
    ]
}

/// Basic return on investment as a percentage.
///
/// `ROI = (final - invested) / invested * 100`
///
/// Mapping: `amount` = initial investment, `value` = final value.
pub fn roi(inputs: &Inputs) -> HubResult<Outcome> {
    let invested = inputs.require(Field::Amount)?;
    let final_value = inputs.require(Field::Value)?;

    if invested <= 0.0 {
        return Err(HubError::invalid_input(
            "amount",
            invested.to_string(),
            "initial investment must be positive",
        ));
    }

    let roi_pct = (final_value - invested) / invested * 100.0;

    let risk_level = if roi_pct < 0.0 {
        RiskLevel::High
    } else if roi_pct < 15.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let recommendation = match risk_level {
        RiskLevel::High => "The investment lost money; review before committing further capital",
        RiskLevel::Medium => "Returns are positive but modest; compare against benchmarks",
        RiskLevel::Low => "Strong return; maintain the current strategy",
    };

    Ok(Outcome::new(
        roi_pct,
        format!("Return on investment of {roi_pct:.1}%"),
        recommendation,
        risk_level,
    ))
}

/// Future value under annual compounding.
///
/// `FV = P * (1 + r)^t`
///
/// Mapping: `amount` = principal, `rate` = annual rate as a fraction,
/// `quantity` = years.
pub fn compound_interest(inputs: &Inputs) -> HubResult<Outcome> {
    let principal = inputs.require(Field::Amount)?;
    let rate = inputs.require(Field::Rate)?;
    let years = inputs.require(Field::Quantity)?;

    let future_value = principal * (1.0 + rate).powf(years);
    let earned = future_value - principal;

    let risk_level = if rate > 0.10 {
        // Double-digit guaranteed growth assumptions rarely hold
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    Ok(Outcome::new(
        future_value,
        format!("{principal:.2} grows to {future_value:.2} over {years:.0} years ({earned:.2} earned)"),
        "Reinvest interest to keep the compounding schedule intact",
        risk_level,
    ))
}

/// Standard amortized monthly payment.
///
/// `M = P * (i * (1+i)^n) / ((1+i)^n - 1)` with `i` the monthly rate and
/// `n` the number of payments; falls back to straight division at 0%.
///
/// Mapping: `amount` = principal, `rate` = annual rate as a fraction,
/// `quantity` = term in years.
pub fn loan_payment(inputs: &Inputs) -> HubResult<Outcome> {
    let principal = inputs.require(Field::Amount)?;
    let annual_rate = inputs.require(Field::Rate)?;
    let term_years = inputs.require(Field::Quantity)?;

    let monthly_rate = annual_rate / 12.0;
    let payments = term_years * 12.0;

    let payment = if monthly_rate == 0.0 {
        principal / payments
    } else {
        let growth = (1.0 + monthly_rate).powf(payments);
        principal * (monthly_rate * growth) / (growth - 1.0)
    };

    let total_paid = payment * payments;
    let total_interest = total_paid - principal;

    let risk_level = if total_interest > principal {
        RiskLevel::High
    } else if total_interest > principal * 0.5 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let recommendation = match risk_level {
        RiskLevel::High => "Interest exceeds the principal; consider a shorter term or lower rate",
        RiskLevel::Medium => "Substantial interest cost; extra payments would shorten the schedule",
        RiskLevel::Low => "Financing cost is reasonable for this term",
    };

    Ok(Outcome::new(
        payment,
        format!("Monthly payment {payment:.2}, total interest {total_interest:.2}"),
        recommendation,
        risk_level,
    ))
}

/// Loan-to-value ratio as a percentage.
///
/// Mapping: `amount` = loan amount, `value` = appraised property value.
pub fn loan_to_value(inputs: &Inputs) -> HubResult<Outcome> {
    let loan = inputs.require(Field::Amount)?;
    let property_value = inputs.require(Field::Value)?;

    if property_value <= 0.0 {
        return Err(HubError::invalid_input(
            "value",
            property_value.to_string(),
            "property value must be positive",
        ));
    }

    let ltv_pct = loan / property_value * 100.0;

    let risk_level = if ltv_pct > 80.0 {
        RiskLevel::High
    } else if ltv_pct > 60.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let recommendation = match risk_level {
        RiskLevel::High => "LTV above 80% typically requires mortgage insurance",
        RiskLevel::Medium => "Moderate leverage; a larger down payment improves terms",
        RiskLevel::Low => "Conservative leverage with strong equity cushion",
    };

    Ok(Outcome::new(
        ltv_pct,
        format!("Loan-to-value ratio of {ltv_pct:.1}%"),
        recommendation,
        risk_level,
    ))
}
