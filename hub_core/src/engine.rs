//! # Run Engine
//!
//! The lookup/compute surface consumed by front-ends: given a calculator id
//! and an [`Inputs`] record, produce either a computed [`RunOutput`] or a
//! list of validation failures.
//!
//! Error policy (three distinct outcomes):
//! - unknown id -> `Err(HubError::NotFound)`, recoverable, surface as
//!   "unknown calculator"
//! - failed field checks (including input errors raised inside compute) ->
//!   `Ok(Verdict::Invalid)`, surface as form feedback
//! - any other compute failure -> logged at error level, surfaced as a
//!   generic `HubError::ComputeFailed` with no internal detail
//!
//! ## Example
//!
//! ```rust
//! use hub_core::contracts::Inputs;
//! use hub_core::engine::{run, Verdict};
//! use hub_core::registry::Registry;
//!
//! let registry = Registry::with_catalog().unwrap();
//!
//! let inputs = Inputs::new().with_amount(100_000.0).with_value(150_000.0);
//! match run(&registry, "roi", &inputs).unwrap() {
//!     Verdict::Computed(output) => assert_eq!(output.results.result, 50.0),
//!     Verdict::Invalid { .. } => unreachable!(),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::contracts::{Analysis, Inputs, Metrics, Results};
use crate::errors::{HubError, HubResult};
use crate::registry::Registry;
use crate::validation::{self, ValidationResult};

/// Result of a successful calculator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutput {
    /// Id of the calculator that produced this output
    pub calculator: String,
    pub results: Results,
    pub metrics: Metrics,
    pub analysis: Analysis,
}

/// What a run produced: a computed output, or form feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Verdict {
    /// Inputs passed validation and the compute function succeeded
    Computed(RunOutput),
    /// Inputs were rejected; nothing was computed
    Invalid { errors: Vec<ValidationResult> },
}

/// Look up a calculator and run it against the given inputs.
pub fn run(registry: &Registry, id: &str, inputs: &Inputs) -> HubResult<Verdict> {
    let descriptor = registry.get(id)?;

    let errors = validation::check(descriptor.rules, inputs);
    if !errors.is_empty() {
        return Ok(Verdict::Invalid { errors });
    }

    match (descriptor.compute)(inputs) {
        Ok(outcome) => Ok(Verdict::Computed(RunOutput {
            calculator: descriptor.id.to_string(),
            results: outcome.results,
            metrics: outcome.metrics,
            analysis: outcome.analysis,
        })),
        // Cross-field input errors raised inside compute are still form
        // feedback, not internal failures.
        Err(err @ (HubError::InvalidInput { .. } | HubError::MissingField { .. })) => {
            let field = match &err {
                HubError::InvalidInput { field, .. } => field.clone(),
                HubError::MissingField { field } => field.clone(),
                _ => unreachable!(),
            };
            Ok(Verdict::Invalid {
                errors: vec![ValidationResult::invalid(field, err.to_string())],
            })
        }
        Err(err) => {
            tracing::error!(calculator = id, error = %err, "calculator compute failed");
            Err(HubError::compute_failed(
                id,
                "calculation did not produce a result",
            ))
        }
    }
}
