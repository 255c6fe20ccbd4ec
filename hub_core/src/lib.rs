//! # hub_core - Calculator Catalog Engine
//!
//! `hub_core` is the computational heart of CalcHub: a registry of
//! financial, business, legal, and health calculators behind one generic
//! compute contract. All inputs and outputs are JSON-serializable, making
//! the library easy to drive from a CLI, a web layer, or tests.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every calculator is a pure function from inputs to outcome
//! - **Data over boilerplate**: calculators are rows in a descriptor table,
//!   not per-calculator modules with registration side effects
//! - **JSON-First**: all public shapes implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use hub_core::contracts::Inputs;
//! use hub_core::engine::{run, Verdict};
//! use hub_core::registry::Registry;
//!
//! // Startup: build the registry once, then share it read-only
//! let registry = Registry::with_catalog().unwrap();
//!
//! let inputs = Inputs::new().with_amount(100_000.0).with_value(150_000.0);
//! match run(&registry, "roi", &inputs).unwrap() {
//!     Verdict::Computed(output) => println!("ROI: {:.1}%", output.results.result),
//!     Verdict::Invalid { errors } => {
//!         for error in errors {
//!             eprintln!("{}: {}", error.field, error.message);
//!         }
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`registry`] - the id -> descriptor catalog and its startup phase
//! - [`engine`] - the lookup/validate/compute surface
//! - [`catalog`] - the built-in calculators, grouped by category
//! - [`contracts`] - the generic Inputs/Results/Metrics/Analysis shapes
//! - [`validation`] - declarative per-field checks
//! - [`errors`] - structured error types

pub mod catalog;
pub mod contracts;
pub mod engine;
pub mod errors;
pub mod registry;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use contracts::{Analysis, Field, Inputs, Metrics, Outcome, Results, RiskLevel};
pub use engine::{run, RunOutput, Verdict};
pub use errors::{HubError, HubResult};
pub use registry::{Category, Descriptor, Registry, RegistrySummary};
pub use validation::{Rule, ValidationResult};
