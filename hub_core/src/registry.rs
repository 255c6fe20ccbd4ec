//! # Calculator Registry
//!
//! The process-wide catalog mapping a calculator id to its [`Descriptor`].
//! The registry is an explicit value that gets built once during startup and
//! injected wherever lookups are needed; there is no ambient global state.
//!
//! Registration is write-once: descriptors are immutable after insertion and
//! there is no unregister operation. Duplicate ids are rejected so that a
//! misconfigured catalog fails startup instead of silently shadowing a
//! calculator.
//!
//! ## Example
//!
//! ```rust
//! use hub_core::registry::Registry;
//!
//! let registry = Registry::with_catalog().unwrap();
//!
//! let descriptor = registry.get("ad-agency-commission").unwrap();
//! assert_eq!(descriptor.id, "ad-agency-commission");
//!
//! assert!(registry.get("does-not-exist").is_err());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::contracts::{Inputs, Outcome};
use crate::errors::{HubError, HubResult};
use crate::validation::Rule;

/// Signature every calculator compute function implements.
///
/// Pure and synchronous: an input record in, a complete [`Outcome`] out.
pub type ComputeFn = fn(&Inputs) -> HubResult<Outcome>;

/// Domain category a calculator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Finance,
    Business,
    Legal,
    Health,
    Construction,
    Career,
    Lifestyle,
    Math,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::Finance,
        Category::Business,
        Category::Legal,
        Category::Health,
        Category::Construction,
        Category::Career,
        Category::Lifestyle,
        Category::Math,
    ];

    /// Display name for UI output
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Finance => "Finance",
            Category::Business => "Business",
            Category::Legal => "Legal",
            Category::Health => "Health",
            Category::Construction => "Construction",
            Category::Career => "Career",
            Category::Lifestyle => "Lifestyle",
            Category::Math => "Math",
        }
    }
}

/// Everything the registry knows about one calculator.
///
/// Created once at startup and immutable afterwards. The compute function
/// and rule table are static so descriptors stay `Copy`.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// Unique kebab-case id (e.g. "ad-agency-commission")
    pub id: &'static str,

    /// Human-readable title
    pub title: &'static str,

    /// One-line description, including the generic-field mapping
    pub description: &'static str,

    /// Domain category
    pub category: Category,

    /// Compute entry point
    pub compute: ComputeFn,

    /// Field checks the engine runs before computing
    pub rules: &'static [Rule],
}

/// Serializable snapshot of the registry contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySummary {
    /// Total registered calculators
    pub total: usize,

    /// Non-empty categories with their counts, in display order
    pub by_category: Vec<CategoryCount>,

    /// When this registry was built
    pub built_at: DateTime<Utc>,
}

/// One entry of the per-category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// The calculator catalog: id -> descriptor, unique keys.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: HashMap<String, Descriptor>,
    built_at: DateTime<Utc>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Registry {
            entries: HashMap::new(),
            built_at: Utc::now(),
        }
    }

    /// Create a registry populated with the built-in catalog.
    ///
    /// Registers every built-in descriptor sequentially; the first duplicate
    /// or invalid id aborts initialization with an error. This is the
    /// startup phase - once it returns `Ok`, the registry is read-only by
    /// convention and safe to share across readers.
    pub fn with_catalog() -> HubResult<Self> {
        let mut registry = Registry::new();
        for descriptor in catalog::builtin() {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Register one calculator.
    ///
    /// Fails with [`HubError::DuplicateId`] if the id is already taken and
    /// with [`HubError::InvalidInput`] if the id is empty. Both are fatal at
    /// startup; callers should propagate rather than swallow them.
    pub fn register(&mut self, descriptor: Descriptor) -> HubResult<()> {
        if descriptor.id.trim().is_empty() {
            return Err(HubError::invalid_input(
                "id",
                descriptor.id,
                "descriptor id must be non-empty",
            ));
        }
        if self.entries.contains_key(descriptor.id) {
            return Err(HubError::duplicate_id(descriptor.id));
        }
        self.entries.insert(descriptor.id.to_string(), descriptor);
        Ok(())
    }

    /// Look up a calculator by id.
    pub fn get(&self, id: &str) -> HubResult<&Descriptor> {
        self.entries.get(id).ok_or_else(|| HubError::not_found(id))
    }

    /// Whether a calculator with this id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// All registered descriptors, sorted by id.
    ///
    /// Insertion order carries no meaning; sorting keeps listings and test
    /// output deterministic.
    pub fn list(&self) -> Vec<&Descriptor> {
        let mut descriptors: Vec<&Descriptor> = self.entries.values().collect();
        descriptors.sort_by_key(|descriptor| descriptor.id);
        descriptors
    }

    /// Number of registered calculators
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializable snapshot: totals, per-category counts, build timestamp.
    pub fn summary(&self) -> RegistrySummary {
        let by_category = Category::ALL
            .iter()
            .filter_map(|&category| {
                let count = self
                    .entries
                    .values()
                    .filter(|descriptor| descriptor.category == category)
                    .count();
                (count > 0).then_some(CategoryCount { category, count })
            })
            .collect();

        RegistrySummary {
            total: self.entries.len(),
            by_category,
            built_at: self.built_at,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::{Field, RiskLevel};

    fn stub_compute(inputs: &Inputs) -> HubResult<Outcome> {
        let value = inputs.require(Field::Value)?;
        Ok(Outcome::new(value, "echo", "none", RiskLevel::Low))
    }

    fn stub_descriptor(id: &'static str) -> Descriptor {
        Descriptor {
            id,
            title: "Stub",
            description: "value = echoed input",
            category: Category::Math,
            compute: stub_compute,
            rules: &[Rule::Required(Field::Value)],
        }
    }

    #[test]
    fn test_register_then_get() {
        let mut registry = Registry::new();
        registry.register(stub_descriptor("stub")).unwrap();

        let descriptor = registry.get("stub").unwrap();
        assert_eq!(descriptor.id, "stub");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = Registry::new();
        registry.register(stub_descriptor("stub")).unwrap();

        let err = registry.register(stub_descriptor("stub")).unwrap_err();
        assert_eq!(err, HubError::duplicate_id("stub"));

        // First registration survives
        assert!(registry.get("stub").is_ok());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut registry = Registry::new();
        let err = registry.register(stub_descriptor("  ")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_get_unknown_id() {
        let registry = Registry::new();
        let err = registry.get("does-not-exist").unwrap_err();
        assert_eq!(err, HubError::not_found("does-not-exist"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_list_is_sorted_and_exact() {
        let mut registry = Registry::new();
        registry.register(stub_descriptor("b")).unwrap();
        registry.register(stub_descriptor("a")).unwrap();
        registry.register(stub_descriptor("c")).unwrap();

        let ids: Vec<&str> = registry.list().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_with_catalog_builds() {
        let registry = Registry::with_catalog().unwrap();
        assert!(!registry.is_empty());
        assert!(registry.contains("ad-agency-commission"));
        assert!(registry.get("does-not-exist").is_err());
    }

    #[test]
    fn test_summary_counts() {
        let mut registry = Registry::new();
        registry.register(stub_descriptor("a")).unwrap();
        registry.register(stub_descriptor("b")).unwrap();

        let summary = registry.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.by_category.len(), 1);
        assert_eq!(summary.by_category[0].category, Category::Math);
        assert_eq!(summary.by_category[0].count, 2);
    }

    #[test]
    fn test_summary_serialization() {
        let registry = Registry::with_catalog().unwrap();
        let summary = registry.summary();
        let json = serde_json::to_string(&summary).unwrap();
        let roundtrip: RegistrySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, roundtrip);
    }
}
