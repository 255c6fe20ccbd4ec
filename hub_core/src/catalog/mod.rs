//! # Built-in Calculator Catalog
//!
//! The complete descriptor table for every calculator shipped with CalcHub,
//! organized by domain category. Each calculator is a stateless pure
//! function over the generic [`Inputs`](crate::contracts::Inputs) record;
//! its descriptor documents the field mapping and declares the validation
//! rules the engine runs first.
//!
//! The catalog is a plain data table: adding a calculator means writing one
//! compute function and one descriptor entry, nothing else.
//!
//! ## Available Categories
//!
//! - [`finance`] - returns, interest, lending ratios
//! - [`business`] - unit economics and cash-flow metrics
//! - [`legal`] - settlement estimates
//! - [`health`] - body metrics
//! - [`construction`] - material quantities
//! - [`career`] - compensation conversions
//! - [`lifestyle`] - everyday arithmetic
//! - [`math`] - generic numeric helpers

pub mod business;
pub mod career;
pub mod construction;
pub mod finance;
pub mod health;
pub mod legal;
pub mod lifestyle;
pub mod math;

use once_cell::sync::Lazy;

use crate::registry::Descriptor;

/// Cached copy of the built-in descriptor table
static BUILTIN: Lazy<Vec<Descriptor>> = Lazy::new(collect);

fn collect() -> Vec<Descriptor> {
    let mut descriptors = Vec::new();
    descriptors.extend(finance::descriptors());
    descriptors.extend(business::descriptors());
    descriptors.extend(legal::descriptors());
    descriptors.extend(health::descriptors());
    descriptors.extend(construction::descriptors());
    descriptors.extend(career::descriptors());
    descriptors.extend(lifestyle::descriptors());
    descriptors.extend(math::descriptors());
    descriptors
}

/// The full built-in catalog.
///
/// Descriptors are `Copy`; this hands out cheap copies of the cached table.
pub fn builtin() -> Vec<Descriptor> {
    BUILTIN.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique_and_kebab_case() {
        let catalog = builtin();
        let mut seen = HashSet::new();
        for descriptor in &catalog {
            assert!(seen.insert(descriptor.id), "duplicate id {}", descriptor.id);
            assert!(
                descriptor
                    .id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "id {} is not kebab-case",
                descriptor.id
            );
        }
    }

    #[test]
    fn test_catalog_is_nonempty_per_category() {
        use crate::registry::Category;

        let catalog = builtin();
        for category in Category::ALL {
            assert!(
                catalog.iter().any(|d| d.category == category),
                "category {:?} has no calculators",
                category
            );
        }
    }

    #[test]
    fn test_every_descriptor_declares_rules() {
        for descriptor in builtin() {
            assert!(
                !descriptor.rules.is_empty(),
                "{} declares no validation rules",
                descriptor.id
            );
        }
    }
}
