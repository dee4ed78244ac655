//! Behaviour tests for the expansion engine
//!
//! Tests are organized by topic:
//! - `expansion` - Combination counts, ordering and substitution
//! - `identifiers` - Naming policy selection and identifier sequences
//! - `degenerate` - Inverted ranges and other edge shapes
//! - `templates` - End-to-end runs from property-file text

mod identifiers;

use crate::enumerator::Expansion;
use crate::template::Template;

/// Collect (identifier, value of `property`) for every generated configuration
fn collect_values(template: &Template, property: &str) -> Vec<(String, String)> {
    Expansion::new(template)
        .unwrap()
        .map(|generated| {
            let value = generated
                .configuration
                .get(property)
                .unwrap_or_default()
                .to_string();
            (generated.identifier, value)
        })
        .collect()
}

fn identifiers(template: &Template) -> Vec<String> {
    Expansion::new(template)
        .unwrap()
        .map(|generated| generated.identifier)
        .collect()
}
