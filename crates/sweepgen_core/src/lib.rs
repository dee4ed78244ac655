//! Parameter sweep expansion library
//!
//! This crate expands a single parameterized property template into every
//! concrete configuration of its sweep. Any template value may embed numeric
//! ranges such as `[0,4]` or `[0.10,0.30,0.05]`; the expansion substitutes each
//! range with every one of its discrete values and produces the full
//! cross-product, in a fixed and reproducible order.
//!
//! It supports:
//! - Exact decimal ranges (no floating-point drift, plain notation only)
//! - Multiple ranges per property and per template
//! - Short identifiers derived from which properties vary
//! - Property-file parsing and rendering for templates and results
//!
//! # Example
//!
//! ```ignore
//! use sweepgen_core::{Template, expand};
//!
//! let template = Template::from_pairs([
//!     ("search.coeff.min", "[1,3]"),
//!     ("search.coeff.max", "[5,6]"),
//!     ("engine.threads", "1"),
//! ]);
//!
//! let count = expand(&template, |id, config| {
//!     println!("{id}: {:?}", config.get("search.coeff.min"));
//! })?;
//! assert_eq!(count, 6);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod decimal;
pub mod entry_table;
pub mod enumerator;
pub mod error;
pub mod naming;
pub mod range;
pub mod scanner;

// ============================================================================
// Template and file format modules
// ============================================================================

pub mod properties;
pub mod template;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use entry_table::{Advance, EntryTable};
pub use enumerator::{Expansion, Generated, expand};
pub use error::{MalformedRangeError, MalformedRangeKind, PropertiesError, PropertiesErrorKind};
pub use naming::{IdentifierStrategy, StrategyKind};
pub use range::SweepSpec;
pub use template::{Configuration, PropertyMap, Template};
