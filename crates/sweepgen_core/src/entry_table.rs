//! Sweep ranges of a template, grouped by property.
//!
//! The table is the mutable state of an expansion. Its counters are stepped
//! in place like an odometer: the first range discovered is the fastest
//! digit, the last range of the last property the slowest.

use indexmap::IndexMap;

use crate::error::MalformedRangeError;
use crate::range::SweepSpec;
use crate::scanner::scan_value;
use crate::template::{Configuration, PropertyMap, Template};

/// Outcome of stepping the odometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Counters now describe a combination not produced before
    Advanced,
    /// Every counter wrapped back to its minimum; the sweep is complete
    Exhausted,
}

/// Ordered map from property name to the ranges found in its value.
///
/// Properties appear in template order and ranges in left-to-right order.
/// Properties without any range have no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryTable {
    entries: IndexMap<String, Vec<SweepSpec>>,
}

impl EntryTable {
    /// Scan every value of `template` for ranges.
    pub fn scan(template: &Template) -> Result<Self, MalformedRangeError> {
        let mut entries = IndexMap::new();
        for (name, value) in template.iter() {
            let specs = scan_value(name, value)?;
            if !specs.is_empty() {
                entries.insert(name.to_string(), specs);
            }
        }
        Ok(Self { entries })
    }

    /// Number of properties holding at least one range
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of ranges across all properties
    pub fn range_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn get(&self, name: &str) -> Option<&[SweepSpec]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Property at `index` in table order
    pub fn get_index(&self, index: usize) -> Option<(&str, &[SweepSpec])> {
        self.entries
            .get_index(index)
            .map(|(name, specs)| (name.as_str(), specs.as_slice()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SweepSpec])> {
        self.entries
            .iter()
            .map(|(name, specs)| (name.as_str(), specs.as_slice()))
    }

    /// Exact number of configurations the sweep will produce.
    ///
    /// Returns `None` if the product overflows a `u64`.
    pub fn combination_count(&self) -> Option<u64> {
        self.entries
            .values()
            .flatten()
            .try_fold(1u64, |total, spec| total.checked_mul(spec.value_count()?))
    }

    /// Step to the next combination.
    ///
    /// The first range that can still increase is stepped; every range before
    /// it wraps back to its minimum. If none can increase, all of them have
    /// wrapped and the table is back at its first combination.
    pub fn advance(&mut self) -> Advance {
        for spec in self.entries.values_mut().flatten() {
            if spec.try_step() {
                return Advance::Advanced;
            }
            spec.reset();
        }
        Advance::Exhausted
    }

    /// Resolve the current combination against `template`.
    ///
    /// Spans are replaced from the rightmost to the leftmost so that earlier
    /// spans stay valid while later text changes length.
    pub fn materialize(&self, template: &Template) -> Configuration {
        let mut properties = PropertyMap::with_capacity(template.len());
        for (name, value) in template.iter() {
            let mut resolved = value.to_string();
            if let Some(specs) = self.entries.get(name) {
                for spec in specs.iter().rev() {
                    resolved.replace_range(spec.span.clone(), &spec.counter_text());
                }
            }
            properties.insert(name.to_string(), resolved);
        }
        Configuration::from(properties)
    }
}
