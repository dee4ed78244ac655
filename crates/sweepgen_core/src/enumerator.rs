//! Cross-product enumeration of a template.
//!
//! Each step materializes the current combination, names it, then advances
//! the odometer. The final combination is produced before the odometer
//! reports exhaustion, so a template without any range still yields exactly
//! one configuration.

use crate::entry_table::{Advance, EntryTable};
use crate::error::MalformedRangeError;
use crate::naming::{IdentifierStrategy, StrategyKind};
use crate::template::{Configuration, Template};

/// One generated configuration and its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub identifier: String,
    pub configuration: Configuration,
}

/// Iterator over every configuration of a template, in odometer order.
#[derive(Debug, Clone)]
pub struct Expansion<'a> {
    template: &'a Template,
    table: EntryTable,
    strategy: IdentifierStrategy,
    exhausted: bool,
}

impl<'a> Expansion<'a> {
    /// Scan `template` and prepare the first combination.
    pub fn new(template: &'a Template) -> Result<Self, MalformedRangeError> {
        let table = EntryTable::scan(template)?;
        let strategy = IdentifierStrategy::select(&table);
        Ok(Self {
            template,
            table,
            strategy,
            exhausted: false,
        })
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn table(&self) -> &EntryTable {
        &self.table
    }

    /// Total configurations this expansion yields from the start, if it fits in a `u64`
    pub fn combination_count(&self) -> Option<u64> {
        self.table.combination_count()
    }
}

impl Iterator for Expansion<'_> {
    type Item = Generated;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let configuration = self.table.materialize(self.template);
        // Identifier reflects the combination just materialized
        let identifier = self.strategy.identify(&self.table);

        if self.table.advance() == Advance::Exhausted {
            self.exhausted = true;
        }

        Some(Generated {
            identifier,
            configuration,
        })
    }
}

impl std::iter::FusedIterator for Expansion<'_> {}

/// Expand `template` and hand every (identifier, configuration) to `sink`.
///
/// Returns how many configurations were produced. Nothing reaches `sink`
/// if any range in the template is malformed.
pub fn expand<F>(template: &Template, mut sink: F) -> Result<usize, MalformedRangeError>
where
    F: FnMut(&str, &Configuration),
{
    let mut produced = 0;
    for generated in Expansion::new(template)? {
        sink(&generated.identifier, &generated.configuration);
        produced += 1;
    }
    Ok(produced)
}
