//! Short identifiers for generated configurations.
//!
//! The naming policy is chosen once per template from the shape of its entry
//! table:
//!
//! | Shape                                              | Policy        | Example id      |
//! |----------------------------------------------------|---------------|-----------------|
//! | no ranges, or any value holding 2+ ranges          | `Incremental` | `0`, `1`, `2`   |
//! | exactly one ranged property                        | `SingleEntry` | `0.25`          |
//! | several ranged properties sharing a dotted prefix  | `MultiEntry`  | `min@1-max@5`   |
//! | or suffix                                          |               |                 |
//!
//! `MultiEntry` trims names only at `.` boundaries, so `search.coeff.min` and
//! `search.coeff.max` become `min` and `max`. When the names share no dotted
//! prefix or suffix at all the policy falls back to `Incremental`.
//!
//! Distinct combinations may still map to the same identifier; nothing here
//! detects that.

use std::fmt;

use crate::entry_table::EntryTable;

/// Which naming policy was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Incremental,
    SingleEntry,
    MultiEntry,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Incremental => write!(f, "incremental"),
            StrategyKind::SingleEntry => write!(f, "single-entry"),
            StrategyKind::MultiEntry => write!(f, "multi-entry"),
        }
    }
}

/// Naming policy bound to the entry table it was selected from.
///
/// Property references are indices into that table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierStrategy {
    /// Sequential counter starting at 0
    Incremental { next: u64 },
    /// Current value of the only ranged property
    SingleEntry { property: usize },
    /// `name@value` per ranged property, joined with `-`
    MultiEntry {
        properties: Vec<usize>,
        prefix_len: usize,
        suffix_len: usize,
    },
}

impl IdentifierStrategy {
    /// Choose the policy for `table`.
    pub fn select(table: &EntryTable) -> Self {
        // A value with several ranges cannot be named by a single counter
        if table.iter().any(|(_, specs)| specs.len() >= 2) {
            return Self::incremental();
        }

        let candidates: Vec<usize> = table
            .iter()
            .enumerate()
            .filter(|(_, (_, specs))| specs.len() == 1)
            .map(|(index, _)| index)
            .collect();

        match candidates.as_slice() {
            [] => Self::incremental(),
            [only] => Self::SingleEntry { property: *only },
            _ => {
                let names: Vec<&str> = candidates
                    .iter()
                    .filter_map(|&index| table.get_index(index).map(|(name, _)| name))
                    .collect();
                let prefix_len = common_prefix_len(&names);
                let suffix_len = common_suffix_len(&names, prefix_len);

                if prefix_len + suffix_len > 0 {
                    Self::MultiEntry {
                        properties: candidates,
                        prefix_len,
                        suffix_len,
                    }
                } else {
                    Self::incremental()
                }
            }
        }
    }

    fn incremental() -> Self {
        Self::Incremental { next: 0 }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Incremental { .. } => StrategyKind::Incremental,
            Self::SingleEntry { .. } => StrategyKind::SingleEntry,
            Self::MultiEntry { .. } => StrategyKind::MultiEntry,
        }
    }

    /// Identifier for the combination `table` currently holds.
    ///
    /// `Incremental` counts up on every call.
    pub fn identify(&mut self, table: &EntryTable) -> String {
        match self {
            Self::Incremental { next } => {
                let id = next.to_string();
                *next += 1;
                id
            }
            Self::SingleEntry { property } => table
                .get_index(*property)
                .and_then(|(_, specs)| specs.first())
                .map(|spec| spec.counter_text())
                .unwrap_or_default(),
            Self::MultiEntry {
                properties,
                prefix_len,
                suffix_len,
            } => properties
                .iter()
                .filter_map(|&index| table.get_index(index))
                .filter_map(|(name, specs)| {
                    let trimmed = &name[*prefix_len..name.len() - *suffix_len];
                    specs
                        .first()
                        .map(|spec| format!("{trimmed}@{}", spec.counter_text()))
                })
                .collect::<Vec<_>>()
                .join("-"),
        }
    }
}

/// Length of the prefix shared by all `names`, cut back to just after the
/// last `.` inside it.
fn common_prefix_len(names: &[&str]) -> usize {
    let Some((first, rest)) = names.split_first() else {
        return 0;
    };

    let mut boundary = 0;
    for (i, &byte) in first.as_bytes().iter().enumerate() {
        if rest.iter().any(|name| name.as_bytes().get(i) != Some(&byte)) {
            break;
        }
        if byte == b'.' {
            boundary = i + 1;
        }
    }
    boundary
}

/// Length of the suffix shared by all `names`, cut back to start at the `.`
/// furthest from the end inside it.
///
/// Only the part of each name after `prefix_len` is considered, so prefix and
/// suffix never overlap.
fn common_suffix_len(names: &[&str], prefix_len: usize) -> usize {
    let Some((first, rest)) = names.split_first() else {
        return 0;
    };
    let limit = names
        .iter()
        .map(|name| name.len() - prefix_len)
        .min()
        .unwrap_or(0);

    let first = first.as_bytes();
    let mut boundary = 0;
    for k in 1..=limit {
        let byte = first[first.len() - k];
        if rest.iter().any(|name| name.as_bytes()[name.len() - k] != byte) {
            break;
        }
        if byte == b'.' {
            boundary = k;
        }
    }
    boundary
}
