//! Locating range expressions inside template values.

use crate::error::{MalformedRangeError, MalformedRangeKind};
use crate::range::SweepSpec;

/// Find every `[...]` range in `value`, left to right.
///
/// Matches never overlap: the search for the next `[` resumes after the
/// previous `]`. Spans refer to the original `value`, brackets included.
/// An empty result means the value is copied verbatim into every
/// configuration.
pub fn scan_value(property: &str, value: &str) -> Result<Vec<SweepSpec>, MalformedRangeError> {
    let mut specs = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = value[cursor..].find('[') {
        let open = cursor + offset;
        let Some(close) = value[open + 1..].find(']').map(|i| open + 1 + i) else {
            return Err(MalformedRangeError::new(
                property,
                &value[open..],
                MalformedRangeKind::Unterminated,
            ));
        };

        specs.push(SweepSpec::parse(property, &value[open + 1..close], open..close + 1)?);
        cursor = close + 1;
    }

    Ok(specs)
}

/// Whether `value` still holds anything that looks like a range expression
pub fn contains_range(value: &str) -> bool {
    value
        .find('[')
        .is_some_and(|open| value[open + 1..].contains(']'))
}
