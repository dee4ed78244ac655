//! Property-file text format.
//!
//! Reads the common subset of the `.properties` / `.ini` syntax used for
//! engine tuning templates:
//!
//! ```text
//! # comment            ! also a comment
//! search.depth = [4,8,2]
//! eval.weights: [0.5,1.5,0.5] \
//!     [1,3]
//! engine.name Sweep
//! ```
//!
//! A key ends at the first `=`, `:` or whitespace. A line ending in an odd
//! number of backslashes continues on the next line. Escape sequences other
//! than line continuation are kept verbatim.

use crate::error::{PropertiesError, PropertiesErrorKind};
use crate::template::{Configuration, Template};

/// Parse property-file text into a template, keeping declaration order.
///
/// A key declared twice keeps its first position and its last value.
pub fn parse(text: &str) -> Result<Template, PropertiesError> {
    let mut template = Template::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with(['#', '!']) {
            continue;
        }

        let line_number = index + 1;
        let mut logical = line.to_string();
        while has_continuation(&logical) {
            logical.pop();
            let Some((_, next)) = lines.next() else {
                return Err(PropertiesError {
                    line: line_number,
                    kind: PropertiesErrorKind::DanglingContinuation,
                });
            };
            logical.push_str(next.trim_start());
        }

        let (key, value) = split_property(&logical);
        if key.is_empty() {
            return Err(PropertiesError {
                line: line_number,
                kind: PropertiesErrorKind::EmptyKey,
            });
        }
        template.insert(key, value);
    }

    Ok(template)
}

/// Render a configuration as property-file text.
///
/// Every line of `header` becomes a `#` comment line ahead of the properties.
pub fn render(configuration: &Configuration, header: &str) -> String {
    let mut out = String::new();
    for line in header.lines() {
        out.push('#');
        out.push_str(line);
        out.push('\n');
    }
    for (name, value) in configuration.iter() {
        out.push_str(name);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

fn has_continuation(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn split_property(line: &str) -> (&str, &str) {
    let key_end = line
        .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
        .unwrap_or(line.len());
    let key = &line[..key_end];

    let mut value = line[key_end..].trim_start();
    if let Some(rest) = value.strip_prefix(['=', ':']) {
        value = rest.trim_start();
    }
    (key, value)
}
