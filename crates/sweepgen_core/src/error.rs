use thiserror::Error;

/// Why a bracketed range expression could not be turned into a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedRangeKind {
    /// An opening `[` with no closing `]` after it
    Unterminated,
    /// Fewer than the two required comma-separated tokens
    TooFewTokens(usize),
    /// A token that is not a plain decimal literal
    InvalidNumber(String),
    /// Increment of zero or below; the sweep would never finish
    NonPositiveIncrement(String),
}

impl std::fmt::Display for MalformedRangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedRangeKind::Unterminated => write!(f, "missing closing ']'"),
            MalformedRangeKind::TooFewTokens(n) => {
                write!(f, "expected at least 2 comma-separated values, found {n}")
            }
            MalformedRangeKind::InvalidNumber(token) => {
                write!(f, "'{token}' is not a plain decimal number")
            }
            MalformedRangeKind::NonPositiveIncrement(token) => {
                write!(f, "increment '{token}' must be greater than zero")
            }
        }
    }
}

/// A bracket expression in a template value that is not a valid sweep range.
///
/// Fatal for the template it was found in: nothing is generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed range '{raw}' in property '{property}': {kind}")]
pub struct MalformedRangeError {
    /// Name of the property whose value holds the expression
    pub property: String,
    /// The offending text, brackets included where present
    pub raw: String,
    pub kind: MalformedRangeKind,
}

impl MalformedRangeError {
    pub fn new(property: &str, raw: &str, kind: MalformedRangeKind) -> Self {
        Self {
            property: property.to_string(),
            raw: raw.to_string(),
            kind,
        }
    }
}

/// Errors raised while reading property-file text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertiesErrorKind {
    #[error("property has an empty key")]
    EmptyKey,
    #[error("line continuation at end of input")]
    DanglingContinuation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct PropertiesError {
    /// 1-based line number where the offending property starts
    pub line: usize,
    pub kind: PropertiesErrorKind,
}
