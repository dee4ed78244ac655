//! A single sweep range and its counter.

use std::ops::Range;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, ToPrimitive};

use crate::decimal;
use crate::error::{MalformedRangeError, MalformedRangeKind};

/// One bracketed range found in a template value, together with the value
/// it currently stands for.
///
/// The counter only ever holds `min` or `min + k * increment` for some
/// non-negative `k`, and never exceeds `max` unless it is `min` itself.
/// A range with `min > max` therefore always contributes exactly one value,
/// `min`, to every combination.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSpec {
    pub min: BigDecimal,
    pub max: BigDecimal,
    pub increment: BigDecimal,
    /// Byte span of the bracket expression in the original value, brackets included
    pub span: Range<usize>,
    counter: BigDecimal,
}

impl SweepSpec {
    /// Parse the text between a `[` and its `]`.
    ///
    /// Accepts `min,max` or `min,max,increment`; increment defaults to `1`.
    /// Tokens past the third are ignored. `property` is only used to label
    /// the error.
    pub fn parse(
        property: &str,
        inner: &str,
        span: Range<usize>,
    ) -> Result<Self, MalformedRangeError> {
        let malformed =
            |kind: MalformedRangeKind| MalformedRangeError::new(property, &format!("[{inner}]"), kind);

        let tokens: Vec<&str> = inner.split(',').map(str::trim).collect();
        if tokens.len() < 2 {
            let found = if inner.trim().is_empty() { 0 } else { 1 };
            return Err(malformed(MalformedRangeKind::TooFewTokens(found)));
        }

        let number = |token: &str| {
            decimal::parse_plain(token)
                .ok_or_else(|| malformed(MalformedRangeKind::InvalidNumber(token.to_string())))
        };

        let min = number(tokens[0])?;
        let max = number(tokens[1])?;
        let increment = match tokens.get(2) {
            Some(&token) => {
                let increment = number(token)?;
                if increment <= BigDecimal::from(0) {
                    return Err(malformed(MalformedRangeKind::NonPositiveIncrement(
                        token.to_string(),
                    )));
                }
                increment
            }
            None => BigDecimal::from(1),
        };

        Ok(Self {
            counter: min.clone(),
            min,
            max,
            increment,
            span,
        })
    }

    /// Current value of this range
    pub fn counter(&self) -> &BigDecimal {
        &self.counter
    }

    /// Current value in the plain form used for substitution
    pub fn counter_text(&self) -> String {
        decimal::to_plain(&self.counter)
    }

    /// Step the counter by one increment if that stays within `max`.
    ///
    /// Returns false, leaving the counter untouched, when the next value
    /// would overshoot.
    pub fn try_step(&mut self) -> bool {
        let next = &self.counter + &self.increment;
        if next <= self.max {
            self.counter = next;
            true
        } else {
            false
        }
    }

    /// Put the counter back to `min`
    pub fn reset(&mut self) {
        self.counter = self.min.clone();
    }

    /// Number of distinct values this range produces.
    ///
    /// Returns `None` if the count does not fit in a `u64`.
    pub fn value_count(&self) -> Option<u64> {
        if self.min > self.max {
            return Some(1);
        }
        // BigDecimal division rounds, so floor on integer mantissas
        let width = &self.max - &self.min;
        let scale = width.fractional_digit_count().max(self.increment.fractional_digit_count());
        let steps = mantissa(&width, scale) / mantissa(&self.increment, scale);
        steps.to_u64()?.checked_add(1)
    }
}

/// Integer mantissa of `value` once rescaled to `scale` fractional digits.
///
/// `scale` must be at least the scale of `value`, so no digit is lost.
fn mantissa(value: &BigDecimal, scale: i64) -> BigInt {
    let (digits, _) = value.with_scale(scale).into_bigint_and_exponent();
    digits
}
