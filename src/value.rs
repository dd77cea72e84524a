//! The contract every value type implements.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// An immutable, self-validating scalar.
///
/// Implementors guarantee:
/// - equality compares the normalized representation and agrees with `Hash`
/// - `Ord` is a total order consistent with equality
/// - `string_value()` parsed back through `FromStr` yields an equal value
///
/// `FromStr::Err` is [`ValueError`](crate::ValueError) for strict types and
/// [`Infallible`](std::convert::Infallible) for vocabularies.
pub trait Value:
    Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    /// Human-readable type name used in errors and logs.
    const TYPE_NAME: &'static str;

    /// Canonical string form.
    fn string_value(&self) -> String {
        self.to_string()
    }
}

/// Parses `input` as `V`, the generic entry point used by the CLI.
pub fn parse_value<V: Value>(input: &str) -> Result<V, V::Err> {
    input.parse::<V>()
}

/// Re-parses the canonical form of `value` and checks it reproduces `value`.
pub fn round_trips<V: Value>(value: &V) -> bool {
    match parse_value::<V>(&value.string_value()) {
        Ok(parsed) => parsed == *value,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gender, Percent, Uuid};

    #[test]
    fn test_round_trips_for_each_shape() {
        assert!(round_trips(&Percent::of(0).unwrap()));
        assert!(round_trips(&Uuid::generate()));
        assert!(round_trips(&Gender::Female));
        assert!(round_trips(&Gender::Unknown));
    }

    #[test]
    fn test_parse_value_dispatches_to_from_str() {
        let percent: Percent = parse_value("42").unwrap();
        assert_eq!(percent.value(), 42);
        assert!(parse_value::<Percent>("4x").is_err());
    }
}
