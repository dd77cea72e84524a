//! Bounded numeric values.
//!
//! Each type wraps an integer constrained to a closed interval `[MIN, MAX]`.
//! Construction is the only validation point:
//!
//! ```rust
//! use valobj::{Ipv6Mask, Percent};
//!
//! let half = Percent::of(50)?;
//! assert_eq!(half.to_string(), "50");
//!
//! let mask: Ipv6Mask = "64".parse()?;
//! assert_eq!(mask.length(), 64);
//!
//! assert!(Percent::of(101).unwrap_err().is_range());
//! assert!(Percent::parse("fifty").unwrap_err().is_format());
//! # Ok::<(), valobj::ValueError>(())
//! ```

use crate::error::{ValueError, ValueResult};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Checks `value` against the closed interval `[min, max]`.
pub(crate) fn check_range(
    type_name: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> ValueResult<i64> {
    if value < min || value > max {
        tracing::debug!(type_name, value, min, max, "rejected out-of-range value");
        return Err(ValueError::OutOfRange {
            type_name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Parses a decimal integer without trimming.
pub(crate) fn parse_integer(type_name: &'static str, input: &str) -> ValueResult<i64> {
    input.parse::<i64>().map_err(|err| {
        tracing::debug!(type_name, input, %err, "rejected non-numeric input");
        ValueError::format(type_name, input, format!("not an integer: {err}"))
    })
}

/// Declares a bounded numeric newtype.
///
/// The generated type stores `$repr`, validates through `of`/`parse`, and
/// serializes as a plain number that is re-validated on deserialization.
macro_rules! bounded_value {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) in $min:literal ..= $max:literal as $type_name:literal;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        $vis struct $name($repr);

        impl $name {
            /// Smallest accepted value (inclusive).
            pub const MIN: $repr = $min;
            /// Largest accepted value (inclusive).
            pub const MAX: $repr = $max;

            /// Creates a value, failing with a range violation outside `[MIN, MAX]`.
            pub fn of(value: i64) -> ValueResult<Self> {
                let checked = check_range(
                    <Self as Value>::TYPE_NAME,
                    value,
                    i64::from(Self::MIN),
                    i64::from(Self::MAX),
                )?;
                // In range, so the narrowing cast is lossless.
                Ok(Self(checked as $repr))
            }

            /// Parses a decimal string.
            ///
            /// # Errors
            /// Format violation if `input` is not an integer, range violation
            /// if it is one outside `[MIN, MAX]`.
            pub fn parse(input: &str) -> ValueResult<Self> {
                Self::of(parse_integer(<Self as Value>::TYPE_NAME, input)?)
            }

            /// Returns the underlying integer.
            pub fn value(self) -> $repr {
                self.0
            }
        }

        impl Value for $name {
            const TYPE_NAME: &'static str = $type_name;
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValueError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::of(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                i64::from(value.0)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> $repr {
                value.0
            }
        }
    };
}

bounded_value! {
    /// A whole percentage in `[0, 100]`.
    pub struct Percent(u8) in 0..=100 as "Percent";
}

bounded_value! {
    /// An IPv4 prefix length in `[0, 32]`.
    pub struct Ipv4Mask(u8) in 0..=32 as "IPv4Mask";
}

bounded_value! {
    /// An IPv6 prefix length in `[0, 128]`.
    pub struct Ipv6Mask(u8) in 0..=128 as "IPv6Mask";
}

impl Percent {
    /// The percentage as a ratio in `[0.0, 1.0]`.
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Ipv4Mask {
    /// Prefix length in bits.
    pub fn length(self) -> u8 {
        self.0
    }

    /// Dotted netmask, e.g. `/24` gives `255.255.255.0`.
    pub fn netmask(self) -> Ipv4Addr {
        let bits = u32::MAX
            .checked_shl(32 - u32::from(self.0))
            .unwrap_or(0);
        Ipv4Addr::from(bits)
    }
}

impl Ipv6Mask {
    /// Prefix length in bits.
    pub fn length(self) -> u8 {
        self.0
    }

    /// Netmask address, e.g. `/64` gives `ffff:ffff:ffff:ffff::`.
    pub fn netmask(self) -> Ipv6Addr {
        let bits = u128::MAX
            .checked_shl(128 - u32::from(self.0))
            .unwrap_or(0);
        Ipv6Addr::from(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_percent_bounds_are_inclusive() {
        assert_eq!(Percent::of(0).unwrap().value(), 0);
        assert_eq!(Percent::of(100).unwrap().value(), 100);
        assert_eq!(Percent::of(50).unwrap().string_value(), "50");
    }

    #[test]
    fn test_percent_out_of_range() {
        let err = Percent::of(101).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            err,
            ValueError::OutOfRange {
                type_name: "Percent",
                value: 101,
                min: 0,
                max: 100,
            }
        );
        assert!(Percent::of(-1).unwrap_err().is_range());
        assert!(Percent::of(i64::MIN).unwrap_err().is_range());
        assert!(Percent::of(i64::MAX).unwrap_err().is_range());
    }

    #[test]
    fn test_parse_distinguishes_format_from_range() {
        assert!(Percent::parse("abc").unwrap_err().is_format());
        assert!(Percent::parse("").unwrap_err().is_format());
        assert!(Percent::parse("5.5").unwrap_err().is_format());
        assert!(Percent::parse(" 5").unwrap_err().is_format());
        assert!(Percent::parse("99999999999999999999").unwrap_err().is_format());
        assert!(Percent::parse("101").unwrap_err().is_range());
        assert!(Percent::parse("-1").unwrap_err().is_range());
    }

    #[test]
    fn test_parse_normalizes_canonical_form() {
        assert_eq!(Percent::parse("007").unwrap().string_value(), "7");
        assert_eq!(Percent::parse("+42").unwrap().string_value(), "42");
        assert_eq!(Percent::parse("-0").unwrap().string_value(), "0");
    }

    #[test]
    fn test_ipv6_mask_scenarios() {
        assert_eq!(Ipv6Mask::of(128).unwrap().length(), 128);
        assert!(Ipv6Mask::of(129).unwrap_err().is_range());
        assert_eq!(Ipv6Mask::of(0).unwrap().length(), 0);
    }

    #[test]
    fn test_ipv6_netmask() {
        assert_eq!(Ipv6Mask::of(0).unwrap().netmask(), Ipv6Addr::UNSPECIFIED);
        assert_eq!(
            Ipv6Mask::of(64).unwrap().netmask(),
            "ffff:ffff:ffff:ffff::".parse::<Ipv6Addr>().unwrap()
        );
        assert_eq!(
            Ipv6Mask::of(128).unwrap().netmask(),
            Ipv6Addr::from(u128::MAX)
        );
    }

    #[test]
    fn test_ipv4_mask() {
        assert_eq!(Ipv4Mask::of(24).unwrap().netmask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(Ipv4Mask::of(0).unwrap().netmask(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(Ipv4Mask::of(32).unwrap().netmask(), Ipv4Addr::BROADCAST);
        assert!(Ipv4Mask::of(33).unwrap_err().is_range());
    }

    #[test]
    fn test_ordering_is_numeric() {
        let low = Percent::of(9).unwrap();
        let high = Percent::of(10).unwrap();
        assert!(low < high);
        assert_eq!(low.cmp(&low), std::cmp::Ordering::Equal);
        // "9" > "10" as strings, so this would fail on a text comparison
        assert!(low.string_value() > high.string_value());
    }

    #[test]
    fn test_percent_as_fraction() {
        assert_eq!(Percent::of(25).unwrap().as_fraction(), 0.25);
        assert_eq!(Percent::of(100).unwrap().as_fraction(), 1.0);
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let percent = Percent::of(75).unwrap();
        let json = serde_json::to_string(&percent).unwrap();
        assert_eq!(json, "75");
        assert_eq!(serde_json::from_str::<Percent>(&json).unwrap(), percent);
        assert!(serde_json::from_str::<Percent>("101").is_err());
        assert!(serde_json::from_str::<Ipv6Mask>("-3").is_err());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Percent::TYPE_NAME, "Percent");
        assert_eq!(Ipv6Mask::TYPE_NAME, "IPv6Mask");
        assert_eq!(Ipv4Mask::TYPE_NAME, "IPv4Mask");
    }
}
