//! Closed vocabularies.
//!
//! A vocabulary is a fixed, ordered list of upper-case member names. Each
//! member carries an action code equal to its position in the declaration,
//! starting at 0 with the `UNKNOWN` fallback member. Codes are explicit enum
//! discriminants so they stay stable when persisted; new members are
//! appended with the next free code and existing ones are never renumbered.
//!
//! Lookup is lenient. A token that does not name a member, after
//! upper-casing, resolves to `UNKNOWN` instead of failing:
//!
//! ```rust
//! use valobj::Gender;
//!
//! assert_eq!(Gender::of("female").action(), 1);
//! assert_eq!(Gender::of("no such thing"), Gender::Unknown);
//! ```

mod gender;
mod orientation;
mod si_unit;
mod weekday;

pub use gender::Gender;
pub use orientation::SexualOrientation;
pub use si_unit::SiBaseUnit;
pub use weekday::Weekday;

use crate::value::Value;
use std::convert::Infallible;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Shared behavior of closed-vocabulary enums.
pub trait Vocabulary: Value + FromStr<Err = Infallible> + Copy + IntoEnumIterator {
    /// Member returned for unrecognized tokens; always action code 0.
    const FALLBACK: Self;

    /// Stable ordinal code.
    fn action(self) -> u8;

    /// Canonical upper-case member name.
    fn name(self) -> &'static str;

    /// Decodes a persisted action code.
    fn from_action(code: u8) -> Option<Self>;

    /// Resolves `token` case-insensitively, falling back to [`Self::FALLBACK`].
    ///
    /// Surrounding whitespace is not trimmed, so `" MALE"` is unrecognized.
    fn of(token: &str) -> Self {
        let upper = token.to_uppercase();
        match Self::iter().find(|member| member.name() == upper) {
            Some(member) => member,
            None => {
                tracing::debug!(
                    type_name = Self::TYPE_NAME,
                    token,
                    fallback = Self::FALLBACK.name(),
                    "unrecognized vocabulary token"
                );
                Self::FALLBACK
            }
        }
    }

    /// All members in declaration (action code) order.
    fn members() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    fn is_unknown(self) -> bool {
        self == Self::FALLBACK
    }
}

/// Wires a strum-derived `#[repr(u8)]` enum into [`Vocabulary`].
macro_rules! impl_vocabulary {
    ($name:ident, fallback = $fallback:ident, type_name = $type_name:literal) => {
        impl $crate::value::Value for $name {
            const TYPE_NAME: &'static str = $type_name;
        }

        impl $crate::vocabulary::Vocabulary for $name {
            const FALLBACK: Self = $name::$fallback;

            fn action(self) -> u8 {
                self as u8
            }

            fn name(self) -> &'static str {
                self.into()
            }

            fn from_action(code: u8) -> Option<Self> {
                Self::from_repr(code)
            }
        }

        impl $name {
            /// Resolves `token`, returning the fallback member when unrecognized.
            pub fn of(token: &str) -> Self {
                <Self as $crate::vocabulary::Vocabulary>::of(token)
            }

            /// Stable ordinal code of this member.
            pub fn action(self) -> u8 {
                <Self as $crate::vocabulary::Vocabulary>::action(self)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::of(s))
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self::of(token)
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self::of(&token)
            }
        }
    };
}

pub(crate) use impl_vocabulary;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn assert_dense_codes<V: Vocabulary>() {
        let codes: Vec<u8> = V::members().map(|m| m.action()).collect();
        let expected: Vec<u8> = (0..codes.len() as u8).collect();
        assert_eq!(codes, expected, "{} codes are not 0..N-1", V::TYPE_NAME);
        for member in V::members() {
            assert_eq!(V::of(member.name()), member);
            assert_eq!(V::from_action(member.action()), Some(member));
        }
        assert_eq!(V::from_action(codes.len() as u8), None);
    }

    #[test]
    fn test_action_codes_are_dense_for_every_vocabulary() {
        assert_dense_codes::<Gender>();
        assert_dense_codes::<SexualOrientation>();
        assert_dense_codes::<Weekday>();
        assert_dense_codes::<SiBaseUnit>();
    }

    #[test]
    fn test_fallback_is_first_member() {
        assert_eq!(Gender::FALLBACK.action(), 0);
        assert_eq!(SexualOrientation::FALLBACK.action(), 0);
        assert_eq!(Weekday::FALLBACK.action(), 0);
        assert_eq!(SiBaseUnit::FALLBACK.action(), 0);
        assert_eq!(Gender::members().next(), Some(Gender::FALLBACK));
    }

    #[test]
    fn test_names_are_unique_and_upper_case() {
        let names: BTreeSet<&str> = Weekday::members().map(|m| m.name()).collect();
        assert_eq!(names.len(), Weekday::members().count());
        assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_uppercase() || c == '_')));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(Gender::of(" FEMALE"), Gender::Unknown);
        assert_eq!(Gender::of("FEMALE\n"), Gender::Unknown);
        assert!(Gender::of("").is_unknown());
    }

    #[test]
    fn test_upper_casing_is_unicode_aware() {
        // U+017F LATIN SMALL LETTER LONG S upper-cases to 'S'
        assert_eq!(SiBaseUnit::of("ſecond"), SiBaseUnit::Second);
        assert_eq!(Weekday::of("ſunday"), Weekday::Sunday);
        // dotless 'ı' upper-cases to plain 'I'
        assert_eq!(Gender::of("dıverse"), Gender::Diverse);
    }
}
