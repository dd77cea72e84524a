use super::{Vocabulary, impl_vocabulary};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// The seven SI base units.
///
/// Each unit also carries its symbol, which plays no part in equality,
/// ordering or action codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    FromRepr,
)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum SiBaseUnit {
    Unknown = 0,
    Second = 1,
    Metre = 2,
    Kilogram = 3,
    Ampere = 4,
    Kelvin = 5,
    Mole = 6,
    Candela = 7,
}

impl_vocabulary!(SiBaseUnit, fallback = Unknown, type_name = "SIBaseUnit");

impl SiBaseUnit {
    /// Unit symbol, e.g. `"kg"`; empty for `UNKNOWN`.
    pub fn symbol(self) -> &'static str {
        match self {
            SiBaseUnit::Unknown => "",
            SiBaseUnit::Second => "s",
            SiBaseUnit::Metre => "m",
            SiBaseUnit::Kilogram => "kg",
            SiBaseUnit::Ampere => "A",
            SiBaseUnit::Kelvin => "K",
            SiBaseUnit::Mole => "mol",
            SiBaseUnit::Candela => "cd",
        }
    }

    /// Exact, case-sensitive symbol lookup (`"K"` is kelvin, `"k"` is nothing).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        if symbol.is_empty() {
            return None;
        }
        Self::members().find(|unit| unit.symbol() == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(SiBaseUnit::of("kilogram").symbol(), "kg");
        assert_eq!(SiBaseUnit::of("METRE").symbol(), "m");
        assert_eq!(SiBaseUnit::of("second").symbol(), "s");
        assert_eq!(SiBaseUnit::of("furlong").symbol(), "");
    }

    #[test]
    fn test_symbol_does_not_affect_lookup() {
        assert_eq!(SiBaseUnit::of("kg"), SiBaseUnit::Unknown);
        assert_eq!(SiBaseUnit::from_symbol("kg"), Some(SiBaseUnit::Kilogram));
        assert_eq!(SiBaseUnit::from_symbol("K"), Some(SiBaseUnit::Kelvin));
        assert_eq!(SiBaseUnit::from_symbol("k"), None);
        assert_eq!(SiBaseUnit::from_symbol(""), None);
    }

    #[test]
    fn test_symbols_are_unique() {
        let mut symbols: Vec<&str> = SiBaseUnit::members().map(|u| u.symbol()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), SiBaseUnit::COUNT);
    }
}
