use super::impl_vocabulary;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Day of the week, Monday first.
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
pub enum Weekday {
    Unknown = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl_vocabulary!(Weekday, fallback = Unknown, type_name = "Weekday");

impl Weekday {
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// The matching `chrono` weekday; `None` for `UNKNOWN`.
    pub fn to_chrono(self) -> Option<chrono::Weekday> {
        match self {
            Weekday::Unknown => None,
            Weekday::Monday => Some(chrono::Weekday::Mon),
            Weekday::Tuesday => Some(chrono::Weekday::Tue),
            Weekday::Wednesday => Some(chrono::Weekday::Wed),
            Weekday::Thursday => Some(chrono::Weekday::Thu),
            Weekday::Friday => Some(chrono::Weekday::Fri),
            Weekday::Saturday => Some(chrono::Weekday::Sat),
            Weekday::Sunday => Some(chrono::Weekday::Sun),
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_iso_numbering() {
        assert_eq!(Weekday::of("monday").action(), 1);
        assert_eq!(Weekday::of("SUNDAY").action(), 7);
        assert_eq!(Weekday::of("Mon"), Weekday::Unknown);
    }

    #[test]
    fn test_chrono_conversion() {
        for day in [
            chrono::Weekday::Mon,
            chrono::Weekday::Wed,
            chrono::Weekday::Sun,
        ] {
            let ours = Weekday::from(day);
            assert_eq!(ours.to_chrono(), Some(day));
            assert_eq!(u32::from(ours.action()), day.number_from_monday());
        }
        assert_eq!(Weekday::Unknown.to_chrono(), None);
    }

    #[test]
    fn test_weekend() {
        assert!(Weekday::Saturday.is_weekend());
        assert!(Weekday::Sunday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
        assert!(!Weekday::Unknown.is_weekend());
    }
}
