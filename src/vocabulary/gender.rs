use super::impl_vocabulary;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Gender classification.
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
pub enum Gender {
    Unknown = 0,
    Female = 1,
    Male = 2,
    Diverse = 3,
}

impl_vocabulary!(Gender, fallback = Unknown, type_name = "Gender");
