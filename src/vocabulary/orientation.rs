use super::impl_vocabulary;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Sexual orientation classification.
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
pub enum SexualOrientation {
    Unknown = 0,
    Heterosexual = 1,
    Homosexual = 2,
    Bisexual = 3,
    Asexual = 4,
    Pansexual = 5,
}

impl_vocabulary!(
    SexualOrientation,
    fallback = Unknown,
    type_name = "SexualOrientation"
);
