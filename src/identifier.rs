//! UUID value type.
//!
//! Accepts only the 36-character hyphenated layout
//! `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, in any letter case, and always
//! renders lower-case. Braced, URN and 32-digit simple forms are rejected.

use crate::error::{ValueError, ValueResult};
use crate::value::Value;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical text length including hyphens.
pub const UUID_TEXT_LEN: usize = 36;

/// Character offsets of the four hyphens.
pub const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// A universally unique identifier, normalized at construction.
///
/// # Example
/// ```rust
/// use valobj::Uuid;
///
/// let id = Uuid::parse("A5409F2D-983D-438C-BFDD-308FEFF7FB1F")?;
/// assert_eq!(id.to_string(), "a5409f2d-983d-438c-bfdd-308feff7fb1f");
///
/// let fresh = Uuid::generate();
/// assert_eq!(fresh.version(), Some(4));
/// # Ok::<(), valobj::ValueError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid(uuid::Uuid);

impl Uuid {
    /// The all-zero identifier.
    pub const NIL: Self = Self(uuid::Uuid::nil());

    /// Generates a random (version 4) identifier from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generates a random identifier from `rng`.
    pub fn generate_with<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Self(uuid::Uuid::from_bytes(mark_random(bytes)))
    }

    /// Parses the hyphenated form, case-insensitively.
    ///
    /// # Errors
    /// Format violation on wrong length, a misplaced or missing hyphen, or a
    /// non-hex digit.
    pub fn parse(input: &str) -> ValueResult<Self> {
        if let Some(reason) = grammar_violation(input) {
            tracing::debug!(input, %reason, "rejected malformed UUID");
            return Err(ValueError::format(Self::TYPE_NAME, input, reason));
        }
        let inner = uuid::Uuid::parse_str(input)
            .map_err(|err| ValueError::format(Self::TYPE_NAME, input, err.to_string()))?;
        Ok(Self(inner))
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Version nibble, `Some(4)` for generated identifiers.
    pub fn version(&self) -> Option<usize> {
        match self.0.get_version_num() {
            0 => None,
            v => Some(v),
        }
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

/// Sets the version-4 and RFC 4122 variant bits on 16 random bytes.
///
/// The high nibble of byte 6 becomes `0100` and the top two bits of byte 8
/// become `10`, leaving 122 random bits.
pub fn mark_random(mut bytes: [u8; 16]) -> [u8; 16] {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

/// Checks the hyphenated grammar, returning why `input` fails it.
///
/// `None` means `input` is 36 characters with hyphens exactly at
/// [`HYPHEN_POSITIONS`] and ASCII hex digits everywhere else.
fn grammar_violation(input: &str) -> Option<String> {
    let len = input.chars().count();
    if len != UUID_TEXT_LEN {
        return Some(format!("expected {UUID_TEXT_LEN} characters, got {len}"));
    }
    input.chars().enumerate().find_map(|(pos, ch)| {
        if HYPHEN_POSITIONS.contains(&pos) {
            (ch != '-').then(|| format!("expected '-' at position {pos}, found '{ch}'"))
        } else {
            (!ch.is_ascii_hexdigit()).then(|| format!("non-hex character '{ch}' at position {pos}"))
        }
    })
}

impl Value for Uuid {
    const TYPE_NAME: &'static str = "UUID";
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Uuid {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uuid {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Uuid> for String {
    fn from(id: Uuid) -> String {
        id.to_string()
    }
}

impl From<Uuid> for uuid::Uuid {
    fn from(id: Uuid) -> uuid::Uuid {
        id.0
    }
}
