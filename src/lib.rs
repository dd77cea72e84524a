//! Self-validating immutable value types.
//!
//! Every type here validates once, at construction, and then guarantees its
//! invariant for its whole lifetime:
//! - [`Percent`], [`Ipv4Mask`], [`Ipv6Mask`]: integers in a closed range
//! - [`Uuid`]: hyphenated 36-character identifiers, stored lower-case
//! - [`Gender`], [`SexualOrientation`], [`Weekday`], [`SiBaseUnit`]: closed
//!   vocabularies with stable action codes
//!
//! Numeric and identifier types are strict and return [`ValueError`];
//! vocabularies are lenient and map unrecognized tokens to `UNKNOWN`.

pub mod bounded;
pub mod cli;
pub mod config;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod value;
pub mod vocabulary;

pub use bounded::{Ipv4Mask, Ipv6Mask, Percent};
pub use config::{CliArgs, CliConfig, Command, OutputFormat};
pub use error::{ErrorKind, ValueError, ValueResult};
pub use identifier::Uuid;
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use value::Value;
pub use vocabulary::{Gender, SexualOrientation, SiBaseUnit, Vocabulary, Weekday};
