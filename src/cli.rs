//! Command execution for the `valobj` binary.
//!
//! Commands write to any `io::Write` so they can be exercised without a
//! process boundary.

use crate::config::{CliConfig, Command, OutputFormat, ValueKind, VocabularyKind};
use crate::error::ValueError;
use crate::value::Value;
use crate::vocabulary::Vocabulary;
use crate::{Gender, Ipv4Mask, Ipv6Mask, Percent, SexualOrientation, SiBaseUnit, Uuid, Weekday};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// What `parse` and `list` report about a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub kind: &'static str,
    pub canonical: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
}

impl Description {
    fn strict<V: Value>(value: &V) -> Self {
        Self {
            kind: V::TYPE_NAME,
            canonical: value.string_value(),
            action: None,
            symbol: None,
        }
    }

    fn member<V: Vocabulary>(member: V) -> Self {
        Self {
            kind: V::TYPE_NAME,
            canonical: member.name().to_string(),
            action: Some(member.action()),
            symbol: None,
        }
    }

    fn unit(unit: SiBaseUnit) -> Self {
        Self {
            symbol: Some(unit.symbol()).filter(|symbol| !symbol.is_empty()),
            ..Self::member(unit)
        }
    }
}

/// Validates `input` as `kind`.
///
/// Vocabulary kinds never fail; unrecognized tokens describe the fallback
/// member.
pub fn describe(kind: ValueKind, input: &str) -> Result<Description, ValueError> {
    let description = match kind {
        ValueKind::Percent => Description::strict(&Percent::parse(input)?),
        ValueKind::Ipv4Mask => Description::strict(&Ipv4Mask::parse(input)?),
        ValueKind::Ipv6Mask => Description::strict(&Ipv6Mask::parse(input)?),
        ValueKind::Uuid => Description::strict(&Uuid::parse(input)?),
        ValueKind::Gender => Description::member(Gender::of(input)),
        ValueKind::SexualOrientation => Description::member(SexualOrientation::of(input)),
        ValueKind::Weekday => Description::member(Weekday::of(input)),
        ValueKind::SiUnit => Description::unit(SiBaseUnit::of(input)),
    };
    Ok(description)
}

/// All members of `vocabulary` in action-code order.
pub fn list_members(vocabulary: VocabularyKind) -> Vec<Description> {
    match vocabulary {
        VocabularyKind::Gender => Gender::members().map(Description::member).collect(),
        VocabularyKind::SexualOrientation => SexualOrientation::members()
            .map(Description::member)
            .collect(),
        VocabularyKind::Weekday => Weekday::members().map(Description::member).collect(),
        VocabularyKind::SiUnit => SiBaseUnit::members().map(Description::unit).collect(),
    }
}

/// Runs `command`, writing results to `out`.
pub fn execute<W: Write>(command: &Command, config: &CliConfig, out: &mut W) -> Result<()> {
    match command {
        Command::Parse { kind, input } => {
            let description = describe(*kind, input)
                .with_context(|| format!("failed to parse {kind} input"))?;
            match config.output {
                OutputFormat::Text => writeln!(out, "{}", description.canonical)?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&description)?)?,
            }
        }
        Command::Generate { .. } => {
            let ids: Vec<String> = (0..config.generate_count)
                .map(|_| Uuid::generate().string_value())
                .collect();
            tracing::debug!(count = ids.len(), "generated identifiers");
            match config.output {
                OutputFormat::Text => {
                    for id in &ids {
                        writeln!(out, "{id}")?;
                    }
                }
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&ids)?)?,
            }
        }
        Command::List { vocabulary } => {
            let members = list_members(*vocabulary);
            match config.output {
                OutputFormat::Text => {
                    for member in &members {
                        let action = member.action.unwrap_or_default();
                        match member.symbol {
                            Some(symbol) => {
                                writeln!(out, "{action}\t{}\t{symbol}", member.canonical)?
                            }
                            None => writeln!(out, "{action}\t{}", member.canonical)?,
                        }
                    }
                }
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&members)?)?,
            }
        }
    }
    Ok(())
}
