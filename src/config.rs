use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_GENERATE_COUNT: usize = 1;
pub const MAX_GENERATE_COUNT: usize = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Value types accepted by `valobj parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    Percent,
    #[value(name = "ipv4-mask")]
    Ipv4Mask,
    #[value(name = "ipv6-mask")]
    Ipv6Mask,
    Uuid,
    Gender,
    SexualOrientation,
    Weekday,
    SiUnit,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_else(|| format!("{self:?}"));
        write!(f, "{name}")
    }
}

/// Vocabularies accepted by `valobj list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VocabularyKind {
    Gender,
    SexualOrientation,
    Weekday,
    SiUnit,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "valobj",
    about = "Validate, generate and list self-validating values",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        env = "VALOBJ_CONFIG",
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "VALOBJ_OUTPUT",
        value_enum,
        value_name = "FORMAT",
        help = "Output format (text or json)",
        global = true
    )]
    pub output: Option<OutputFormat>,

    #[arg(short, long, help = "Log rejected input at debug level", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate INPUT as KIND and print its canonical form
    Parse {
        #[arg(value_enum)]
        kind: ValueKind,
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Print freshly generated random UUIDs
    Generate {
        #[arg(short = 'n', long, value_name = "N")]
        count: Option<usize>,
    },
    /// Print every member of a vocabulary with its action code
    List {
        #[arg(value_enum)]
        vocabulary: VocabularyKind,
    },
}

/// Settings resolved from flags, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub output: OutputFormat,
    pub generate_count: usize,
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            generate_count: DEFAULT_GENERATE_COUNT,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Merges CLI flags (including their env fallbacks) over the config file
    /// over built-in defaults.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let file_config = if let Some(path) = args.config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            output: file_output,
            generate_count: file_generate_count,
            verbose: file_verbose,
        } = file_config;

        let output = args.output.or(file_output).unwrap_or_default();

        let cli_count = match &args.command {
            Command::Generate { count } => *count,
            _ => None,
        };
        let generate_count = cli_count
            .or(file_generate_count)
            .unwrap_or(DEFAULT_GENERATE_COUNT);

        let verbose = args.verbose || file_verbose.unwrap_or(false);

        let config = Self {
            output,
            generate_count,
            verbose,
        };
        // the count only applies to `generate`
        if matches!(args.command, Command::Generate { .. }) {
            config.validate()?;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            (1..=MAX_GENERATE_COUNT).contains(&self.generate_count),
            "generate count {} is outside valid range [1, {}]",
            self.generate_count,
            MAX_GENERATE_COUNT
        );
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    output: Option<OutputFormat>,
    generate_count: Option<usize>,
    verbose: Option<bool>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
