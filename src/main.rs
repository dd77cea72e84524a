use clap::Parser;
use valobj::{CliArgs, CliConfig, LoggingConfig, cli, init_logging};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = CliConfig::from_args(&args)?;

    let logging_config = LoggingConfig::from_env().with_verbose(config.verbose);
    init_logging(&logging_config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::execute(&args.command, &config, &mut out)
}
