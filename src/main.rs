use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use mdmirror::cli::{handle_error, Args, CliConfig, Reporter};
use mdmirror::Mirror;

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            handle_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;
    let reporter = Reporter::new(config.mirror_config.verbosity);
    reporter.detail(&format!(
        "Mirroring {} into {}",
        config.input_description(),
        config.output_description()
    ));

    let stats = Mirror::new(config.mirror_config.clone())
        .run()
        .with_context(|| {
            format!(
                "failed to mirror {} into {}",
                config.input_description(),
                config.output_description()
            )
        })?;

    reporter.success(&stats.summary());
    Ok(())
}
