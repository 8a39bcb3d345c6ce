// ABOUTME: Main entry point for the lin binary
// ABOUTME: Parses arguments, configures logging, dispatches and maps failures to exit code 1

use anyhow::Result;
use clap::Parser;
use linear_sdk::LinearError;

use lin_cli::cli::Cli;
use lin_cli::cli_output::CliOutput;
use lin_cli::commands;
use lin_cli::context::AppContext;

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // RUST_LOG, when set, overrides the flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

async fn run(cli: Cli, output: CliOutput) -> Result<()> {
    let mut ctx = AppContext::from_environment(cli.workspace, output)?;
    commands::run(&mut ctx, cli.command).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let output = CliOutput::new(cli.no_color);

    if let Err(err) = run(cli, output).await {
        output.error(&format!("{:#}", err));
        if let Some(help) = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<LinearError>())
            .and_then(LinearError::help_text)
        {
            output.hint(&help);
        }
        std::process::exit(1);
    }
}
