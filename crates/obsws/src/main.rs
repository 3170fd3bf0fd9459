mod cli;
mod commands;
mod config;
mod error;
mod output;
mod style;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use obsws_core::Session;

use crate::cli::{Cli, Command, LogLevel};
use crate::commands::Context;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // Completions need neither config nor a connection
    if let Command::Completions(args) = cli.command {
        use clap::CommandFactory;
        use clap_complete::generate;

        let mut cmd = Cli::command();
        generate(args.shell, &mut cmd, "obsws-cli", &mut std::io::stdout());
        return Ok(());
    }

    let cfg = obsws_config::load_config()?;
    let settings = config::resolve(&cli.global, &cfg)?;
    init_tracing(settings.loglevel);

    let session = Session::connect(&settings.connection).await?;
    let ctx = Context::new(settings.style);

    tracing::debug!(command = ?cli.command, "dispatching command");
    let result = commands::dispatch(cli.command, &session, &ctx).await;
    session.close().await;

    output::print_output(&result?);
    Ok(())
}
