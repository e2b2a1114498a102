mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sunco_api::IntegrationClient;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need an API client
        Command::Config(ref args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(ref args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "sunco", &mut std::io::stdout());
            Ok(())
        }

        Command::Integrations(args) => {
            let path = config::config_path(&cli.global);
            let cfg = config::load_config(&path)?;
            let client_config = config::resolve_client_config(&cli.global, &cfg)?;
            tracing::debug!(
                base_url = client_config.base_url(),
                app_id = client_config.app_id(),
                "resolved client config"
            );

            let client = IntegrationClient::from_config(client_config)?;
            commands::integrations::handle(&client, args, &cli.global).await
        }
    }
}
