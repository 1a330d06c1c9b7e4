mod cli;
mod commands;
mod output;

use std::error::Error;
use std::io;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};
use gh_issues::client::GitHubClient;
use gh_issues::config::Config;
use gh_issues::error::Result;
use gh_issues::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "gh-issues", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        Commands::Search(args) => {
            let config = Config::load()?;
            let client = GitHubClient::with_timeout(
                config.token()?,
                config.graphql_endpoint()?,
                Some(Duration::from_secs(config.timeout_secs())),
            )?;

            commands::search::run(&client, &config, args).await?;
        }
    }

    Ok(())
}
