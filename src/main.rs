mod error;
mod github;
mod logging;
mod unsubscriber;

use crate::github::prelude::*;
use crate::unsubscriber::Unsubscriber;
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

#[derive(clap::Parser, Debug)]
#[command(
    version,
    about = "Unsubscribe from notifications of every watched repository"
)]
struct Cli {
    #[arg(
        short,
        long,
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        help = "Personal access token"
    )]
    token: Option<String>,
    #[arg(
        short,
        long,
        value_name = "LOGIN",
        help = "Log in with a username and prompted password instead of a token"
    )]
    user: Option<String>,
    #[arg(short, long, help = "Don't make any subscription changes")]
    simulate: bool,
    #[arg(
        long,
        value_name = "URL",
        env = "GITHUB_URL",
        default_value = "https://api.github.com",
        help = "GitHub API url (such as your enterprise GitHub url)"
    )]
    hub_url: url::Url,
    #[arg(long, value_name = "FILTER", default_value = "info", help = "Log filter")]
    log_level: String,
}

#[derive(Debug)]
struct RunConfig {
    simulate: bool,
    hub_url: url::Url,
    credential: Credential,
}

impl RunConfig {
    fn resolve(cli: Cli) -> anyhow::Result<Self> {
        let host = host_from_hub_url(&cli.hub_url);
        let credential =
            resolve_credential(cli.user.as_deref(), cli.token.as_deref(), host.as_deref())
                .context("unable to resolve credentials")?;
        Ok(Self {
            simulate: cli.simulate,
            hub_url: cli.hub_url,
            credential,
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let simulate = cli.simulate;

    if let Err(err) = logging::init(&cli.log_level) {
        eprintln!("failed to initialise logging: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match failed_repository(&err) {
                Some((owner, repo)) => tracing::error!(
                    simulation = simulate,
                    owner,
                    repo,
                    error = %format!("{err:#}"),
                    "error unsubscribing"
                ),
                None => tracing::error!(error = %format!("{err:#}"), "unsubscribe run failed"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Owner and name of the repository whose unsubscribe call failed, if any.
fn failed_repository(err: &anyhow::Error) -> Option<(&str, &str)> {
    match err.downcast_ref::<error::Error>()? {
        error::Error::Unsubscribe { owner, repo, .. } => Some((owner.as_str(), repo.as_str())),
        _ => None,
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = RunConfig::resolve(cli)?;
    let client = Client::new(&config.hub_url, config.credential)?;

    let report = Unsubscriber::new(&client, config.simulate).run().await?;
    tracing::info!(
        simulation = config.simulate,
        pages = report.pages,
        repositories = report.visited,
        unsubscribed = report.unsubscribed,
        "finished"
    );

    Ok(())
}
