//! CLI entry and dispatch.
//!
//! The default invocation runs the interactive TUI; `whoami` and `logout`
//! exercise the same identity client headlessly.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use schoolhub_core::config::Config;
use schoolhub_core::identity::{HttpIdentityClient, IdentityClient};
use schoolhub_core::logging;

#[derive(Parser)]
#[command(name = "schoolhub")]
#[command(version = "0.1")]
#[command(about = "Terminal client for the SchoolHub school directory")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the signed-in account, if any
    Whoami,
    /// End the current session
    Logout,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;
    let client: Arc<dyn IdentityClient> =
        Arc::new(HttpIdentityClient::new(&config.provider).context("build identity client")?);

    match cli.command {
        None => {
            // The TUI owns the terminal, so logs go to a file.
            let _guard = logging::init().context("init logging")?;
            tracing::info!("starting interactive UI");
            schoolhub_tui::run_tui(client).await
        }
        Some(Commands::Whoami) => whoami(client.as_ref()).await,
        Some(Commands::Logout) => logout(client.as_ref()).await,
    }
}

async fn whoami(client: &dyn IdentityClient) -> Result<()> {
    match client.current_user().await? {
        Some(user) => println!("{}", user.email),
        None => println!("Not signed in."),
    }
    Ok(())
}

async fn logout(client: &dyn IdentityClient) -> Result<()> {
    client.sign_out().await?;
    println!("Signed out.");
    Ok(())
}
