//! Full-screen TUI for the SchoolHub directory client.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod pages;
pub mod render;
pub mod routes;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};
use std::sync::Arc;

use anyhow::Result;
pub use runtime::TuiRuntime;
use schoolhub_core::identity::IdentityClient;

/// Runs the interactive directory UI until the user quits.
pub async fn run_tui(client: Arc<dyn IdentityClient>) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("The interactive UI requires a terminal.");
    }

    let mut runtime = TuiRuntime::new(client)?;
    runtime.run()?;
    Ok(())
}
