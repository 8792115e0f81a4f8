mod config;
mod content;
mod core;
mod effect;
mod render;
mod server;

use anyhow::{Context, Result};
use argh::FromArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::core::State;
use crate::server::Server;

/// Desktop window manager driven by JSON-lines commands on stdin.
#[derive(FromArgs)]
struct Args {
    /// config file (default: <config dir>/fusuma/config.json)
    #[argh(option)]
    config: Option<PathBuf>,

    /// viewport width in pixels
    #[argh(option)]
    width: Option<u32>,

    /// viewport height in pixels
    #[argh(option)]
    height: Option<u32>,
}

fn main() -> Result<()> {
    // stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.viewport.width = width;
    }
    if let Some(height) = args.height {
        config.viewport.height = height;
    }

    let viewport = config.viewport();
    tracing::info!(
        "fusuma starting ({}x{}, taskbar {})",
        viewport.width,
        viewport.height,
        viewport.taskbar_height
    );

    let state = State::new(config.catalog(), viewport);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;

    runtime.block_on(Server::new(state).run(
        tokio::io::BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    ))?;

    tracing::info!("fusuma stopped");
    Ok(())
}
