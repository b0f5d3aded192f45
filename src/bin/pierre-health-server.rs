// ABOUTME: Server binary for the Pierre health calculator API
// ABOUTME: Loads environment configuration, installs logging, and serves HTTP until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pierre Health Server Binary
//!
//! Configuration comes from environment variables; `--host` and `--http-port`
//! override the listener.

use anyhow::Result;
use clap::Parser;
use pierre_health_server::{
    config::ServerConfig,
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pierre-health-server")]
#[command(about = "Pierre health calculators - HTTP API for calculators, search, and contact")]
pub struct Args {
    /// Override HTTP bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http.port = http_port;
    }

    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config));
    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
