// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use podpilot::config::Config;
use podpilot::PodClient;

#[derive(Parser)]
#[command(name = "podpilot")]
#[command(about = "Inspect or restart a pod in the current namespace", long_about = None)]
#[command(version)]
struct Cli {
    /// Namespace to use instead of POD_NAMESPACE or the service account namespace
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a JSON summary of a pod
    Info {
        /// Pod name, defaults to this host's name
        name: Option<String>,
    },

    /// Delete a pod so its controller recreates it
    Restart {
        /// Pod name, defaults to this host's name
        name: Option<String>,

        /// Wait until the deleted pod is gone
        #[arg(long)]
        wait: bool,

        /// Seconds to wait, overrides RESTART_WAIT_TIMEOUT_SECS
        #[arg(long)]
        timeout: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if cli.namespace.is_some() {
        config.namespace = cli.namespace;
    }

    let pods = PodClient::try_from_config(&config).await?;

    match cli.command {
        Commands::Info { name } => {
            let pod = pods.pod(name.as_deref()).await?;
            let json = serde_json::to_string_pretty(&pod.info())
                .context("Failed to serialize pod info")?;
            println!("{}", json);
        }
        Commands::Restart {
            name,
            wait,
            timeout,
        } => {
            if wait {
                let secs = timeout.unwrap_or(config.restart_wait_timeout_secs);
                pods.restart_pod_and_wait(name.as_deref(), Duration::from_secs(secs))
                    .await?;
            } else {
                pods.restart_pod(name.as_deref()).await?;
            }
            info!("Restart requested in namespace {}", pods.namespace());
        }
    }

    Ok(())
}
