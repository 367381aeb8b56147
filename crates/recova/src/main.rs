// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recova - outbound debt-collection call orchestrator.
//!
//! This is the binary entry point for the Recova service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Recova - outbound debt-collection call orchestrator.
#[derive(Parser, Debug)]
#[command(name = "recova", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the call-orchestrator HTTP server.
    Serve,
    /// Load and validate the configuration, then exit.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Missing provider credentials are fatal before any command runs.
    let config = match recova_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            recova_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run(config).await {
                eprintln!("recova serve: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            println!(
                "recova: config OK (agent.name={}, server={}:{})",
                config.agent.name, config.server.host, config.server.port
            );
        }
        None => {
            println!("recova: use --help for available commands");
        }
    }
}
