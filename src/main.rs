//
//  nosto-sdk
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nosto_sdk::cli::{Cli, Commands};
use nosto_sdk::{exit_codes, ConfigurationError, Error};

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("NOSTO_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps the first SDK error in the chain to an exit code.
fn exit_code(error: &anyhow::Error) -> i32 {
    let Some(sdk) = error.chain().find_map(|e| e.downcast_ref::<Error>()) else {
        if error.chain().any(|e| e.is::<ConfigurationError>()) {
            return exit_codes::CONFIG_ERROR;
        }
        return exit_codes::ERROR;
    };
    match sdk {
        Error::Configuration(_) => exit_codes::CONFIG_ERROR,
        Error::Transport(_) => exit_codes::TRANSPORT_ERROR,
        e if matches!(e.status(), Some(401 | 403)) => exit_codes::AUTH_ERROR,
        Error::Http { .. } | Error::Api { .. } => exit_codes::API_ERROR,
        Error::Serialization { .. } => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::MarketingPermission(cmd) => cmd.run(&cli.global).await,
        Commands::Products(cmd) => cmd.run(&cli.global).await,
        Commands::Rates(cmd) => cmd.run(&cli.global).await,
        Commands::Settings(cmd) => cmd.run(&cli.global).await,
        Commands::Order(cmd) => cmd.run(&cli.global).await,
        Commands::Sso(cmd) => cmd.run(&cli.global).await,
        Commands::Uninstall(cmd) => cmd.run(&cli.global).await,
        Commands::OAuth(cmd) => cmd.run(&cli.global).await,
        Commands::Recommend(cmd) => cmd.run(&cli.global).await,
        Commands::Account(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("nosto version {}", nosto_sdk::VERSION);
            Ok(())
        }
    }
}
