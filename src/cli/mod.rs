//
//  nosto-sdk
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod account;
mod catalog;
mod customer;
mod oauth;
mod recommend;

pub use account::AccountCommand;
pub use catalog::{ProductsCommand, RatesCommand, SettingsCommand};
pub use customer::{MarketingPermissionCommand, OrderCommand, SsoCommand, UninstallCommand};
pub use oauth::OAuthCommand;
pub use recommend::RecommendCommand;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::NostoClient;
use crate::auth::Account;
use crate::config::Config;
use crate::operation::OperationContext;

/// Nosto from the command line
#[derive(Parser, Debug)]
#[command(
    name = "nosto",
    version,
    about = "Push catalog data to Nosto and call its APIs from the command line",
    long_about = "nosto drives the Nosto SDK operations: product and rate sync, settings,\n\
                  marketing permissions, order confirmation, SSO and OAuth.",
    propagate_version = true,
    after_help = "Use 'nosto <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options shared by every command
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Account to act for (defaults to `default_account` in the config)
    #[arg(long, short = 'a', global = true, env = "NOSTO_ACCOUNT")]
    pub account: Option<String>,

    /// Active domain for multi-store accounts
    #[arg(long, global = true, env = "NOSTO_ACTIVE_DOMAIN")]
    pub domain: Option<String>,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "NOSTO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grant or revoke a customer's marketing permission
    #[command(name = "marketing-permission", visible_alias = "mp")]
    MarketingPermission(MarketingPermissionCommand),

    /// Upsert or discontinue products
    Products(ProductsCommand),

    /// Publish currency exchange rates
    Rates(RatesCommand),

    /// Update account settings
    Settings(SettingsCommand),

    /// Confirm a placed order
    Order(OrderCommand),

    /// Get a single sign-on link to the Nosto admin
    Sso(SsoCommand),

    /// Notify Nosto that the integration was uninstalled
    Uninstall(UninstallCommand),

    /// Connect an account with OAuth
    #[command(name = "oauth")]
    OAuth(OAuthCommand),

    /// Fetch a recommendation slot
    #[command(visible_alias = "recs")]
    Recommend(RecommendCommand),

    /// Manage configured accounts and tokens
    Account(AccountCommand),

    /// Show version information
    Version,
}

impl GlobalOptions {
    /// The configuration file in effect.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from(&self.config_path()?)
    }

    /// Client over the configured endpoints.
    pub fn client(&self, config: &Config) -> Result<NostoClient> {
        Ok(NostoClient::with_endpoints(config.endpoints()?)?)
    }

    /// The account selected by `--account` or the config default.
    pub fn account(&self, config: &Config) -> Result<Account> {
        let name = self
            .account
            .as_deref()
            .or(config.default_account.as_deref())
            .context("No account selected. Pass --account or set default_account")?;
        config.account(name)
    }

    /// Operation context for `account`, scoped to `--domain` when given.
    pub fn context<'a>(&'a self, client: &'a NostoClient, account: &'a Account) -> OperationContext<'a> {
        let context = OperationContext::new(client, account);
        match self.domain.as_deref() {
            Some(domain) => context.with_active_domain(domain),
            None => context,
        }
    }
}

/// Reads a JSON input file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Prints an acknowledged operation.
pub(crate) fn print_ack(global: &GlobalOptions, ok: bool, message: &str) -> Result<()> {
    if global.json {
        print_json(&serde_json::json!({ "success": ok, "message": message }))
    } else {
        println!("{} {}", style("✓").green(), message);
        Ok(())
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
