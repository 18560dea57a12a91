//
//  nosto-sdk
//  cli/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account and token management in the config file.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::auth::{Account, Token, TokenKind};

use super::{print_json, GlobalOptions};

#[derive(Args, Debug)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub command: AccountSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountSubcommand {
    /// List configured accounts and their token kinds
    #[command(visible_alias = "ls")]
    List,

    /// Store a token for the selected account
    SetToken {
        /// Token kind: sso, products, rates, settings, email or apps
        kind: TokenKind,

        value: String,
    },

    /// Make the selected account the default
    Use,

    /// Remove an account
    Remove { name: String },

    /// Print the config file location
    Path,
}

impl AccountCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        let mut config = global.load_config()?;

        match &self.command {
            AccountSubcommand::List => {
                let mut listing = Vec::new();
                for name in config.accounts.keys() {
                    let account = config.account(name)?;
                    let kinds: Vec<&str> = account.tokens().map(|t| t.kind().as_str()).collect();
                    listing.push((name.clone(), kinds));
                }

                if global.json {
                    let value: serde_json::Map<String, serde_json::Value> = listing
                        .into_iter()
                        .map(|(name, kinds)| (name, serde_json::json!(kinds)))
                        .collect();
                    return print_json(&value);
                }

                if listing.is_empty() {
                    println!("No accounts configured");
                }
                for (name, kinds) in listing {
                    let marker = if config.default_account.as_deref() == Some(name.as_str()) {
                        style("*").green().to_string()
                    } else {
                        " ".to_string()
                    };
                    println!("{} {} {}", marker, style(&name).cyan(), style(kinds.join(", ")).dim());
                }
                Ok(())
            }
            AccountSubcommand::SetToken { kind, value } => {
                let Some(name) = global.account.clone().or(config.default_account.clone()) else {
                    bail!("No account selected. Pass --account");
                };
                let mut account = if config.accounts.contains_key(&name) {
                    config.account(&name)?
                } else {
                    Account::new(name.as_str())
                };
                account.add_token(Token::new(*kind, value.as_str()));
                config.set_account(&account);
                if config.default_account.is_none() {
                    config.default_account = Some(name.clone());
                }
                config.save_to(&path)?;
                println!("{} Stored {} token for {}", style("✓").green(), kind, style(&name).cyan());
                Ok(())
            }
            AccountSubcommand::Use => {
                let Some(name) = global.account.clone() else {
                    bail!("Pass the account with --account");
                };
                if !config.accounts.contains_key(&name) {
                    bail!("Account '{}' is not configured", name);
                }
                config.default_account = Some(name.clone());
                config.save_to(&path)?;
                println!("{} Default account is now {}", style("✓").green(), style(&name).cyan());
                Ok(())
            }
            AccountSubcommand::Remove { name } => {
                if config.accounts.remove(name).is_none() {
                    bail!("Account '{}' is not configured", name);
                }
                if config.default_account.as_deref() == Some(name.as_str()) {
                    config.default_account = None;
                }
                config.save_to(&path)?;
                println!("{} Removed {}", style("✓").green(), name);
                Ok(())
            }
            AccountSubcommand::Path => {
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}
