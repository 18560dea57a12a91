//
//  nosto-sdk
//  cli/oauth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! OAuth connect commands.
//!
//! `nosto oauth url` prints the consent page for the configured OAuth
//! client. After the merchant approves, `nosto oauth connect <code>`
//! exchanges the callback code, fetches the account's API tokens and stores
//! them in the config file.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::auth::{OAuthClientMeta, TokenKind};
use crate::config::Config;
use crate::operation::{AccountSync, AuthorizationCode};

use super::{print_json, GlobalOptions};

#[derive(Args, Debug)]
pub struct OAuthCommand {
    #[command(subcommand)]
    pub command: OAuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OAuthSubcommand {
    /// Print the consent page URL
    Url,

    /// Exchange an authorization code and save the account's tokens
    Connect {
        /// The `code` query parameter of the OAuth callback
        code: String,

        /// Make the connected account the default
        #[arg(long)]
        set_default: bool,
    },
}

fn oauth_meta(config: &Config) -> Result<&OAuthClientMeta> {
    config
        .oauth
        .as_ref()
        .context("No [oauth] client configured")
}

impl OAuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            OAuthSubcommand::Url => self.url(global),
            OAuthSubcommand::Connect { code, set_default } => {
                self.connect(global, code, *set_default).await
            }
        }
    }

    fn url(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let url = oauth_meta(&config)?.authorize_url(&config.endpoints()?)?;

        if global.json {
            print_json(&serde_json::json!({ "url": url }))
        } else {
            println!("{}", url);
            Ok(())
        }
    }

    async fn connect(&self, global: &GlobalOptions, code: &str, set_default: bool) -> Result<()> {
        let mut config = global.load_config()?;
        let client = global.client(&config)?;
        let meta = oauth_meta(&config)?;

        let access = AuthorizationCode::new(&client, meta)
            .exchange(code)
            .await
            .context("Authorization code exchange failed")?;
        let account = AccountSync::new(&client, &access)
            .sync()
            .await
            .context("Token sync failed")?;

        let kinds: Vec<&str> = TokenKind::ALL
            .iter()
            .filter(|kind| account.has_token(**kind))
            .map(TokenKind::as_str)
            .collect();

        config.set_account(&account);
        if set_default || config.default_account.is_none() {
            config.default_account = Some(account.name().to_string());
        }
        config.save_to(&global.config_path()?)?;

        if global.json {
            print_json(&serde_json::json!({ "account": account.name(), "tokens": kinds }))
        } else {
            println!(
                "{} Connected {} ({})",
                style("✓").green(),
                style(account.name()).cyan(),
                kinds.join(", ")
            );
            Ok(())
        }
    }
}
