//
//  nosto-sdk
//  cli/customer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Customer facing commands: marketing permission, order confirmation,
//! single sign-on and uninstall.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args};
use console::style;

use crate::model::{CurrentUser, Order};
use crate::operation::{
    MarketingPermission, OrderConfirm, SingleSignOn, Uninstall, DEFAULT_SSO_PLATFORM,
};

use super::{print_ack, print_json, read_json, GlobalOptions};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("state").required(true).args(["grant", "revoke"])))]
pub struct MarketingPermissionCommand {
    /// Customer email
    pub email: String,

    /// Allow marketing email
    #[arg(long)]
    pub grant: bool,

    /// Disallow marketing email
    #[arg(long)]
    pub revoke: bool,
}

impl MarketingPermissionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let client = global.client(&config)?;
        let account = global.account(&config)?;

        let ok = MarketingPermission::new(global.context(&client, &account))
            .update(&self.email, self.grant)
            .await?;

        let verb = if self.grant { "Granted" } else { "Revoked" };
        print_ack(global, ok, &format!("{} marketing permission for {}", verb, self.email))
    }
}

#[derive(Args, Debug)]
pub struct OrderCommand {
    /// JSON file with the order
    pub file: PathBuf,

    /// Nosto customer id of the buyer's session
    #[arg(long)]
    pub customer_id: Option<String>,
}

impl OrderCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let client = global.client(&config)?;
        let account = global.account(&config)?;

        let order: Order = read_json(&self.file)?;
        let customer_id = self.customer_id.as_deref().filter(|id| !id.is_empty());
        let ok = OrderConfirm::new(global.context(&client, &account))
            .confirm(&order, customer_id)
            .await?;

        let matched = if customer_id.is_some() { "matched" } else { "unmatched" };
        print_ack(
            global,
            ok,
            &format!("Confirmed order {} ({})", order.order_number, matched),
        )
    }
}

/// Shop user identity for SSO and uninstall.
#[derive(Args, Debug)]
pub struct UserArgs {
    /// User email
    pub email: String,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,
}

impl UserArgs {
    fn to_user(&self) -> CurrentUser {
        CurrentUser {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct SsoCommand {
    #[command(flatten)]
    pub user: UserArgs,

    /// Platform name used in the SSO path
    #[arg(long, default_value = DEFAULT_SSO_PLATFORM)]
    pub platform: String,
}

impl SsoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let client = global.client(&config)?;
        let account = global.account(&config)?;

        let login = SingleSignOn::new(global.context(&client, &account))
            .login(&self.user.to_user(), &self.platform)
            .await?;

        if global.json {
            print_json(&serde_json::json!({ "login_url": login.login_url }))
        } else {
            println!("{} {}", style("Login URL:").bold(), style(&login.login_url).cyan());
            Ok(())
        }
    }
}

#[derive(Args, Debug)]
pub struct UninstallCommand {
    #[command(flatten)]
    pub user: UserArgs,
}

impl UninstallCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let client = global.client(&config)?;
        let account = global.account(&config)?;

        let ok = Uninstall::new(global.context(&client, &account))
            .delete(&self.user.to_user())
            .await?;
        print_ack(global, ok, &format!("Sent uninstall notice for {}", account.name()))
    }
}
