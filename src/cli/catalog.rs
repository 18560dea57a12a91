//
//  nosto-sdk
//  cli/catalog.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Catalog commands: products, exchange rates and settings.
//!
//! Payloads are read from JSON files in the same shape they are sent in,
//! except exchange rates, which are a list of rates.
//!
//! ```bash
//! nosto products upsert products.json
//! nosto products discontinue sku-1 sku-2
//! nosto rates rates.json --valid-until 2024-06-01T00:00:00Z
//! nosto settings settings.json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use crate::model::{ExchangeRateCollection, ExchangeRates, ProductCollection, Settings};
use crate::operation::{DiscontinueProducts, SyncRates, UpdateSettings, UpsertProducts};

use super::{print_ack, read_json, GlobalOptions};

#[derive(Args, Debug)]
pub struct ProductsCommand {
    #[command(subcommand)]
    pub command: ProductsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProductsSubcommand {
    /// Create or update products from a JSON array
    Upsert {
        /// JSON file with an array of products
        file: PathBuf,
    },

    /// Mark products as discontinued
    Discontinue {
        /// Product ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

impl ProductsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let client = global.client(&config)?;
        let account = global.account(&config)?;
        let context = global.context(&client, &account);

        match &self.command {
            ProductsSubcommand::Upsert { file } => {
                let products: ProductCollection = read_json(file)?;
                if products.is_empty() {
                    bail!("{} contains no products", file.display());
                }
                let ok = UpsertProducts::new(context).upsert(&products).await?;
                print_ack(global, ok, &format!("Upserted {} products", products.count()))
            }
            ProductsSubcommand::Discontinue { ids } => {
                let ok = DiscontinueProducts::new(context).discontinue(ids.as_slice()).await?;
                print_ack(global, ok, &format!("Discontinued {} products", ids.len()))
            }
        }
    }
}

#[derive(Args, Debug)]
pub struct RatesCommand {
    /// JSON file with an array of `{name, price_currency_code, rate}`
    pub file: PathBuf,

    /// Expiry of the published rates (RFC 3339)
    #[arg(long)]
    pub valid_until: Option<DateTime<Utc>>,
}

impl RatesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let client = global.client(&config)?;
        let account = global.account(&config)?;
        let context = global.context(&client, &account);

        let rates: ExchangeRateCollection = read_json(&self.file)?;
        let payload = ExchangeRates {
            rates,
            valid_until: self.valid_until,
        };

        let ok = SyncRates::new(context).update(&payload).await?;
        print_ack(global, ok, &format!("Published {} rates", payload.rates.count()))
    }
}

#[derive(Args, Debug)]
pub struct SettingsCommand {
    /// JSON file with the settings object
    pub file: PathBuf,
}

impl SettingsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let client = global.client(&config)?;
        let account = global.account(&config)?;
        let context = global.context(&client, &account);

        let settings: Settings = read_json(&self.file)?;
        let ok = UpdateSettings::new(context).update(&settings).await?;
        print_ack(global, ok, &format!("Updated settings of {}", account.name()))
    }
}
