//
//  nosto-sdk
//  cli/recommend.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::operation::{Filters, Recommendations};

use super::{print_json, read_json, GlobalOptions};

#[derive(Args, Debug)]
pub struct RecommendCommand {
    /// Recommendation slot id
    pub slot: String,

    /// JSON file with filters, e.g. `{"brands": ["acme"], "price": {"min": 1, "max": 20}}`
    #[arg(long)]
    pub filters: Option<PathBuf>,

    /// Restrict to these brands (merged with the filter file)
    #[arg(long, value_delimiter = ',')]
    pub brand: Vec<String>,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// Only products in stock
    #[arg(long)]
    pub in_stock: bool,
}

impl RecommendCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let client = global.client(&config)?;
        let account = global.account(&config)?;

        let mut filters = match &self.filters {
            Some(path) => read_json::<Filters>(path)?,
            None => Filters::new(),
        };
        if !self.brand.is_empty() {
            filters.set_brands(self.brand.iter().cloned());
        }
        if let Some(search) = &self.search {
            filters.set_search(search.as_str());
        }
        if self.in_stock {
            filters.set_stock(true);
        }

        let data = Recommendations::new(global.context(&client, &account))
            .fetch(&self.slot, &filters)
            .await?;
        print_json(&data)
    }
}
