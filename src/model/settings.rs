//
//  nosto-sdk
//  model/settings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Store settings pushed to the platform after installation or changes.

use serde::{Deserialize, Serialize};

/// Account-level store settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Store name shown in the Nosto admin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Absolute URL of the store front page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_page_url: Option<String>,

    /// Base currency, ISO 4217
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Store language, ISO 639-1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    /// Whether prices are converted with published exchange rates
    #[serde(default)]
    pub use_currency_exchange_rates: bool,

    /// Variation used when no currency specific one applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_variant_id: Option<String>,
}
