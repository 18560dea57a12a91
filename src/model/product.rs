//
//  nosto-sdk
//  model/product.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Product wire format for catalog upserts.
//!
//! Field names follow the platform's snake_case JSON keys. Optional fields
//! are omitted when unset rather than sent as `null`.

use serde::{Deserialize, Serialize};

use super::Collection;

/// A batch of products for [`UpsertProducts`](crate::operation::UpsertProducts).
pub type ProductCollection = Collection<Product>;

/// Stock status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Availability {
    /// Purchasable
    #[default]
    InStock,
    /// Not purchasable right now
    OutOfStock,
}

impl Availability {
    /// Maps a boolean "is available" flag.
    pub fn from_available(available: bool) -> Self {
        if available {
            Self::InStock
        } else {
            Self::OutOfStock
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_currency_code: Option<String>,

    #[serde(default)]
    pub availability: Availability,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag1: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag2: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag3: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_cost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_image_urls: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_category: Option<String>,
}

impl Product {
    /// Creates an in-stock product with only its id and name set.
    pub fn new(product_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds a first-dimension tag unless already present.
    pub fn add_tag1(&mut self, tag: impl Into<String>) {
        push_unique(&mut self.tag1, tag.into());
    }

    /// Adds a second-dimension tag unless already present.
    pub fn add_tag2(&mut self, tag: impl Into<String>) {
        push_unique(&mut self.tag2, tag.into());
    }

    /// Adds a third-dimension tag unless already present.
    pub fn add_tag3(&mut self, tag: impl Into<String>) {
        push_unique(&mut self.tag3, tag.into());
    }
}

fn push_unique(tags: &mut Vec<String>, tag: String) {
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}
