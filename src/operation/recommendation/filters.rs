//
//  nosto-sdk
//  operation/recommendation/filters.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Recommendation Filters
//!
//! [`Filters`] accumulates optional constraints for a recommendation query.
//! Only constraints that were set appear in [`Filters::process`].
//!
//! ## Merge Policy
//!
//! | Setter | Repeated call |
//! |--------|---------------|
//! | `set_brands`, `set_categories`, `set_product_ids`, `set_tag1..3` | appends new values, duplicates dropped |
//! | `set_custom_field` | appends values to the same attribute, or adds the attribute |
//! | `set_discounted`, `set_fresh`, `set_price`, `set_rating`, `set_reviews`, `set_search`, `set_stock` | replaces |
//!
//! ```rust
//! use nosto_sdk::operation::Filters;
//!
//! let mut filters = Filters::new();
//! filters.set_brands(["a"]);
//! filters.set_brands(["b", "a"]);
//! filters.set_price(10.0, 20.0);
//! filters.set_price(5.0, 15.0);
//!
//! let query = filters.process();
//! assert_eq!(query["brands"], serde_json::json!(["a", "b"]));
//! assert_eq!(query["price"], serde_json::json!({"min": 5.0, "max": 15.0}));
//! assert!(!query.contains_key("search"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Values required for one product attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub attribute: String,
    pub values: Vec<String>,
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Accumulator of recommendation query constraints.
///
/// Also deserializes from the camelCase object [`Filters::process`] emits,
/// so a saved filter file can be loaded back.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Filters {
    brands: Option<Vec<String>>,
    categories: Option<Vec<String>>,
    custom_fields: Option<Vec<CustomField>>,
    discounted: Option<bool>,
    fresh: Option<bool>,
    price: Option<PriceRange>,
    product_ids: Option<Vec<String>>,
    rating: Option<f64>,
    reviews: Option<u32>,
    search: Option<String>,
    stock: Option<bool>,
    tag1: Option<Vec<String>>,
    tag2: Option<Vec<String>>,
    tag3: Option<Vec<String>>,
}

fn merge<I, S>(list: &mut Option<Vec<String>>, values: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let list = list.get_or_insert_with(Vec::new);
    for value in values {
        let value = value.into();
        if !list.contains(&value) {
            list.push(value);
        }
    }
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_brands<I: IntoIterator<Item = S>, S: Into<String>>(&mut self, brands: I) {
        merge(&mut self.brands, brands);
    }

    pub fn set_categories<I: IntoIterator<Item = S>, S: Into<String>>(&mut self, categories: I) {
        merge(&mut self.categories, categories);
    }

    /// Requires `attribute` to take one of `values`.
    pub fn set_custom_field<I: IntoIterator<Item = S>, S: Into<String>>(
        &mut self,
        attribute: &str,
        values: I,
    ) {
        let fields = self.custom_fields.get_or_insert_with(Vec::new);
        let index = match fields.iter().position(|f| f.attribute == attribute) {
            Some(index) => index,
            None => {
                fields.push(CustomField {
                    attribute: attribute.to_string(),
                    values: Vec::new(),
                });
                fields.len() - 1
            }
        };

        let mut merged = Some(std::mem::take(&mut fields[index].values));
        merge(&mut merged, values);
        fields[index].values = merged.unwrap_or_default();
    }

    pub fn set_discounted(&mut self, discounted: bool) {
        self.discounted = Some(discounted);
    }

    pub fn set_fresh(&mut self, fresh: bool) {
        self.fresh = Some(fresh);
    }

    pub fn set_price(&mut self, min: f64, max: f64) {
        self.price = Some(PriceRange { min, max });
    }

    pub fn set_product_ids<I: IntoIterator<Item = S>, S: Into<String>>(&mut self, ids: I) {
        merge(&mut self.product_ids, ids);
    }

    /// Minimum average review rating.
    pub fn set_rating(&mut self, rating: f64) {
        self.rating = Some(rating);
    }

    /// Minimum number of reviews.
    pub fn set_reviews(&mut self, reviews: u32) {
        self.reviews = Some(reviews);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = Some(search.into());
    }

    pub fn set_stock(&mut self, in_stock: bool) {
        self.stock = Some(in_stock);
    }

    pub fn set_tag1<I: IntoIterator<Item = S>, S: Into<String>>(&mut self, tags: I) {
        merge(&mut self.tag1, tags);
    }

    pub fn set_tag2<I: IntoIterator<Item = S>, S: Into<String>>(&mut self, tags: I) {
        merge(&mut self.tag2, tags);
    }

    pub fn set_tag3<I: IntoIterator<Item = S>, S: Into<String>>(&mut self, tags: I) {
        merge(&mut self.tag3, tags);
    }

    /// Returns `true` when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.process().is_empty()
    }

    /// Projects the constraints that were set into the query object.
    pub fn process(&self) -> Map<String, Value> {
        let mut query = Map::new();
        let mut put = |key: &str, value: Option<Value>| {
            if let Some(value) = value {
                query.insert(key.to_string(), value);
            }
        };

        put("brands", self.brands.as_ref().map(|v| json!(v)));
        put("categories", self.categories.as_ref().map(|v| json!(v)));
        put("customFields", self.custom_fields.as_ref().map(|v| json!(v)));
        put("discounted", self.discounted.map(Value::from));
        put("fresh", self.fresh.map(Value::from));
        put("price", self.price.map(|p| json!({"min": p.min, "max": p.max})));
        put("productIds", self.product_ids.as_ref().map(|v| json!(v)));
        put("rating", self.rating.map(Value::from));
        put("reviews", self.reviews.map(Value::from));
        put("search", self.search.as_ref().map(|s| json!(s)));
        put("stock", self.stock.map(Value::from));
        put("tag1", self.tag1.as_ref().map(|v| json!(v)));
        put("tag2", self.tag2.as_ref().map(|v| json!(v)));
        put("tag3", self.tag3.as_ref().map(|v| json!(v)));

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_filters_project_to_empty() {
        let filters = Filters::new();
        assert!(filters.process().is_empty());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_list_setters_merge() {
        let mut filters = Filters::new();
        filters.set_brands(["a"]);
        filters.set_brands(["b"]);
        filters.set_categories(vec!["shoes".to_string()]);
        filters.set_tag2(["x", "y"]);
        filters.set_tag2(["y", "z"]);

        let query = filters.process();
        assert_eq!(query["brands"], json!(["a", "b"]));
        assert_eq!(query["categories"], json!(["shoes"]));
        assert_eq!(query["tag2"], json!(["x", "y", "z"]));
        assert!(!query.contains_key("tag1"));
    }

    #[test]
    fn test_scalar_setters_replace() {
        let mut filters = Filters::new();
        filters.set_price(10.0, 20.0);
        filters.set_price(1.0, 2.0);
        filters.set_search("red");
        filters.set_search("blue");
        filters.set_stock(true);
        filters.set_reviews(3);
        filters.set_reviews(5);

        let query = filters.process();
        assert_eq!(query["price"], json!({"min": 1.0, "max": 2.0}));
        assert_eq!(query["search"], json!("blue"));
        assert_eq!(query["stock"], json!(true));
        assert_eq!(query["reviews"], json!(5));
    }

    #[test]
    fn test_custom_fields_merge_by_attribute() {
        let mut filters = Filters::new();
        filters.set_custom_field("color", ["red"]);
        filters.set_custom_field("size", ["m"]);
        filters.set_custom_field("color", ["blue", "red"]);

        assert_eq!(
            filters.process()["customFields"],
            json!([
                {"attribute": "color", "values": ["red", "blue"]},
                {"attribute": "size", "values": ["m"]}
            ])
        );
    }

    #[test]
    fn test_deserializes_processed_form() {
        let mut filters = Filters::new();
        filters.set_product_ids(["1", "2"]);
        filters.set_custom_field("color", ["red"]);
        filters.set_discounted(false);

        let value = Value::Object(filters.process());
        let loaded: Filters = serde_json::from_value(value).unwrap();
        assert_eq!(loaded, filters);
    }
}
