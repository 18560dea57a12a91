//
//  nosto-sdk
//  model/collection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Ordered, homogeneous collections of domain objects.
//!
//! A [`Collection<T>`] is what a caller assembles before a batch operation
//! such as a product upsert. The element type is fixed by the type parameter,
//! so a product collection cannot receive an order. Collections serialize as
//! a JSON array in insertion order.
//!
//! # Example
//!
//! ```rust
//! use nosto_sdk::model::{Product, ProductCollection};
//!
//! let mut products = ProductCollection::new();
//! products.append(Product::new("sku-1", "Shirt"));
//! products.append(Product::new("sku-2", "Hat"));
//!
//! assert_eq!(products.count(), 2);
//! let ids: Vec<_> = products.iter().map(|p| p.product_id.as_str()).collect();
//! assert_eq!(ids, ["sku-1", "sku-2"]);
//! ```

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::{Error, Result};

/// An ordered sequence of items of one type.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item at the end.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion order. Every call starts from the first item.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Serialize> Collection<T> {
    /// Projects the collection to a JSON array of each item's representation.
    pub fn to_serializable(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::serialization("collection", e))
    }

    /// Serializes the collection to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::serialization("collection", e))
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|items| Self { items })
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Item {
        id: u32,
    }

    #[test]
    fn test_serializable_matches_count_and_order() {
        let collection: Collection<Item> = (1..=5).map(|id| Item { id }).collect();
        let value = collection.to_serializable().unwrap();
        let array = value.as_array().unwrap();

        assert_eq!(array.len(), collection.count());
        let ids: Vec<u64> = array.iter().map(|v| v["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut collection = Collection::new();
        collection.append(Item { id: 7 });
        collection.append(Item { id: 8 });

        let first: Vec<_> = collection.iter().cloned().collect();
        let second: Vec<_> = (&collection).into_iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clear_empties() {
        let mut collection: Collection<Item> = vec![Item { id: 1 }].into_iter().collect();
        collection.clear();
        assert_eq!(collection.count(), 0);
        assert!(collection.is_empty());
        assert_eq!(collection.to_json().unwrap(), "[]");
    }
}
