//
//  nosto-sdk
//  model/exchange_rate.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Currency exchange rates.
//!
//! Unlike products, rates go over the wire as an object keyed by rate name:
//!
//! ```json
//! {
//!   "rates": {
//!     "EUR": {"rate": 0.91, "price_currency_code": "EUR"}
//!   },
//!   "valid_until": "2024-06-01T00:00:00Z"
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use super::Collection;

/// The rates part of an [`ExchangeRates`] payload.
pub type ExchangeRateCollection = Collection<ExchangeRate>;

/// One rate from the base currency into `currency_code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Key under which the rate is published, usually the currency code
    pub name: String,
    /// Target currency
    #[serde(rename = "price_currency_code")]
    pub currency_code: String,
    /// Multiplier from the base currency
    pub rate: f64,
}

impl ExchangeRate {
    /// Creates a rate named after its currency.
    pub fn new(currency_code: impl Into<String>, rate: f64) -> Self {
        let currency_code = currency_code.into();
        Self {
            name: currency_code.clone(),
            currency_code,
            rate,
        }
    }
}

/// Request body for [`SyncRates`](crate::operation::SyncRates).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ExchangeRates {
    /// The rates, published in insertion order
    pub rates: ExchangeRateCollection,
    /// Optional expiry of the published rates
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
}

impl ExchangeRates {
    /// Wraps a rate collection with no expiry.
    pub fn new(rates: ExchangeRateCollection) -> Self {
        Self {
            rates,
            valid_until: None,
        }
    }
}

struct RatesByName<'a>(&'a ExchangeRateCollection);

impl Serialize for RatesByName<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.count()))?;
        for rate in self.0 {
            map.serialize_entry(
                &rate.name,
                &RateEntry {
                    rate: rate.rate,
                    price_currency_code: &rate.currency_code,
                },
            )?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct RateEntry<'a> {
    rate: f64,
    price_currency_code: &'a str,
}

impl Serialize for ExchangeRates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.valid_until.is_some() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("ExchangeRates", len)?;
        state.serialize_field("rates", &RatesByName(&self.rates))?;
        if let Some(valid_until) = &self.valid_until {
            state.serialize_field("valid_until", valid_until)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rates_serialize_keyed_by_name() {
        let mut rates = ExchangeRateCollection::new();
        rates.append(ExchangeRate::new("EUR", 0.91));
        rates.append(ExchangeRate::new("GBP", 0.78));

        let mut payload = ExchangeRates::new(rates);
        payload.valid_until = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rates": {
                    "EUR": {"rate": 0.91, "price_currency_code": "EUR"},
                    "GBP": {"rate": 0.78, "price_currency_code": "GBP"}
                },
                "valid_until": "2024-06-01T00:00:00Z"
            })
        );
    }

    #[test]
    fn test_valid_until_omitted_when_unset() {
        let payload = ExchangeRates::new(ExchangeRateCollection::new());
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"rates":{}}"#);
    }

    #[test]
    fn test_rates_deserialize_from_list() {
        let json = r#"{"rates": [{"name": "EUR", "price_currency_code": "EUR", "rate": 0.9}]}"#;
        let payload: ExchangeRates = serde_json::from_str(json).unwrap();
        assert_eq!(payload.rates.count(), 1);
        assert!(payload.valid_until.is_none());
    }
}
