//
//  nosto-sdk
//  operation/recommendation/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Recommendations
//!
//! Recommendation slots are read through the GraphQL API with the `apps`
//! token. The [`Filters`] of a request travel as the `filters` variable.

mod filters;

pub use filters::{CustomField, Filters, PriceRange};

use serde_json::{json, Value};

use crate::api::request::PATH_GRAPHQL;
use crate::api::GraphQlResultHandler;
use crate::auth::TokenKind;
use crate::error::Result;

use super::{Operation, OperationContext};

/// GraphQL document for one recommendation slot.
pub const RECOMMENDATION_QUERY: &str = r#"query Recommendations($slotId: String!, $filters: InputFilterParams) {
  recos(preview: false, image: VERSION_ORIGINAL) {
    slot(id: $slotId, params: { filters: $filters }) {
      result_id
      primary { product_id name url price list_price price_currency_code image_url }
    }
  }
}"#;

/// Fetches the products of a recommendation slot.
#[derive(Debug, Clone, Copy)]
pub struct Recommendations<'a> {
    context: OperationContext<'a>,
}

impl<'a> Recommendations<'a> {
    pub fn new(context: OperationContext<'a>) -> Self {
        Self { context }
    }

    /// Runs the query for `slot_id` and returns the GraphQL `data` object.
    pub async fn fetch(&self, slot_id: &str, filters: &Filters) -> Result<Value> {
        let request = self.context.init_request(self)?;
        let body = json!({
            "query": RECOMMENDATION_QUERY,
            "variables": {
                "slotId": slot_id,
                "filters": filters.process(),
            },
        });

        let response = request.post(&body).await?;
        self.handle(&response)
    }
}

impl Operation for Recommendations<'_> {
    type Handler = GraphQlResultHandler;

    fn token_kind(&self) -> Option<TokenKind> {
        Some(TokenKind::Apps)
    }

    fn path(&self) -> &'static str {
        PATH_GRAPHQL
    }

    fn result_handler(&self) -> Self::Handler {
        GraphQlResultHandler
    }
}
