//
//  nosto-sdk
//  operation/product.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Product catalog operations.
//!
//! Both operations use the `products` token and send a JSON array; the caller
//! decides batch sizes by how many products go in one collection.

use crate::api::request::{PATH_PRODUCTS_DISCONTINUE, PATH_PRODUCTS_UPSERT};
use crate::api::GeneralPurposeResultHandler;
use crate::auth::TokenKind;
use crate::error::Result;
use crate::model::ProductCollection;

use super::{Operation, OperationContext};

/// Creates or updates products in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct UpsertProducts<'a> {
    context: OperationContext<'a>,
}

impl<'a> UpsertProducts<'a> {
    pub fn new(context: OperationContext<'a>) -> Self {
        Self { context }
    }

    /// Sends every product in `products` in one request.
    pub async fn upsert(&self, products: &ProductCollection) -> Result<bool> {
        let request = self.context.init_request(self)?;
        let response = request.post(products).await?;
        self.handle(&response)
    }
}

impl Operation for UpsertProducts<'_> {
    type Handler = GeneralPurposeResultHandler;

    fn token_kind(&self) -> Option<TokenKind> {
        Some(TokenKind::Products)
    }

    fn path(&self) -> &'static str {
        PATH_PRODUCTS_UPSERT
    }

    fn result_handler(&self) -> Self::Handler {
        GeneralPurposeResultHandler
    }
}

/// Marks products as discontinued by id.
#[derive(Debug, Clone, Copy)]
pub struct DiscontinueProducts<'a> {
    context: OperationContext<'a>,
}

impl<'a> DiscontinueProducts<'a> {
    pub fn new(context: OperationContext<'a>) -> Self {
        Self { context }
    }

    pub async fn discontinue<S: AsRef<str>>(&self, product_ids: &[S]) -> Result<bool> {
        let ids: Vec<&str> = product_ids.iter().map(AsRef::as_ref).collect();
        let request = self.context.init_request(self)?;
        let response = request.post(&ids).await?;
        self.handle(&response)
    }
}

impl Operation for DiscontinueProducts<'_> {
    type Handler = GeneralPurposeResultHandler;

    fn token_kind(&self) -> Option<TokenKind> {
        Some(TokenKind::Products)
    }

    fn path(&self) -> &'static str {
        PATH_PRODUCTS_DISCONTINUE
    }

    fn result_handler(&self) -> Self::Handler {
        GeneralPurposeResultHandler
    }
}
