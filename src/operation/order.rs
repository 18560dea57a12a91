//
//  nosto-sdk
//  operation/order.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Server-side order confirmation.
//!
//! Order tagging is a public webhook: it identifies the account by name in
//! the path and carries no token. When the Nosto customer id of the visitor
//! is known the order is matched to their session, otherwise it is recorded
//! as unmatched.

use crate::api::request::{PATH_ORDER_TAGGING, PATH_UNMATCHED_ORDER_TAGGING};
use crate::api::{GeneralPurposeResultHandler, RequestKind};
use crate::auth::TokenKind;
use crate::error::Result;
use crate::model::Order;

use super::{Operation, OperationContext};

/// Confirms a placed order.
#[derive(Debug, Clone, Copy)]
pub struct OrderConfirm<'a> {
    context: OperationContext<'a>,
}

impl<'a> OrderConfirm<'a> {
    pub fn new(context: OperationContext<'a>) -> Self {
        Self { context }
    }

    /// Sends `order`, matched to `customer_id` when one is given.
    pub async fn confirm(&self, order: &Order, customer_id: Option<&str>) -> Result<bool> {
        let mut request = self.context.init_request(self)?;
        match customer_id.filter(|id| !id.is_empty()) {
            Some(id) => request.set_replace_params([("{cid}", id)]),
            None => request.set_path(PATH_UNMATCHED_ORDER_TAGGING),
        }

        tracing::debug!("Confirming order {}", order.order_number);
        let response = request.post(order).await?;
        self.handle(&response)
    }
}

impl Operation for OrderConfirm<'_> {
    type Handler = GeneralPurposeResultHandler;

    fn token_kind(&self) -> Option<TokenKind> {
        None
    }

    fn request_kind(&self) -> RequestKind {
        RequestKind::Webhook
    }

    fn path(&self) -> &'static str {
        PATH_ORDER_TAGGING
    }

    fn result_handler(&self) -> Self::Handler {
        GeneralPurposeResultHandler
    }
}
