//
//  nosto-sdk
//  operation/marketing_permission.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Customer marketing permission updates.

use crate::api::request::PATH_MARKETING_PERMISSION;
use crate::api::GeneralPurposeResultHandler;
use crate::auth::TokenKind;
use crate::error::Result;

use super::{Operation, OperationContext};

/// Grants or revokes a customer's permission to receive marketing email.
///
/// Both arguments travel in the path; the body is empty.
#[derive(Debug, Clone, Copy)]
pub struct MarketingPermission<'a> {
    context: OperationContext<'a>,
}

impl<'a> MarketingPermission<'a> {
    pub fn new(context: OperationContext<'a>) -> Self {
        Self { context }
    }

    /// Sets the permission for `email`. Returns `true` on acknowledgment.
    pub async fn update(&self, email: &str, has_permission: bool) -> Result<bool> {
        let mut request = self.context.init_request(self)?;
        request.set_replace_params([
            ("{email}", email),
            ("{state}", if has_permission { "true" } else { "false" }),
        ]);

        let response = request.post_raw("").await?;
        self.handle(&response)
    }
}

impl Operation for MarketingPermission<'_> {
    type Handler = GeneralPurposeResultHandler;

    fn token_kind(&self) -> Option<TokenKind> {
        Some(TokenKind::Email)
    }

    fn path(&self) -> &'static str {
        PATH_MARKETING_PERMISSION
    }

    fn result_handler(&self) -> Self::Handler {
        GeneralPurposeResultHandler
    }
}
