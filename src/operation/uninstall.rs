//
//  nosto-sdk
//  operation/uninstall.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::Serialize;

use crate::api::request::PATH_ACCOUNT_DELETED;
use crate::api::{GeneralPurposeResultHandler, RequestKind};
use crate::auth::TokenKind;
use crate::error::Result;
use crate::model::CurrentUser;

use super::{Operation, OperationContext};

#[derive(Serialize)]
struct UninstallNotice<'u> {
    user: &'u CurrentUser,
}

/// Notifies Nosto that the integration was removed from the shop.
#[derive(Debug, Clone, Copy)]
pub struct Uninstall<'a> {
    context: OperationContext<'a>,
}

impl<'a> Uninstall<'a> {
    pub fn new(context: OperationContext<'a>) -> Self {
        Self { context }
    }

    /// Sends the notice on behalf of the user who uninstalled.
    pub async fn delete(&self, user: &CurrentUser) -> Result<bool> {
        let request = self.context.init_request(self)?;
        let response = request.post(&UninstallNotice { user }).await?;
        self.handle(&response)
    }
}

impl Operation for Uninstall<'_> {
    type Handler = GeneralPurposeResultHandler;

    fn token_kind(&self) -> Option<TokenKind> {
        Some(TokenKind::Sso)
    }

    fn request_kind(&self) -> RequestKind {
        RequestKind::Webhook
    }

    fn path(&self) -> &'static str {
        PATH_ACCOUNT_DELETED
    }

    fn result_handler(&self) -> Self::Handler {
        GeneralPurposeResultHandler
    }
}
