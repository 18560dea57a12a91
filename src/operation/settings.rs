//
//  nosto-sdk
//  operation/settings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::request::PATH_SETTINGS;
use crate::api::GeneralPurposeResultHandler;
use crate::auth::TokenKind;
use crate::error::Result;
use crate::model::Settings;

use super::{Operation, OperationContext};

/// Pushes store settings (title, URLs, currencies) to the account.
#[derive(Debug, Clone, Copy)]
pub struct UpdateSettings<'a> {
    context: OperationContext<'a>,
}

impl<'a> UpdateSettings<'a> {
    pub fn new(context: OperationContext<'a>) -> Self {
        Self { context }
    }

    pub async fn update(&self, settings: &Settings) -> Result<bool> {
        let request = self.context.init_request(self)?;
        let response = request.post(settings).await?;
        self.handle(&response)
    }
}

impl Operation for UpdateSettings<'_> {
    type Handler = GeneralPurposeResultHandler;

    fn token_kind(&self) -> Option<TokenKind> {
        Some(TokenKind::Settings)
    }

    fn path(&self) -> &'static str {
        PATH_SETTINGS
    }

    fn result_handler(&self) -> Self::Handler {
        GeneralPurposeResultHandler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Account, Token};
    use crate::operation::testing::Canned;

    #[tokio::test]
    async fn test_settings_skip_unset_fields() {
        let transport = Canned::new(200, "");
        let client = transport.client();
        let account = Account::new("acme").with_token(Token::new(TokenKind::Settings, "s"));

        let settings = Settings {
            title: Some("Acme".to_string()),
            ..Settings::default()
        };
        UpdateSettings::new(OperationContext::new(&client, &account))
            .update(&settings)
            .await
            .unwrap();

        let body = transport.calls()[0].json();
        assert_eq!(body["title"], "Acme");
        assert!(body.get("front_page_url").is_none());
    }
}
