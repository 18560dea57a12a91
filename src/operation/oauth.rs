//
//  nosto-sdk
//  operation/oauth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # OAuth Connect Flow
//!
//! Two operations finish the flow started at
//! [`OAuthClientMeta::authorize_url`](crate::auth::OAuthClientMeta::authorize_url).
//! Neither needs an [`Account`] up front; the second one produces it.
//!
//! ```rust,no_run
//! use nosto_sdk::api::NostoClient;
//! use nosto_sdk::auth::OAuthClientMeta;
//! use nosto_sdk::operation::{AccountSync, AuthorizationCode};
//!
//! # async fn example(code: &str) -> nosto_sdk::Result<()> {
//! let client = NostoClient::new()?;
//! let meta = OAuthClientMeta::new("client", "secret", "https://shop.example/cb");
//!
//! let access = AuthorizationCode::new(&client, &meta).exchange(code).await?;
//! let account = AccountSync::new(&client, &access).sync().await?;
//! println!("connected {}", account.name());
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use crate::api::request::{PATH_OAUTH_SYNC, PATH_TOKEN};
use crate::api::{JsonResultHandler, NostoClient, RequestKind};
use crate::auth::{AccessToken, Account, OAuthClientMeta, Token, TokenKind, API_SCOPE_PREFIX};
use crate::error::Result;

use super::{new_request, Operation};

/// Exchanges an authorization code for an [`AccessToken`].
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationCode<'a> {
    client: &'a NostoClient,
    meta: &'a OAuthClientMeta,
}

impl<'a> AuthorizationCode<'a> {
    pub fn new(client: &'a NostoClient, meta: &'a OAuthClientMeta) -> Self {
        Self { client, meta }
    }

    /// Trades `code` for an access token.
    ///
    /// # Errors
    ///
    /// [`Error::Api`](crate::Error::Api) when the server answers with an
    /// OAuth error envelope, even with status 200.
    pub async fn exchange(&self, code: &str) -> Result<AccessToken> {
        let mut request = new_request(self.client, self);
        request.set_replace_params([
            ("{cod}", code),
            ("{cid}", self.meta.client_id.as_str()),
            ("{sec}", self.meta.client_secret.as_str()),
            ("{uri}", self.meta.redirect_url.as_str()),
        ]);

        let response = request.get().await?;
        self.handle(&response)
    }
}

impl Operation for AuthorizationCode<'_> {
    type Handler = JsonResultHandler<AccessToken>;

    fn token_kind(&self) -> Option<TokenKind> {
        None
    }

    fn request_kind(&self) -> RequestKind {
        RequestKind::OAuth
    }

    fn path(&self) -> &'static str {
        PATH_TOKEN
    }

    fn result_handler(&self) -> Self::Handler {
        JsonResultHandler::new()
    }
}

/// Fetches the API tokens granted to an access token and builds the
/// [`Account`] they belong to.
#[derive(Debug, Clone, Copy)]
pub struct AccountSync<'a> {
    client: &'a NostoClient,
    access: &'a AccessToken,
}

impl<'a> AccountSync<'a> {
    pub fn new(client: &'a NostoClient, access: &'a AccessToken) -> Self {
        Self { client, access }
    }

    /// Returns the merchant's account with every recognised `api_<kind>`
    /// token from the response. Unknown token names are skipped.
    pub async fn sync(&self) -> Result<Account> {
        let mut request = new_request(self.client, self);
        request.set_auth_bearer(&self.access.access_token);

        let response = request.get().await?;
        let granted = self.handle(&response)?;
        Ok(account_from_tokens(&self.access.merchant_name, &granted))
    }
}

impl Operation for AccountSync<'_> {
    type Handler = JsonResultHandler<BTreeMap<String, Value>>;

    fn token_kind(&self) -> Option<TokenKind> {
        None
    }

    fn request_kind(&self) -> RequestKind {
        RequestKind::Webhook
    }

    fn path(&self) -> &'static str {
        PATH_OAUTH_SYNC
    }

    fn result_handler(&self) -> Self::Handler {
        JsonResultHandler::new()
    }
}

fn account_from_tokens(name: &str, granted: &BTreeMap<String, Value>) -> Account {
    let mut account = Account::new(name);
    for (key, value) in granted {
        let Some(kind) = key.strip_prefix(API_SCOPE_PREFIX) else {
            continue;
        };
        match (kind.parse::<TokenKind>(), value.as_str()) {
            (Ok(kind), Some(value)) => account.add_token(Token::new(kind, value)),
            _ => tracing::debug!("Skipping unrecognised token {}", key),
        }
    }
    account
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::operation::testing::Canned;
    use reqwest::Method;

    fn meta() -> OAuthClientMeta {
        OAuthClientMeta::new("cid", "s&c", "https://shop.example/cb")
    }

    #[tokio::test]
    async fn test_exchange_resolves_token_path() {
        let transport = Canned::new(
            200,
            r#"{"access_token": "tok", "merchant_name": "acme", "token_type": "bearer"}"#,
        );
        let client = transport.client();
        let meta = meta();

        let access = AuthorizationCode::new(&client, &meta)
            .exchange("the-code")
            .await
            .unwrap();
        assert_eq!(access.merchant_name, "acme");

        let call = &transport.calls()[0];
        assert_eq!(call.method, Method::GET);
        assert_eq!(
            call.url,
            "https://nosto.test/oauth/token?code=the-code&client_id=cid&client_secret=s%26c\
             &redirect_uri=https:%2F%2Fshop.example%2Fcb&grant_type=authorization_code"
        );
        assert!(call.header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_exchange_error_envelope_on_200() {
        let transport = Canned::new(
            200,
            r#"{"error": "invalid_grant", "error_description": "Code expired"}"#,
        );
        let client = transport.client();
        let meta = meta();

        let err = AuthorizationCode::new(&client, &meta)
            .exchange("old")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api { ref message, .. } if message == "Code expired"));
    }

    #[tokio::test]
    async fn test_sync_builds_account() {
        let transport = Canned::new(
            200,
            r#"{"api_products": "p", "api_sso": "s", "api_unknown": "x", "other": 1}"#,
        );
        let client = transport.client();
        let access: AccessToken =
            serde_json::from_str(r#"{"access_token": "tok", "merchant_name": "acme"}"#).unwrap();

        let account = AccountSync::new(&client, &access).sync().await.unwrap();
        assert_eq!(account.name(), "acme");
        assert_eq!(account.api_token(TokenKind::Products).unwrap().value(), "p");
        assert_eq!(account.api_token(TokenKind::Sso).unwrap().value(), "s");
        assert!(!account.has_token(TokenKind::Rates));

        let call = &transport.calls()[0];
        assert_eq!(call.url, "https://nosto.test/oauth/exchange");
        assert_eq!(call.header("Authorization"), Some("Bearer tok"));
    }
}
