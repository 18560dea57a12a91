//
//  nosto-sdk
//  operation/sso.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Single sign-on into the Nosto admin.

use serde::Deserialize;

use crate::api::request::PATH_SSO_AUTH;
use crate::api::JsonResultHandler;
use crate::auth::TokenKind;
use crate::error::Result;
use crate::model::CurrentUser;

use super::{Operation, OperationContext};

/// Platform name used when the caller does not give one.
pub const DEFAULT_SSO_PLATFORM: &str = "platform";

/// One-time login link returned by [`SingleSignOn::login`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SsoLogin {
    pub login_url: String,
}

/// Signs a shop user into the Nosto admin without a password.
#[derive(Debug, Clone, Copy)]
pub struct SingleSignOn<'a> {
    context: OperationContext<'a>,
}

impl<'a> SingleSignOn<'a> {
    pub fn new(context: OperationContext<'a>) -> Self {
        Self { context }
    }

    /// Requests a login URL for `user` coming from `platform`.
    pub async fn login(&self, user: &CurrentUser, platform: &str) -> Result<SsoLogin> {
        let mut request = self.context.init_request(self)?;
        request.set_replace_params([("{platform}", platform)]);

        let response = request.post(user).await?;
        self.handle(&response)
    }
}

impl Operation for SingleSignOn<'_> {
    type Handler = JsonResultHandler<SsoLogin>;

    fn token_kind(&self) -> Option<TokenKind> {
        Some(TokenKind::Sso)
    }

    fn path(&self) -> &'static str {
        PATH_SSO_AUTH
    }

    fn result_handler(&self) -> Self::Handler {
        JsonResultHandler::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Account, Token};
    use crate::error::Error;
    use crate::operation::testing::Canned;

    fn account() -> Account {
        Account::new("acme").with_token(Token::new(TokenKind::Sso, "sso-token"))
    }

    #[tokio::test]
    async fn test_login_returns_url() {
        let transport = Canned::new(200, r#"{"login_url": "https://my.nosto.com/sso/xyz"}"#);
        let client = transport.client();
        let account = account();

        let user = CurrentUser::new("jane@example.com").with_name("Jane", "Doe");
        let login = SingleSignOn::new(OperationContext::new(&client, &account))
            .login(&user, "magento")
            .await
            .unwrap();
        assert_eq!(login.login_url, "https://my.nosto.com/sso/xyz");

        let call = &transport.calls()[0];
        assert_eq!(call.url, "https://nosto.test/users/sso/magento");
        assert_eq!(call.json()["first_name"], "Jane");
    }

    #[tokio::test]
    async fn test_login_with_malformed_body_fails() {
        let transport = Canned::new(200, "<html>");
        let client = transport.client();
        let account = account();

        let err = SingleSignOn::new(OperationContext::new(&client, &account))
            .login(&CurrentUser::new("jane@example.com"), DEFAULT_SSO_PLATFORM)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Serialization { .. }));
    }
}
