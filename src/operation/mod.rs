//
//  nosto-sdk
//  operation/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Operations
//!
//! An operation is one authenticated use-case against the Nosto platform.
//! Every concrete operation implements [`Operation`], which declares
//! statically how its request is built and how its response is read:
//!
//! | Method | Declares |
//! |--------|----------|
//! | [`Operation::token_kind`] | the API token the use-case needs, if any |
//! | [`Operation::request_kind`] | API, OAuth or webhook host |
//! | [`Operation::content_type`] | JSON or form-encoded body |
//! | [`Operation::path`] | the path template constant |
//! | [`Operation::result_handler`] | the handler interpreting the response |
//!
//! The use-case method itself (e.g. [`MarketingPermission::update`]) follows
//! the same pipeline every time:
//!
//! ```text
//! resolve token -> init request -> replace params -> encode body
//!     -> one transport call -> result handler -> typed value or error
//! ```
//!
//! A missing token fails inside [`OperationContext::init_request`], before
//! a request exists, so the transport is never called.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nosto_sdk::api::NostoClient;
//! use nosto_sdk::auth::{Account, Token, TokenKind};
//! use nosto_sdk::operation::{MarketingPermission, OperationContext};
//!
//! # async fn example() -> nosto_sdk::Result<()> {
//! let client = NostoClient::new()?;
//! let account = Account::new("shopify-123")
//!     .with_token(Token::new(TokenKind::Email, "email-token"));
//!
//! let context = OperationContext::new(&client, &account);
//! MarketingPermission::new(context).update("jane@example.com", true).await?;
//! # Ok(())
//! # }
//! ```

mod exchange_rate;
mod marketing_permission;
mod oauth;
mod order;
mod product;
pub mod recommendation;
mod settings;
mod sso;
mod uninstall;

pub use exchange_rate::*;
pub use marketing_permission::*;
pub use oauth::*;
pub use order::*;
pub use product::*;
pub use recommendation::{Filters, Recommendations};
pub use settings::*;
pub use sso::*;
pub use uninstall::*;

use crate::api::request::HEADER_ACTIVE_DOMAIN;
use crate::api::{ContentType, HttpResponse, NostoClient, Request, RequestKind, ResultHandler};
use crate::auth::{Account, TokenKind};
use crate::error::Result;

/// Output type of an operation's result handler.
pub type Output<O> = <<O as Operation>::Handler as ResultHandler>::Output;

/// Static description of one use-case.
pub trait Operation {
    /// Handler that interprets this operation's responses.
    type Handler: ResultHandler;

    /// The API token this use-case authenticates with. `None` for public
    /// webhooks and the OAuth flow.
    fn token_kind(&self) -> Option<TokenKind>;

    /// Which host the request targets.
    fn request_kind(&self) -> RequestKind {
        RequestKind::Api
    }

    /// Body encoding.
    fn content_type(&self) -> ContentType {
        ContentType::Json
    }

    /// Path template, relative to the host's base URL.
    fn path(&self) -> &'static str;

    /// Creates the handler for a response.
    fn result_handler(&self) -> Self::Handler;

    /// Interprets a response with [`Operation::result_handler`].
    fn handle(
        &self,
        response: &HttpResponse,
    ) -> Result<<Self::Handler as ResultHandler>::Output> {
        self.result_handler().interpret(response)
    }
}

/// Builds an unauthenticated request for `operation`: base URL by request
/// kind, path template and content type.
pub fn new_request<'a, O: Operation + ?Sized>(client: &'a NostoClient, operation: &O) -> Request<'a> {
    let base_url = operation.request_kind().base_url(client.endpoints());
    let mut request = Request::new(client.transport(), base_url);
    request.set_path(operation.path());
    request.set_content_type(operation.content_type());
    request
}

/// The account an operation acts for, plus the shared client.
///
/// Contexts are cheap to copy; every operation instance holds its own.
#[derive(Debug, Clone, Copy)]
pub struct OperationContext<'a> {
    client: &'a NostoClient,
    account: &'a Account,
    active_domain: Option<&'a str>,
}

impl<'a> OperationContext<'a> {
    pub fn new(client: &'a NostoClient, account: &'a Account) -> Self {
        Self {
            client,
            account,
            active_domain: None,
        }
    }

    /// Scopes requests to one domain of a multi-store account. An empty
    /// domain is the same as none.
    pub fn with_active_domain(mut self, domain: &'a str) -> Self {
        self.active_domain = Some(domain).filter(|d| !d.is_empty());
        self
    }

    pub fn client(&self) -> &'a NostoClient {
        self.client
    }

    pub fn account(&self) -> &'a Account {
        self.account
    }

    pub fn active_domain(&self) -> Option<&'a str> {
        self.active_domain
    }

    /// Resolves the operation's token and builds its request.
    ///
    /// Sets Basic auth with an empty user and the token as password, records
    /// `{m}` (account name) and `{domain}` (active domain) as default
    /// replacements and adds the active domain header.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::MissingToken`](crate::error::ConfigurationError::MissingToken)
    /// when the account has no token of the required kind.
    pub fn init_request<O: Operation + ?Sized>(&self, operation: &O) -> Result<Request<'a>> {
        let token = match operation.token_kind() {
            Some(kind) => Some(self.account.api_token(kind)?),
            None => None,
        };

        let mut request = new_request(self.client, operation);
        if let Some(token) = token {
            request.set_auth_basic("", token.value());
        }

        request.set_replace_params([("{m}", self.account.name())]);
        if let Some(domain) = self.active_domain {
            request.set_replace_params([("{domain}", domain)]);
            request.add_header(HEADER_ACTIVE_DOMAIN, domain);
        }

        Ok(request)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording transport shared by the operation tests.

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use reqwest::Method;

    use crate::api::{Headers, HttpResponse, NostoClient, Transport};
    use crate::config::Endpoints;
    use crate::error::TransportError;

    #[derive(Debug, Clone)]
    pub struct Call {
        pub method: Method,
        pub url: String,
        pub headers: Headers,
        pub body: Vec<u8>,
    }

    impl Call {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }

        pub fn json(&self) -> serde_json::Value {
            serde_json::from_slice(&self.body).unwrap()
        }
    }

    pub struct Canned {
        status: u16,
        body: String,
        calls: Mutex<Vec<Call>>,
    }

    impl Canned {
        pub fn new(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body: body.to_string(),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn client(self: &Arc<Self>) -> NostoClient {
            let endpoints = Endpoints::single_host("https://nosto.test").unwrap();
            NostoClient::with_transport(self.clone(), endpoints)
        }
    }

    #[async_trait]
    impl Transport for Canned {
        async fn send(
            &self,
            method: &Method,
            url: &str,
            headers: &Headers,
            body: &[u8],
        ) -> Result<HttpResponse, TransportError> {
            self.calls.lock().unwrap().push(Call {
                method: method.clone(),
                url: url.to_string(),
                headers: headers.clone(),
                body: body.to_vec(),
            });
            Ok(HttpResponse::new(self.status, Headers::new(), self.body.as_str()))
        }
    }
}
