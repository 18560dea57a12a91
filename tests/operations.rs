//
//  nosto-sdk
//  tests/operations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end operation tests, against an in-memory transport and against
//! a mock HTTP server through the reqwest transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockito::Matcher;
use reqwest::Method;

use nosto_sdk::api::{Headers, HttpResponse, NostoClient, Transport};
use nosto_sdk::auth::{Account, OAuthClientMeta, Token, TokenKind};
use nosto_sdk::config::Endpoints;
use nosto_sdk::model::{CurrentUser, Product, ProductCollection};
use nosto_sdk::operation::{
    AccountSync, AuthorizationCode, MarketingPermission, OperationContext, SingleSignOn,
    UpsertProducts,
};
use nosto_sdk::{ConfigurationError, Error, TransportError};

#[derive(Debug, Clone)]
struct Sent {
    method: Method,
    url: String,
    headers: Headers,
}

struct Recording {
    status: u16,
    body: &'static str,
    sent: Mutex<Vec<Sent>>,
}

impl Recording {
    fn new(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for Recording {
    async fn send(
        &self,
        method: &Method,
        url: &str,
        headers: &Headers,
        _body: &[u8],
    ) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(Sent {
            method: method.clone(),
            url: url.to_string(),
            headers: headers.clone(),
        });
        Ok(HttpResponse::new(self.status, Headers::new(), self.body))
    }
}

struct Unreachable;

#[async_trait]
impl Transport for Unreachable {
    async fn send(
        &self,
        _method: &Method,
        _url: &str,
        _headers: &Headers,
        _body: &[u8],
    ) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Other("connection refused".to_string()))
    }
}

fn client_over(transport: Arc<dyn Transport>) -> NostoClient {
    NostoClient::with_transport(transport, Endpoints::default())
}

#[tokio::test]
async fn marketing_permission_resolves_path_and_acknowledges() {
    let transport = Recording::new(200, "");
    let client = client_over(transport.clone());
    let account = Account::new("acme").with_token(Token::new(TokenKind::Email, "abc"));

    let ok = MarketingPermission::new(OperationContext::new(&client, &account))
        .update("a@b.com", true)
        .await
        .unwrap();
    assert!(ok);

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::POST);
    assert_eq!(
        sent[0].url,
        "https://api.nosto.com/v1/customers/set-marketing-permission/a@b.com/true"
    );
    assert!(!sent[0].url.contains('{'));
    assert_eq!(
        sent[0].headers.get("Authorization").map(String::as_str),
        Some("Basic OmFiYw==")
    );
}

#[tokio::test]
async fn missing_token_never_reaches_transport() {
    let transport = Recording::new(200, "");
    let client = client_over(transport.clone());
    let account = Account::new("acme").with_token(Token::new(TokenKind::Sso, "abc"));

    let mut products = ProductCollection::new();
    products.append(Product::new("1", "Shirt"));

    let err = UpsertProducts::new(OperationContext::new(&client, &account))
        .upsert(&products)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::MissingToken(TokenKind::Products))
    ));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn structured_handler_rejects_malformed_body() {
    let transport = Recording::new(200, "{\"login_url\": ");
    let client = client_over(transport.clone());
    let account = Account::new("acme").with_token(Token::new(TokenKind::Sso, "abc"));

    let err = SingleSignOn::new(OperationContext::new(&client, &account))
        .login(&CurrentUser::new("jane@example.com"), "shopify")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Serialization { .. }));
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn transport_failure_is_terminal() {
    let client = client_over(Arc::new(Unreachable));
    let account = Account::new("acme").with_token(Token::new(TokenKind::Email, "abc"));

    let err = MarketingPermission::new(OperationContext::new(&client, &account))
        .update("a@b.com", false)
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    assert!(matches!(err, Error::Transport(TransportError::Other(_))));
}

#[tokio::test]
async fn reqwest_transport_against_mock_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/customers/set-marketing-permission/a@b.com/false")
        .match_header("authorization", "Basic OmFiYw==")
        .match_header("x-nosto-active-domain", "shop.example")
        .with_status(200)
        .create_async()
        .await;

    let client = NostoClient::with_endpoints(Endpoints::single_host(&server.url()).unwrap()).unwrap();
    let account = Account::new("acme").with_token(Token::new(TokenKind::Email, "abc"));
    let context = OperationContext::new(&client, &account).with_active_domain("shop.example");

    assert!(MarketingPermission::new(context)
        .update("a@b.com", false)
        .await
        .unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn api_error_envelope_from_mock_server() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/products/upsert")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"type": "bad_request", "message": "Missing product_id"}"#)
        .create_async()
        .await;

    let client = NostoClient::with_endpoints(Endpoints::single_host(&server.url()).unwrap()).unwrap();
    let account = Account::new("acme").with_token(Token::new(TokenKind::Products, "p"));

    let err = UpsertProducts::new(OperationContext::new(&client, &account))
        .upsert(&ProductCollection::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(matches!(err, Error::Api { ref code, .. } if code.as_deref() == Some("bad_request")));
}

#[tokio::test]
async fn oauth_connect_flow_against_mock_server() {
    let mut server = mockito::Server::new_async().await;
    let token = server
        .mock("GET", "/oauth/token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("code".into(), "the-code".into()),
            Matcher::UrlEncoded("client_id".into(), "cid".into()),
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"access_token": "tok", "merchant_name": "acme"}"#)
        .create_async()
        .await;
    let sync = server
        .mock("GET", "/oauth/exchange")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(r#"{"api_email": "e", "api_products": "p"}"#)
        .create_async()
        .await;

    let client = NostoClient::with_endpoints(Endpoints::single_host(&server.url()).unwrap()).unwrap();
    let meta = OAuthClientMeta::new("cid", "sec", "https://shop.example/cb");

    let access = AuthorizationCode::new(&client, &meta)
        .exchange("the-code")
        .await
        .unwrap();
    let account = AccountSync::new(&client, &access).sync().await.unwrap();

    assert_eq!(account.name(), "acme");
    assert_eq!(account.api_token(TokenKind::Email).unwrap().value(), "e");
    token.assert_async().await;
    sync.assert_async().await;
}
