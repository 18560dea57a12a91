//
//  nosto-sdk
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Builder
//!
//! A [`Request`] collects everything needed for one call: base URL, path
//! template, placeholder replacements, content type, headers. Dispatching it
//! with [`Request::get`], [`Request::post`] or [`Request::post_raw`] resolves
//! the template, encodes the body and performs exactly one transport call.
//!
//! ## Path Templates
//!
//! Templates contain `{name}` markers that are replaced by literal string
//! substitution. The replacement map is keyed by the full marker, braces
//! included, so `{email}` maps to the customer's address:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use nosto_sdk::api::request::{resolve_template, PATH_MARKETING_PERMISSION};
//!
//! let mut params = BTreeMap::new();
//! params.insert("{email}".to_string(), "jane@example.com".to_string());
//! params.insert("{state}".to_string(), "true".to_string());
//!
//! let path = resolve_template(PATH_MARKETING_PERMISSION, &params).unwrap();
//! assert_eq!(path, "/v1/customers/set-marketing-permission/jane@example.com/true");
//! ```
//!
//! A marker left without a replacement is a configuration error; the request
//! is never sent with a literal `{...}` in its URL.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine};
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

use crate::config::Endpoints;
use crate::error::{ConfigurationError, Error, Result};

use super::transport::{Headers, HttpResponse, Transport};

/// Product upsert endpoint (API).
pub const PATH_PRODUCTS_UPSERT: &str = "/v1/products/upsert";
/// Product discontinuation endpoint (API).
pub const PATH_PRODUCTS_DISCONTINUE: &str = "/v1/products/discontinue";
/// Currency exchange rate endpoint (API).
pub const PATH_CURRENCY_EXCHANGE_RATE: &str = "/exchangerates";
/// Account settings endpoint (API).
pub const PATH_SETTINGS: &str = "/settings";
/// Marketing permission endpoint (API).
pub const PATH_MARKETING_PERMISSION: &str = "/v1/customers/set-marketing-permission/{email}/{state}";
/// Single sign-on endpoint (API).
pub const PATH_SSO_AUTH: &str = "/users/sso/{platform}";
/// GraphQL endpoint (API).
pub const PATH_GRAPHQL: &str = "/v1/graphql";
/// Matched order confirmation (webhook).
pub const PATH_ORDER_TAGGING: &str = "/visits/order/confirm/{m}/{cid}";
/// Unmatched order confirmation (webhook).
pub const PATH_UNMATCHED_ORDER_TAGGING: &str = "/visits/order/unmatched/{m}";
/// Uninstall notification (webhook).
pub const PATH_ACCOUNT_DELETED: &str = "/hub/uninstall";
/// OAuth token sync (webhook).
pub const PATH_OAUTH_SYNC: &str = "/oauth/exchange";
/// OAuth consent page (OAuth).
pub const PATH_AUTH: &str = "?client_id={cid}&redirect_uri={uri}&response_type=code&scope={sc}&lang={iso}";
/// OAuth authorization code exchange (OAuth).
pub const PATH_TOKEN: &str =
    "/token?code={cod}&client_id={cid}&client_secret={sec}&redirect_uri={uri}&grant_type=authorization_code";

/// Header carrying the active domain in multi-store deployments.
pub const HEADER_ACTIVE_DOMAIN: &str = "X-Nosto-Active-Domain";

/// Any brace-delimited marker. Replacement values have `{` and `}` encoded,
/// so a match is always a template leftover.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^{}]+\}").expect("placeholder pattern is valid"));

/// Characters escaped in replacement values. `@`, `:` and other path-safe
/// characters stay literal.
const REPLACEMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Which endpoint family a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// The REST API, authenticated with an account token
    Api,
    /// The OAuth server
    OAuth,
    /// The public webhook host (order tagging, uninstall, token sync)
    Webhook,
}

impl RequestKind {
    /// Selects the configured base URL for this request kind.
    pub fn base_url<'e>(&self, endpoints: &'e Endpoints) -> &'e str {
        match self {
            Self::Api => endpoints.api_base_url(),
            Self::OAuth => endpoints.oauth_base_url(),
            Self::Webhook => endpoints.web_hook_base_url(),
        }
    }
}

/// Body encoding declared by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// `application/json`
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`
    FormUrlEncoded,
}

impl ContentType {
    /// The MIME type sent in the `Content-Type` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

/// Substitutes every `{placeholder}` in `template`.
///
/// Values are percent-encoded for URL use before substitution.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnresolvedPlaceholder`] for the first marker
/// that has no replacement.
pub fn resolve_template(
    template: &str,
    params: &BTreeMap<String, String>,
) -> std::result::Result<String, ConfigurationError> {
    let mut resolved = template.to_string();
    for (placeholder, value) in params {
        let encoded = utf8_percent_encode(value, REPLACEMENT).to_string();
        resolved = resolved.replace(placeholder.as_str(), &encoded);
    }

    match PLACEHOLDER.find(&resolved) {
        Some(leftover) => Err(ConfigurationError::UnresolvedPlaceholder {
            placeholder: leftover.as_str().to_string(),
            template: template.to_string(),
        }),
        None => Ok(resolved),
    }
}

/// Mutable builder state for a single HTTP call.
///
/// A request borrows the transport; it is not meant to be shared between
/// concurrent calls.
pub struct Request<'t> {
    transport: &'t dyn Transport,
    base_url: String,
    path: String,
    replace_params: BTreeMap<String, String>,
    content_type: ContentType,
    headers: Headers,
}

impl<'t> Request<'t> {
    /// Creates an empty request against `base_url`.
    pub fn new(transport: &'t dyn Transport, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            path: String::new(),
            replace_params: BTreeMap::new(),
            content_type: ContentType::default(),
            headers: Headers::new(),
        }
    }

    /// Sets the path template.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// The unresolved path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The base URL this request targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Declares the body encoding.
    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
    }

    /// The declared body encoding.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Adds or replaces a header.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// HTTP Basic authentication.
    pub fn set_auth_basic(&mut self, username: &str, password: &str) {
        let encoded = STANDARD.encode(format!("{}:{}", username, password));
        self.add_header("Authorization", format!("Basic {}", encoded));
    }

    /// Bearer token authentication.
    pub fn set_auth_bearer(&mut self, token: &str) {
        self.add_header("Authorization", format!("Bearer {}", token));
    }

    /// Merges placeholder replacements; later values win for the same key.
    pub fn set_replace_params<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.replace_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// The current placeholder replacements.
    pub fn replace_params(&self) -> &BTreeMap<String, String> {
        &self.replace_params
    }

    /// Resolves the full URL without sending anything.
    pub fn url(&self) -> std::result::Result<String, ConfigurationError> {
        let path = resolve_template(&self.path, &self.replace_params)?;
        Ok(format!("{}{}", self.base_url, path))
    }

    /// Sends a GET request.
    pub async fn get(&self) -> Result<HttpResponse> {
        self.dispatch(Method::GET, Vec::new()).await
    }

    /// Sends a POST with a pre-encoded body, passed through as-is.
    pub async fn post_raw(&self, body: impl Into<String>) -> Result<HttpResponse> {
        self.dispatch(Method::POST, body.into().into_bytes()).await
    }

    /// Serializes `body` according to the content type and sends a POST.
    pub async fn post<B: Serialize + ?Sized>(&self, body: &B) -> Result<HttpResponse> {
        let encoded = match self.content_type {
            ContentType::Json => {
                serde_json::to_vec(body).map_err(|e| Error::serialization("request body", e))?
            }
            ContentType::FormUrlEncoded => encode_form(body)?.into_bytes(),
        };
        self.dispatch(Method::POST, encoded).await
    }

    async fn dispatch(&self, method: Method, body: Vec<u8>) -> Result<HttpResponse> {
        let url = self.url()?;

        let mut headers = self.headers.clone();
        if method != Method::GET {
            headers.insert(
                "Content-Type".to_string(),
                self.content_type.as_str().to_string(),
            );
        }
        validate_headers(&headers)?;

        // Resolved URLs can carry client secrets; log the template instead.
        tracing::debug!("{} {}{} ({} byte body)", method, self.base_url, self.path, body.len());
        let response = self.transport.send(&method, &url, &headers, &body).await?;
        tracing::debug!("{} {}{} returned {}", method, self.base_url, self.path, response.status());

        Ok(response)
    }
}

/// Checks that every header can go on the wire.
///
/// The value is left out of the error; it is often a credential.
fn validate_headers(headers: &Headers) -> std::result::Result<(), ConfigurationError> {
    for (name, value) in headers {
        if HeaderName::from_bytes(name.as_bytes()).is_err() || HeaderValue::from_str(value).is_err() {
            return Err(ConfigurationError::InvalidHeader { name: name.clone() });
        }
    }
    Ok(())
}

/// Encodes a flat serializable object as `application/x-www-form-urlencoded`.
fn encode_form<B: Serialize + ?Sized>(body: &B) -> Result<String> {
    let value = serde_json::to_value(body).map_err(|e| Error::serialization("form body", e))?;
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    if let serde_json::Value::Object(fields) = value {
        for (key, field) in fields {
            match field {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => {
                    serializer.append_pair(&key, &s);
                }
                other => {
                    serializer.append_pair(&key, &other.to_string());
                }
            }
        }
    }
    Ok(serializer.finish())
}
