//
//  nosto-sdk
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Transport Layer
//!
//! The request builder never touches sockets. It hands a fully resolved
//! method, URL, header set and body to a [`Transport`] and receives an
//! [`HttpResponse`] back. [`ReqwestTransport`] is the production
//! implementation; tests plug in recording doubles.
//!
//! Timeouts, connection pooling and TLS belong to the transport. A transport
//! failure is terminal for the call that triggered it: nothing above this
//! layer retries.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result, TransportError};

/// Header names mapped to values. A repeated response header holds every
/// value, joined with `", "`.
pub type Headers = BTreeMap<String, String>;

/// Default timeout applied by [`ReqwestTransport::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A raw HTTP response: status, headers and body, immutable once received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    headers: Headers,
    body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response. Header names are stored lower-cased.
    pub fn new(status: u16, headers: Headers, body: impl Into<Vec<u8>>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// All response headers, lower-cased names.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| Error::serialization("response body", e))
    }
}

/// The byte-level HTTP exchange capability the SDK depends on.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one request and returns the full response.
    async fn send(
        &self,
        method: &Method,
        url: &str,
        headers: &Headers,
        body: &[u8],
    ) -> std::result::Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the SDK user agent and [`DEFAULT_TIMEOUT`].
    pub fn new() -> std::result::Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a transport with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> std::result::Result<Self, TransportError> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("nosto-sdk/{}", crate::VERSION))
                .timeout(timeout)
                .build()?,
        })
    }

    /// Wraps an already configured client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        method: &Method,
        url: &str,
        headers: &Headers,
        body: &[u8],
    ) -> std::result::Result<HttpResponse, TransportError> {
        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::Other(format!("invalid header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::Other(format!("invalid value for header {}: {}", name, e)))?;
            header_map.insert(name, value);
        }

        let mut request = self.http.request(method.clone(), url).headers(header_map);
        if !(body.is_empty() && *method == Method::GET) {
            request = request.body(body.to_vec());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, headers, body.to_vec()))
    }
}

/// Flattens a header map. Repeated headers are joined with `", "`; values
/// that are not visible ASCII are dropped.
fn collect_headers(map: &HeaderMap) -> Headers {
    let mut headers = Headers::new();
    for (name, value) in map {
        let Ok(value) = value.to_str() else {
            continue;
        };
        headers
            .entry(name.as_str().to_string())
            .and_modify(|joined: &mut String| {
                joined.push_str(", ");
                joined.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    headers
}
