//
//  nosto-sdk
//  auth/oauth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # OAuth 2.0 Client Metadata
//!
//! Platform integrations connect an existing Nosto account with the
//! authorization code flow:
//!
//! 1. **Consent**: send the merchant to [`OAuthClientMeta::authorize_url`]
//! 2. **Callback**: the OAuth server redirects back with `?code=...`
//! 3. **Exchange**: trade the code for an [`AccessToken`] with
//!    [`AuthorizationCode`](crate::operation::AuthorizationCode)
//! 4. **Sync**: trade the access token for the account's API tokens with
//!    [`AccountSync`](crate::operation::AccountSync)
//!
//! ## Example
//!
//! ```rust
//! use nosto_sdk::auth::OAuthClientMeta;
//! use nosto_sdk::config::Endpoints;
//!
//! let meta = OAuthClientMeta::new("client", "secret", "https://shop.example/nosto/callback");
//! let url = meta.authorize_url(&Endpoints::default()).unwrap();
//! assert!(url.starts_with("https://my.nosto.com/oauth?client_id=client&"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::request::{resolve_template, PATH_AUTH};
use crate::config::Endpoints;
use crate::error::ConfigurationError;

use super::TokenKind;

/// Prefix the OAuth server uses for API token scopes.
pub const API_SCOPE_PREFIX: &str = "api_";

/// OAuth client registration of a platform integration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthClientMeta {
    pub client_id: String,

    pub client_secret: String,

    pub redirect_url: String,

    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,

    #[serde(default = "default_language")]
    pub language: String,
}

fn default_scopes() -> Vec<String> {
    TokenKind::ALL
        .iter()
        .map(|kind| format!("{}{}", API_SCOPE_PREFIX, kind))
        .collect()
}

fn default_language() -> String {
    "en".to_string()
}

impl OAuthClientMeta {
    /// Creates client metadata requesting every API token scope, in English.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_url: redirect_url.into(),
            scopes: default_scopes(),
            language: default_language(),
        }
    }

    /// Builds the consent page URL for the merchant's browser.
    ///
    /// # Errors
    ///
    /// Fails only if the template and replacement set fall out of sync.
    pub fn authorize_url(&self, endpoints: &Endpoints) -> Result<String, ConfigurationError> {
        let params: BTreeMap<String, String> = [
            ("{cid}", self.client_id.clone()),
            ("{uri}", self.redirect_url.clone()),
            ("{sc}", self.scopes.join(" ")),
            ("{iso}", self.language.clone()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let query = resolve_template(PATH_AUTH, &params)?;
        Ok(format!("{}{}", endpoints.oauth_base_url(), query))
    }
}

impl fmt::Debug for OAuthClientMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthClientMeta")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_url", &self.redirect_url)
            .field("scopes", &self.scopes)
            .field("language", &self.language)
            .finish()
    }
}

/// Result of a successful authorization code exchange.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    /// Bearer token for the follow-up token sync
    pub access_token: String,
    /// The account the merchant authorized
    pub merchant_name: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"***")
            .field("merchant_name", &self.merchant_name)
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url_encodes_every_value() {
        let meta = OAuthClientMeta::new("cid-1", "sec", "https://shop.example/cb?a=1");
        let url = meta.authorize_url(&Endpoints::default()).unwrap();
        assert_eq!(
            url,
            "https://my.nosto.com/oauth?client_id=cid-1\
             &redirect_uri=https:%2F%2Fshop.example%2Fcb%3Fa%3D1\
             &response_type=code\
             &scope=api_sso%20api_products%20api_rates%20api_settings%20api_email%20api_apps\
             &lang=en"
        );
    }

    #[test]
    fn test_debug_hides_secrets() {
        let meta = OAuthClientMeta::new("cid", "top-secret", "https://x");
        assert!(!format!("{:?}", meta).contains("top-secret"));

        let token: AccessToken =
            serde_json::from_str(r#"{"access_token": "tok", "merchant_name": "acme"}"#).unwrap();
        assert!(!format!("{:?}", token).contains("tok\""));
        assert_eq!(token.merchant_name, "acme");
    }
}
