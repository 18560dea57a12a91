//
//  nosto-sdk
//  config/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Endpoint Configuration
//!
//! Base URLs for the three endpoint families. Production values are the
//! defaults; staging or local deployments override them through environment
//! variables read once when the [`Endpoints`] value is built:
//!
//! | Variable | Endpoint | Default |
//! |----------|----------|---------|
//! | `NOSTO_API_BASE_URL` | REST API | `https://api.nosto.com` |
//! | `NOSTO_OAUTH_BASE_URL` | OAuth server | `https://my.nosto.com/oauth` |
//! | `NOSTO_WEB_HOOK_BASE_URL` | webhook host | `https://my.nosto.com` |

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigurationError;

/// Default REST API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.nosto.com";
/// Default OAuth base URL.
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://my.nosto.com/oauth";
/// Default webhook base URL.
pub const DEFAULT_WEB_HOOK_BASE_URL: &str = "https://my.nosto.com";

/// Environment variable overriding the API base URL.
pub const ENV_API_BASE_URL: &str = "NOSTO_API_BASE_URL";
/// Environment variable overriding the OAuth base URL.
pub const ENV_OAUTH_BASE_URL: &str = "NOSTO_OAUTH_BASE_URL";
/// Environment variable overriding the webhook base URL.
pub const ENV_WEB_HOOK_BASE_URL: &str = "NOSTO_WEB_HOOK_BASE_URL";

/// Base URLs used by every operation.
///
/// Treated as read-only once a [`NostoClient`](crate::api::NostoClient) owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_api_base_url")]
    api_base_url: String,

    #[serde(default = "default_oauth_base_url")]
    oauth_base_url: String,

    #[serde(default = "default_web_hook_base_url")]
    web_hook_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_oauth_base_url() -> String {
    DEFAULT_OAUTH_BASE_URL.to_string()
}

fn default_web_hook_base_url() -> String {
    DEFAULT_WEB_HOOK_BASE_URL.to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            oauth_base_url: default_oauth_base_url(),
            web_hook_base_url: default_web_hook_base_url(),
        }
    }
}

impl Endpoints {
    /// Defaults with the `NOSTO_*_BASE_URL` environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Defaults with overrides taken from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup)
    }

    /// Applies overrides from `lookup` on top of the current values.
    pub fn with_overrides<F>(self, lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut endpoints = self;
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            endpoints = endpoints.with_api_base_url(&url)?;
        }
        if let Some(url) = lookup(ENV_OAUTH_BASE_URL) {
            endpoints = endpoints.with_oauth_base_url(&url)?;
        }
        if let Some(url) = lookup(ENV_WEB_HOOK_BASE_URL) {
            endpoints = endpoints.with_web_hook_base_url(&url)?;
        }
        Ok(endpoints)
    }

    /// Overrides the REST API base URL.
    pub fn with_api_base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.api_base_url = validate("api", url)?;
        Ok(self)
    }

    /// Overrides the OAuth base URL.
    pub fn with_oauth_base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.oauth_base_url = validate("oauth", url)?;
        Ok(self)
    }

    /// Overrides the webhook base URL.
    pub fn with_web_hook_base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.web_hook_base_url = validate("web hook", url)?;
        Ok(self)
    }

    /// Points all three endpoint families at one host, the way a local
    /// mock server or staging proxy is usually set up.
    pub fn single_host(base: &str) -> Result<Self, ConfigurationError> {
        let base = validate("single host", base)?;
        Ok(Self {
            api_base_url: base.clone(),
            oauth_base_url: format!("{}/oauth", base),
            web_hook_base_url: base,
        })
    }

    /// Re-validates values that came from a deserialized file.
    pub fn validated(self) -> Result<Self, ConfigurationError> {
        Ok(Self {
            api_base_url: validate("api", &self.api_base_url)?,
            oauth_base_url: validate("oauth", &self.oauth_base_url)?,
            web_hook_base_url: validate("web hook", &self.web_hook_base_url)?,
        })
    }

    /// The REST API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// The OAuth base URL.
    pub fn oauth_base_url(&self) -> &str {
        &self.oauth_base_url
    }

    /// The webhook base URL.
    pub fn web_hook_base_url(&self) -> &str {
        &self.web_hook_base_url
    }
}

fn validate(name: &str, value: &str) -> Result<String, ConfigurationError> {
    let trimmed = value.trim().trim_end_matches('/');
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(trimmed.to_string())
        }
        _ => Err(ConfigurationError::InvalidBaseUrl {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
