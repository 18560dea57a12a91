//
//  nosto-sdk
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Two layers of configuration:
//!
//! - [`Endpoints`]: base URLs shared by every operation, with environment
//!   overrides. This is all the library itself needs.
//! - [`Config`]: the `nosto` CLI's TOML file holding accounts, their tokens
//!   and the OAuth client registration.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/nosto/config.toml`
//! - **macOS**: `~/Library/Application Support/com.nosto.nosto/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\nosto\nosto\config\config.toml`
//!
//! `--config` (or `NOSTO_CONFIG`) points the CLI at another file.
//!
//! ## Example Configuration File
//!
//! ```toml
//! default_account = "shopify-1234"
//!
//! [endpoints]
//! api_base_url = "https://api.nosto.com"
//!
//! [oauth]
//! client_id = "my-integration"
//! client_secret = "s3cret"
//! redirect_url = "https://shop.example/nosto/callback"
//!
//! [accounts.shopify-1234.tokens]
//! products = "..."
//! email = "..."
//! sso = "..."
//! ```

mod endpoints;

pub use endpoints::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::auth::{Account, OAuthClientMeta, Token, TokenKind};

/// The CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Account used when `--account` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_account: Option<String>,

    /// Endpoint overrides; environment variables still win
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Endpoints>,

    /// OAuth client registration for `nosto oauth`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth: Option<OAuthClientMeta>,

    /// Accounts by name
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountConfig>,
}

/// One account's tokens, keyed by token kind name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
}

impl Config {
    /// Loads the file at [`Config::config_path`], or defaults if it does
    /// not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Writes the configuration, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "nosto", "nosto")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Builds the named account from its configured tokens.
    ///
    /// # Errors
    ///
    /// Fails if the account is not configured or a token key is not a known
    /// token kind.
    pub fn account(&self, name: &str) -> Result<Account> {
        let config = self
            .accounts
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Account '{}' is not configured", name))?;

        let mut account = Account::new(name);
        for (kind, value) in &config.tokens {
            let kind: TokenKind = kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .with_context(|| format!("Invalid token for account '{}'", name))?;
            account.add_token(Token::new(kind, value.as_str()));
        }
        Ok(account)
    }

    /// Stores every token of `account`, replacing the previous entry.
    pub fn set_account(&mut self, account: &Account) {
        let tokens = account
            .tokens()
            .map(|token| (token.kind().to_string(), token.value().to_string()))
            .collect();
        self.accounts
            .insert(account.name().to_string(), AccountConfig { tokens });
    }

    /// File endpoints (or defaults) with environment overrides applied.
    pub fn endpoints(&self) -> Result<Endpoints> {
        let base = match &self.endpoints {
            Some(endpoints) => endpoints.clone().validated()?,
            None => Endpoints::default(),
        };
        Ok(base.with_overrides(|name| std::env::var(name).ok())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
default_account = "acme"

[endpoints]
api_base_url = "http://localhost:9000/"

[oauth]
client_id = "cid"
client_secret = "sec"
redirect_url = "https://shop.example/cb"

[accounts.acme.tokens]
products = "p"
EMAIL = "e"
"#;

    #[test]
    fn test_parse_sample() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.default_account.as_deref(), Some("acme"));

        let account = config.account("acme").unwrap();
        assert_eq!(account.api_token(TokenKind::Products).unwrap().value(), "p");
        assert_eq!(account.api_token(TokenKind::Email).unwrap().value(), "e");
        assert!(!account.has_token(TokenKind::Sso));

        let oauth = config.oauth.unwrap();
        assert_eq!(oauth.language, "en");
        assert_eq!(oauth.scopes.len(), TokenKind::ALL.len());
    }

    #[test]
    fn test_unknown_account_and_token_kind() {
        let mut config: Config = toml::from_str(SAMPLE).unwrap();
        assert!(config.account("other").is_err());

        config
            .accounts
            .get_mut("acme")
            .unwrap()
            .tokens
            .insert("bogus".to_string(), "x".to_string());
        assert!(config.account("acme").is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_account(
            &Account::new("acme").with_token(Token::new(TokenKind::Rates, "r")),
        );
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.account("acme").unwrap().api_token(TokenKind::Rates).unwrap().value(), "r");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.accounts.is_empty());
    }
}
