//
//  nosto-sdk
//  auth/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Account Module
//!
//! An [`Account`] identifies one Nosto tenant (its merchant name, e.g.
//! `shopify-12345`) and stores the API tokens issued to it. The token map is
//! keyed by [`TokenKind`], so an account can never hold two tokens of the same
//! kind; adding a second one replaces the first.
//!
//! ## Example
//!
//! ```rust
//! use nosto_sdk::auth::{Account, Token, TokenKind};
//!
//! let account = Account::new("shopify-12345")
//!     .with_token(Token::new(TokenKind::Email, "email-token"));
//!
//! assert!(account.api_token(TokenKind::Email).is_ok());
//! assert!(account.api_token(TokenKind::Products).is_err());
//! ```

use std::collections::BTreeMap;

use crate::error::ConfigurationError;

use super::{Token, TokenKind};

/// A Nosto tenant and its scoped API tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    name: String,
    tokens: BTreeMap<TokenKind, Token>,
}

impl Account {
    /// Creates an account without tokens.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: BTreeMap::new(),
        }
    }

    /// Builder-style [`add_token`](Self::add_token).
    pub fn with_token(mut self, token: Token) -> Self {
        self.add_token(token);
        self
    }

    /// Stores a token, replacing any previous token of the same kind.
    pub fn add_token(&mut self, token: Token) {
        if self.tokens.insert(token.kind(), token).is_some() {
            tracing::debug!("Replaced existing token on account {}", self.name);
        }
    }

    /// The merchant name of the account.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up the token of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingToken`] when the account has no
    /// token of that kind.
    pub fn api_token(&self, kind: TokenKind) -> Result<&Token, ConfigurationError> {
        self.tokens
            .get(&kind)
            .ok_or(ConfigurationError::MissingToken(kind))
    }

    /// Returns `true` if a token of the given kind is present.
    pub fn has_token(&self, kind: TokenKind) -> bool {
        self.tokens.contains_key(&kind)
    }

    /// Iterates the stored tokens in kind order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_configuration_error() {
        let account = Account::new("acme");
        assert_eq!(
            account.api_token(TokenKind::Sso),
            Err(ConfigurationError::MissingToken(TokenKind::Sso))
        );
    }

    #[test]
    fn test_last_token_of_a_kind_wins() {
        let account = Account::new("acme")
            .with_token(Token::new(TokenKind::Products, "first"))
            .with_token(Token::new(TokenKind::Products, "second"));

        assert_eq!(account.tokens().count(), 1);
        assert_eq!(
            account.api_token(TokenKind::Products).unwrap().value(),
            "second"
        );
    }

    #[test]
    fn test_tokens_are_kept_per_kind() {
        let mut account = Account::new("acme");
        account.add_token(Token::new(TokenKind::Email, "e"));
        account.add_token(Token::new(TokenKind::Rates, "r"));

        assert!(account.has_token(TokenKind::Email));
        assert!(account.has_token(TokenKind::Rates));
        assert!(!account.has_token(TokenKind::Settings));
    }
}
