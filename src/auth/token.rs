//
//  nosto-sdk
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Token Module
//!
//! Nosto issues one API token per scope. Each operation declares the single
//! scope ([`TokenKind`]) it needs, and the account resolves the matching
//! [`Token`] before any request is built.
//!
//! | Kind | Name | Used for |
//! |------|------|----------|
//! | [`TokenKind::Sso`] | `sso` | single sign-on, uninstall notifications |
//! | [`TokenKind::Products`] | `products` | product upserts and discontinuation |
//! | [`TokenKind::Rates`] | `rates` | currency exchange rate sync |
//! | [`TokenKind::Settings`] | `settings` | account settings sync |
//! | [`TokenKind::Email`] | `email` | customer marketing permission |
//! | [`TokenKind::Apps`] | `apps` | GraphQL recommendation queries |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Enumerated credential scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Single sign-on into the Nosto admin
    Sso,
    /// Product catalog updates
    Products,
    /// Currency exchange rates
    Rates,
    /// Account settings
    Settings,
    /// Customer email and marketing permission
    Email,
    /// GraphQL apps API
    Apps,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 6] = [
        Self::Sso,
        Self::Products,
        Self::Rates,
        Self::Settings,
        Self::Email,
        Self::Apps,
    ];

    /// The wire name of the kind, as used by the platform's signup response.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sso => "sso",
            Self::Products => "products",
            Self::Rates => "rates",
            Self::Settings => "settings",
            Self::Email => "email",
            Self::Apps => "apps",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown token kind: {}", s))
    }
}

/// A scoped API credential.
///
/// The value is never printed by `Debug` so tokens do not leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: String,
}

impl Token {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The scope this token grants.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The raw secret.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("kind", &self.kind)
            .field("value", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_round_trips_through_name() {
        for kind in TokenKind::ALL {
            assert_eq!(kind.as_str().parse::<TokenKind>().unwrap(), kind);
        }
        assert_eq!("EMAIL".parse::<TokenKind>().unwrap(), TokenKind::Email);
        assert!("graphql".parse::<TokenKind>().is_err());
    }

    #[test]
    fn test_token_debug_hides_value() {
        let token = Token::new(TokenKind::Sso, "secret-value");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("secret-value"));
        assert!(debug.contains("Sso"));
    }
}
