//
//  nosto-sdk
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials used by operations:
//!
//! - [`token`]: scoped API tokens and their [`TokenKind`]
//! - [`account`]: the [`Account`] that stores one token per kind
//! - [`oauth`]: OAuth client metadata and the [`AccessToken`] returned by the
//!   authorization code exchange
//!
//! ## Example
//!
//! ```rust
//! use nosto_sdk::auth::{Account, Token, TokenKind};
//!
//! let mut account = Account::new("magento-1a2b3c");
//! account.add_token(Token::new(TokenKind::Products, "prod-token"));
//! account.add_token(Token::new(TokenKind::Rates, "rates-token"));
//!
//! assert_eq!(account.api_token(TokenKind::Rates).unwrap().value(), "rates-token");
//! ```

mod account;
mod oauth;
mod token;

pub use account::*;
pub use oauth::*;
pub use token::*;
