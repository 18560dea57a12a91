//
//  nosto-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Nosto SDK
//!
//! A client for the Nosto personalization platform: it turns typed payloads
//! (products, orders, exchange rates, settings) into authenticated,
//! templated HTTP requests and interprets the responses into typed results
//! or typed errors.
//!
//! ## Module Structure
//!
//! - [`operation`]: one type per use-case, built on the [`operation::Operation`] trait
//! - [`api`]: transport, request builder, result handlers and [`api::NostoClient`]
//! - [`auth`]: accounts, API tokens and OAuth client metadata
//! - [`model`]: wire-format domain objects and [`model::Collection`]
//! - [`config`]: endpoint overrides and the CLI configuration file
//! - [`cli`]: the `nosto` command-line interface
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nosto_sdk::api::NostoClient;
//! use nosto_sdk::auth::{Account, Token, TokenKind};
//! use nosto_sdk::model::{Product, ProductCollection};
//! use nosto_sdk::operation::{OperationContext, UpsertProducts};
//!
//! # async fn example() -> nosto_sdk::Result<()> {
//! let client = NostoClient::new()?;
//! let account = Account::new("shopify-1234")
//!     .with_token(Token::new(TokenKind::Products, "products-token"));
//!
//! let mut products = ProductCollection::new();
//! products.append(Product::new("sku-1", "Shirt"));
//!
//! UpsertProducts::new(OperationContext::new(&client, &account))
//!     .upsert(&products)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Error::Configuration`] | missing token, unresolved placeholder, bad base URL; before any request |
//! | [`Error::Transport`] | connection failure or timeout |
//! | [`Error::Http`] | non-2xx response without a recognised error body |
//! | [`Error::Api`] | the platform returned an error envelope |
//! | [`Error::Serialization`] | a body could not be encoded or decoded |

/// Command-line interface definitions.
pub mod cli;

/// Transport, request building and response interpretation.
pub mod api;

/// Accounts, API tokens and OAuth client metadata.
pub mod auth;

/// Endpoint configuration and the CLI configuration file.
pub mod config;

/// Error types.
pub mod error;

/// Domain objects in their wire format.
pub mod model;

/// Authenticated use-cases.
pub mod operation;

pub use cli::Cli;
pub use error::{ConfigurationError, Error, Result, TransportError};

/// Application version, from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the `nosto` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Missing token, unresolved placeholder or invalid endpoint.
    pub const CONFIG_ERROR: i32 = 3;

    /// The platform rejected the credentials (401 or 403).
    pub const AUTH_ERROR: i32 = 4;

    /// The platform returned another error response.
    pub const API_ERROR: i32 = 8;

    /// The request never completed.
    pub const TRANSPORT_ERROR: i32 = 32;
}
