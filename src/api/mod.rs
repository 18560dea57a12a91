//
//  nosto-sdk
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! The plumbing shared by every operation:
//!
//! - [`transport`]: the [`Transport`] capability, its `reqwest` implementation
//!   and [`HttpResponse`]
//! - [`request`]: the [`Request`] builder, path templates and constants
//! - [`result`]: the [`ResultHandler`] family that interprets responses
//! - [`client`]: [`NostoClient`], transport plus endpoint configuration
//!
//! ## Flow
//!
//! ```text
//! operation ──► Request (template + token) ──► Transport::send ──► ResultHandler ──► T | Error
//! ```

/// Shared transport and endpoint configuration.
pub mod client;

/// Request builder and path templates.
pub mod request;

/// Response interpretation.
pub mod result;

/// HTTP exchange capability.
pub mod transport;

pub use client::NostoClient;
pub use request::{ContentType, Request, RequestKind};
pub use result::{
    GeneralPurposeResultHandler, GraphQlResultHandler, JsonResultHandler, ResultHandler,
    GENERAL_PURPOSE,
};
pub use transport::{Headers, HttpResponse, ReqwestTransport, Transport};
