//
//  nosto-sdk
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Nosto Client
//!
//! [`NostoClient`] bundles what every operation shares: the transport that
//! performs HTTP exchanges and the endpoint configuration that selects base
//! URLs. It carries no per-request state, so one client can serve many
//! operations, including concurrent ones on separate tasks.
//!
//! ```rust,no_run
//! use nosto_sdk::api::NostoClient;
//!
//! // Production endpoints, with NOSTO_*_BASE_URL overrides applied
//! let client = NostoClient::new()?;
//! println!("API at {}", client.endpoints().api_base_url());
//! # Ok::<(), nosto_sdk::Error>(())
//! ```

use std::sync::Arc;

use crate::config::Endpoints;
use crate::error::Result;

use super::transport::{ReqwestTransport, Transport};

/// Shared transport and endpoint configuration for operations.
#[derive(Clone)]
pub struct NostoClient {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl NostoClient {
    /// Creates a client using [`ReqwestTransport`] and [`Endpoints::from_env`].
    ///
    /// # Errors
    ///
    /// Fails if an environment override is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_endpoints(Endpoints::from_env()?)
    }

    /// Creates a client using [`ReqwestTransport`] and explicit endpoints.
    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(Arc::new(transport), endpoints))
    }

    /// Creates a client over any transport implementation.
    pub fn with_transport(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// The endpoint configuration.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The transport used for every request.
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl std::fmt::Debug for NostoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NostoClient")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
