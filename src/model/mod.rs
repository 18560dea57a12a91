//
//  nosto-sdk
//  model/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Domain Model
//!
//! Payload types in the platform's wire format, and the generic
//! [`Collection`] used to batch them.
//!
//! | Type | Sent by |
//! |------|---------|
//! | [`ProductCollection`] | [`UpsertProducts`](crate::operation::UpsertProducts) |
//! | [`Order`] | [`OrderConfirm`](crate::operation::OrderConfirm) |
//! | [`ExchangeRates`] | [`SyncRates`](crate::operation::SyncRates) |
//! | [`Settings`] | [`UpdateSettings`](crate::operation::UpdateSettings) |
//! | [`CurrentUser`] | [`SingleSignOn`](crate::operation::SingleSignOn), [`Uninstall`](crate::operation::Uninstall) |

mod collection;
mod exchange_rate;
mod order;
mod product;
mod settings;
mod user;

pub use collection::*;
pub use exchange_rate::*;
pub use order::*;
pub use product::*;
pub use settings::*;
pub use user::*;
