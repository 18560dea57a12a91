//
//  nosto-sdk
//  api/result.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Result Handlers
//!
//! A [`ResultHandler`] turns a raw [`HttpResponse`] into the typed output of
//! an operation, or into an [`Error`]. Each operation names its handler type
//! statically, so there is no runtime switching on the body shape.
//!
//! | Handler | Success | Output |
//! |---------|---------|--------|
//! | [`GeneralPurposeResultHandler`] | any 2xx | `true` |
//! | [`JsonResultHandler<T>`] | 2xx with a JSON body decodable as `T` | `T` |
//! | [`GraphQlResultHandler`] | 2xx with `data` and no `errors` | the `data` value |
//!
//! ## Error Envelopes
//!
//! For non-2xx responses [`error_from_response`] looks for one of the
//! platform's error bodies and raises [`Error::Api`]; a body it does not
//! recognise raises [`Error::Http`]:
//!
//! ```json
//! {"type": "bad_request", "message": "Invalid email"}
//! {"error": "invalid_grant", "error_description": "Code expired"}
//! {"errors": [{"message": "Unknown field"}]}
//! {"message": "Something failed"}
//! ```

use std::marker::PhantomData;

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::error::{Error, Result};

use super::transport::HttpResponse;

/// Interprets a response for one operation.
pub trait ResultHandler {
    /// The typed success value.
    type Output;

    /// Decides success or failure and produces the result.
    fn interpret(&self, response: &HttpResponse) -> Result<Self::Output>;
}

/// Any 2xx is an acknowledgment, everything else is an error.
///
/// The handler is stateless; [`GENERAL_PURPOSE`] can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralPurposeResultHandler;

/// Shared general purpose handler instance.
pub const GENERAL_PURPOSE: GeneralPurposeResultHandler = GeneralPurposeResultHandler;

impl ResultHandler for GeneralPurposeResultHandler {
    type Output = bool;

    fn interpret(&self, response: &HttpResponse) -> Result<bool> {
        if response.is_success() {
            Ok(true)
        } else {
            Err(error_from_response(response))
        }
    }
}

/// Decodes a JSON body into `T`.
///
/// A 2xx body that carries an OAuth style `error` field is still a failure.
#[derive(Debug)]
pub struct JsonResultHandler<T> {
    _output: PhantomData<fn() -> T>,
}

impl<T> JsonResultHandler<T> {
    /// Creates the handler.
    pub const fn new() -> Self {
        Self {
            _output: PhantomData,
        }
    }
}

impl<T> Default for JsonResultHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonResultHandler<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for JsonResultHandler<T> {}

impl<T: DeserializeOwned> ResultHandler for JsonResultHandler<T> {
    type Output = T;

    fn interpret(&self, response: &HttpResponse) -> Result<T> {
        if !response.is_success() {
            return Err(error_from_response(response));
        }

        let value: Value = response.json()?;
        if let Some(err) = oauth_error(response.status(), &value) {
            return Err(err);
        }

        serde_json::from_value(value).map_err(|e| Error::serialization("response payload", e))
    }
}

/// Unwraps a GraphQL response envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphQlResultHandler;

impl ResultHandler for GraphQlResultHandler {
    type Output = Value;

    fn interpret(&self, response: &HttpResponse) -> Result<Value> {
        if !response.is_success() {
            return Err(error_from_response(response));
        }

        let mut value: Value = response.json()?;
        if let Some(err) = graphql_error(response.status(), &value) {
            return Err(err);
        }

        match value.get_mut("data").map(Value::take) {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(Error::serialization(
                "graphql response",
                serde_json::Error::custom("missing `data` field"),
            )),
        }
    }
}

/// Builds the error for a failed response.
///
/// Returns [`Error::Api`] when the body is one of the recognised error
/// envelopes and [`Error::Http`] otherwise.
pub fn error_from_response(response: &HttpResponse) -> Error {
    let status = response.status();
    let body = response.text().into_owned();

    if let Ok(json) = serde_json::from_str::<Value>(&body) {
        let err = rest_error(status, &json)
            .or_else(|| oauth_error(status, &json))
            .or_else(|| graphql_error(status, &json))
            .or_else(|| message_error(status, &json));
        if let Some(err) = err {
            return err;
        }
    }

    Error::Http { status, body }
}

// {"type": "...", "message": "..."}
fn rest_error(status: u16, json: &Value) -> Option<Error> {
    let code = json.get("type").and_then(Value::as_str)?;
    let message = json.get("message").and_then(Value::as_str)?;
    Some(Error::Api {
        status,
        code: Some(code.to_string()),
        message: message.to_string(),
    })
}

fn message_error(status: u16, json: &Value) -> Option<Error> {
    let message = json.get("message").and_then(Value::as_str)?;
    Some(Error::Api {
        status,
        code: None,
        message: message.to_string(),
    })
}

fn oauth_error(status: u16, json: &Value) -> Option<Error> {
    let code = json.get("error").and_then(Value::as_str)?;
    let message = json
        .get("error_description")
        .or_else(|| json.get("message"))
        .and_then(Value::as_str)
        .unwrap_or(code);
    Some(Error::Api {
        status,
        code: Some(code.to_string()),
        message: message.to_string(),
    })
}

fn graphql_error(status: u16, json: &Value) -> Option<Error> {
    let first = json.get("errors").and_then(Value::as_array)?.first()?;
    let message = first
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("GraphQL error");
    let code = first
        .get("extensions")
        .and_then(|e| e.get("code"))
        .and_then(Value::as_str)
        .map(String::from);
    Some(Error::Api {
        status,
        code,
        message: message.to_string(),
    })
}
