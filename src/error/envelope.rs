use std::fmt;

use axum::http::StatusCode;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::models::Product;

pub const INVALID_PRODUCT_ID: &str = "Invalid product ID";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const INVALID_REQUEST_PAYLOAD: &str = "Invalid request payload";

/// Message and status pair carried in the `err` field of an [`Envelope`].
///
/// On the wire the error is just its message as a JSON string, or `null`
/// when unset. The status code only drives the HTTP status line, so an error
/// decoded from JSON has no status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseError {
    message: Option<String>,
    status: Option<StatusCode>,
}

impl ResponseError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: Some(message.into()),
            status: Some(status),
        }
    }

    /// Empty string when no error is set.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ResponseError {}

impl Serialize for ResponseError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.message {
            Some(message) => serializer.serialize_str(message),
            None => serializer.serialize_none(),
        }
    }
}

struct ResponseErrorVisitor;

impl<'de> Visitor<'de> for ResponseErrorVisitor {
    type Value = ResponseError;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an error message string or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ResponseError {
            message: Some(v.to_owned()),
            status: None,
        })
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ResponseError {
            message: Some(v),
            status: None,
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ResponseError::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ResponseError::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Deserialize<'de> for ResponseError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ResponseErrorVisitor)
    }
}

/// Top-level JSON wrapper: either a product list or an error message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub err: ResponseError,
}

impl Envelope {
    pub fn failure(err: ResponseError) -> Self {
        Self {
            products: None,
            err,
        }
    }

    pub fn error(&self) -> &str {
        self.err.message()
    }
}
