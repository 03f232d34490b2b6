use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{AppError, Result};

pub const PRICE_SCALE: u32 = 2;
/// Largest value the `NUMERIC(10, 2)` price column holds.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, PRICE_SCALE);
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "price_from_number"
    )]
    pub price: Decimal,
}

/// Accepts JSON numbers only. The shortest decimal form of the float is kept,
/// so `1.005` stays `1.005` rather than its binary expansion.
fn price_from_number<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Decimal::from_str(&value.to_string())
        .map_err(|_| de::Error::invalid_value(de::Unexpected::Float(value), &"a price"))
}

impl ProductRequest {
    /// Decodes a raw request body. Any decode or validation failure is
    /// reported as an invalid payload.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let request: ProductRequest = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Rejected product payload: {}", e);
            AppError::invalid_request_payload()
        })?;

        request.normalized()
    }

    pub fn normalized(self) -> Result<Self> {
        let name = self.name.trim();
        let price = self
            .price
            .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);

        if name.is_empty() || self.price < Decimal::ZERO || price > MAX_PRICE {
            return Err(AppError::invalid_request_payload());
        }

        Ok(Self {
            name: name.to_string(),
            price,
        })
    }
}

/// Raw `start`/`count` query values. Kept as strings so malformed values
/// fall back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub start: Option<String>,
    pub count: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub start: i64,
    pub count: i64,
}

impl From<PageQuery> for Page {
    fn from(query: PageQuery) -> Self {
        let start = query
            .start
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|start| *start >= 0)
            .unwrap_or(0);

        let count = query
            .count
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|count| (1..=MAX_PAGE_SIZE).contains(count))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Page { start, count }
    }
}
