//! Canonical "list + count" form of content API collections.
//!
//! The API answers collection requests either with a paginated envelope
//! (`{results, count, next, previous}`) or with a bare JSON array. Both are
//! normalized here, at the boundary, so nothing downstream inspects raw shapes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::utils::pagination;

/// Which of the accepted shapes a collection response had.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingShape {
    Envelope,
    Bare,
}

impl ListingShape {
    /// Classify a response body, or `None` for an unrecognized shape.
    pub fn detect(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) if map.get("results").is_some_and(Value::is_array) => {
                Some(Self::Envelope)
            }
            Value::Array(_) => Some(Self::Bare),
            _ => None,
        }
    }
}

/// One page of a collection plus the total count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing<T> {
    pub results: Vec<T>,
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
            next: None,
            previous: None,
        }
    }
}

impl<T> Listing<T> {
    /// Wrap a bare list; the count is its length.
    pub fn from_items(results: Vec<T>) -> Self {
        Self {
            count: results.len() as u64,
            results,
            next: None,
            previous: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of pages at the site's fixed page size.
    pub fn page_count(&self) -> u64 {
        pagination::page_count(self.count)
    }
}

impl<T: DeserializeOwned> Listing<T> {
    /// Normalize a raw response body fetched from `endpoint`.
    pub fn from_value(value: Value, endpoint: &str) -> Result<Self> {
        let shape_error = || AppError::Shape {
            endpoint: endpoint.to_string(),
        };

        match ListingShape::detect(&value).ok_or_else(shape_error)? {
            ListingShape::Bare => Ok(Self::from_items(serde_json::from_value(value)?)),
            ListingShape::Envelope => {
                let Value::Object(mut map) = value else {
                    return Err(shape_error());
                };
                let results: Vec<T> =
                    serde_json::from_value(map.remove("results").unwrap_or_default())?;
                let count = map
                    .get("count")
                    .and_then(Value::as_u64)
                    .unwrap_or(results.len() as u64);
                let link = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);

                Ok(Self {
                    next: link("next"),
                    previous: link("previous"),
                    results,
                    count,
                })
            }
        }
    }
}
