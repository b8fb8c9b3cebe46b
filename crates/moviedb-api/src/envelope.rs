//! Response envelope unwrapping.
//!
//! TMDB wraps collections either in a paginated envelope
//! (`results`, `page`, `total_pages`, `total_results`) or under an
//! endpoint-specific root key (`genres`, `titles`, `keywords`, ...).
//! Both shapes are flattened into a [`ResultList`].

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MovieDbError, Result};

/// Root key of the standard paginated envelope.
pub const RESULTS_KEY: &str = "results";

/// A decoded list of items with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultList<T> {
    /// Items of this page.
    pub results: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results across all pages.
    pub total_results: u32,
}

impl<T> ResultList<T> {
    /// Creates a single-page list; totals are derived from `results`.
    #[must_use]
    pub fn new(results: Vec<T>) -> Self {
        let total_results = u32::try_from(results.len()).unwrap_or(u32::MAX);
        Self {
            results,
            page: 1,
            total_pages: 1,
            total_results,
        }
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` when this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over the items of this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }
}

impl<T> IntoIterator for ResultList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResultList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Builds a mapping failure for `url` and `body`.
fn mapping_error(url: &str, body: &str, source: serde_json::Error) -> MovieDbError {
    MovieDbError::Mapping {
        url: String::from(url),
        body: String::from(body),
        source,
    }
}

/// Parses `body` as a JSON object.
fn parse_object(url: &str, body: &str) -> Result<Map<String, Value>> {
    let raw_result: std::result::Result<Map<String, Value>, _> = serde_json::from_str(body);
    raw_result.map_err(|e| mapping_error(url, body, e))
}

/// Reads an optional pagination counter; absent, null or non-numeric counts as 0.
fn counter(object: &Map<String, Value>, key: &str) -> u32 {
    object
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// Decodes `body` directly into `T`.
///
/// # Errors
///
/// Returns [`MovieDbError::Mapping`] if the JSON does not match `T`.
pub fn decode_object<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    let raw_result: std::result::Result<T, _> = serde_json::from_str(body);
    raw_result.map_err(|e| mapping_error(url, body, e))
}

/// Decodes a standard `results` envelope.
///
/// # Errors
///
/// Returns [`MovieDbError::Mapping`] if the body is not a JSON object or an
/// element does not match `T`.
pub fn decode_list<T: DeserializeOwned>(url: &str, body: &str) -> Result<ResultList<T>> {
    decode_named_list(url, body, RESULTS_KEY)
}

/// Decodes a collection stored under `root`, with optional pagination fields.
///
/// `total_results` falls back to the number of decoded items when absent or zero;
/// `page` and `total_pages` fall back to 1.
///
/// # Errors
///
/// Returns [`MovieDbError::Mapping`] if the body is not a JSON object or an
/// element does not match `T`.
pub fn decode_named_list<T: DeserializeOwned>(
    url: &str,
    body: &str,
    root: &str,
) -> Result<ResultList<T>> {
    let mut object = parse_object(url, body)?;

    let results: Vec<T> = match object.remove(root) {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => {
            let raw_result: std::result::Result<Vec<T>, _> = serde_json::from_value(value);
            raw_result.map_err(|e| mapping_error(url, body, e))?
        }
    };

    let page = counter(&object, "page").max(1);
    let total_pages = counter(&object, "total_pages").max(1);
    let total_results = match counter(&object, "total_results") {
        0 => u32::try_from(results.len()).unwrap_or(u32::MAX),
        n => n,
    };

    Ok(ResultList {
        results,
        page,
        total_pages,
        total_results,
    })
}

/// Decodes an object-of-arrays stored under `root` (e.g. certifications by country).
///
/// # Errors
///
/// Returns [`MovieDbError::Mapping`] if the body is not a JSON object, `root`
/// is not an object, or a value does not match `Vec<T>`.
pub fn decode_map<T: DeserializeOwned>(
    url: &str,
    body: &str,
    root: &str,
) -> Result<BTreeMap<String, Vec<T>>> {
    let mut object = parse_object(url, body)?;

    match object.remove(root) {
        None | Some(Value::Null) => Ok(BTreeMap::new()),
        Some(Value::Object(entries)) => {
            let raw_result: std::result::Result<BTreeMap<String, Vec<T>>, _> =
                serde_json::from_value(Value::Object(entries));
            raw_result.map_err(|e| mapping_error(url, body, e))
        }
        Some(_) => Err(mapping_error(
            url,
            body,
            serde_json::Error::custom(format!("`{root}` is not a JSON object")),
        )),
    }
}
