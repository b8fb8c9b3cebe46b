//! Recording transport double for method-level tests.
#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use url::Url;

use crate::error::{MovieDbError, Result};
use crate::transport::HttpTransport;

/// One request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub(crate) method: &'static str,
    pub(crate) url: Url,
    pub(crate) body: Option<String>,
}

impl RecordedRequest {
    /// Parses the recorded POST body.
    pub(crate) fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }

    /// Returns the value of query parameter `name`.
    pub(crate) fn query(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

/// Transport that records every request and answers from a queue of bodies.
///
/// When the queue is empty the fallback body is returned.
#[derive(Debug)]
pub(crate) struct MockTransport {
    queue: Mutex<VecDeque<String>>,
    fallback: String,
    fail: bool,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::with_body(r#"{"status_code":1,"status_message":"Success.","success":true}"#)
    }
}

impl MockTransport {
    pub(crate) fn with_body(body: &str) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: String::from(body),
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_bodies(bodies: &[&str]) -> Self {
        let transport = Self::default();
        transport
            .queue
            .lock()
            .unwrap()
            .extend(bodies.iter().map(|b| String::from(*b)));
        transport
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn respond(&self, method: &'static str, url: &Url, body: Option<&str>) -> Result<String> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.clone(),
            body: body.map(String::from),
        });
        if self.fail {
            return Err(MovieDbError::Transport {
                url: url.to_string(),
                status: Some(503),
                message: String::from("HTTP 503 Service Unavailable"),
            });
        }
        let next = self.queue.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| self.fallback.clone()))
    }
}

impl HttpTransport for MockTransport {
    async fn get(&self, url: &Url) -> Result<String> {
        self.respond("GET", url, None)
    }

    async fn post(&self, url: &Url, json_body: &str) -> Result<String> {
        self.respond("POST", url, Some(json_body))
    }

    async fn delete(&self, url: &Url) -> Result<String> {
        self.respond("DELETE", url, None)
    }
}
