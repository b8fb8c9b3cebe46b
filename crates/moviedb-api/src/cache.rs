//! Per-client memo of the API configuration.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::model::Configuration;

/// Read-through slot holding the configuration once it has been fetched.
///
/// The lock is held across the fetch, so concurrent first callers wait for
/// the single in-flight request instead of issuing their own. A failed fetch
/// leaves the slot empty.
#[derive(Debug, Default)]
pub struct ConfigurationCache {
    slot: Mutex<Option<Arc<Configuration>>>,
}

impl ConfigurationCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached configuration, calling `fetch` only when the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns the error of `fetch` unchanged.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Arc<Configuration>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Configuration>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(ref cached) = *slot {
            tracing::trace!("configuration cache hit");
            return Ok(Arc::clone(cached));
        }

        let fetched = Arc::new(fetch().await?);
        tracing::info!(
            change_keys = fetched.change_keys.len(),
            "TMDB configuration cached"
        );
        *slot = Some(Arc::clone(&fetched));
        Ok(fetched)
    }

    /// Returns the cached configuration without fetching.
    pub async fn get(&self) -> Option<Arc<Configuration>> {
        self.slot.lock().await.clone()
    }
}
