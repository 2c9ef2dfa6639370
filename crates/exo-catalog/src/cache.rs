//! Time-bounded snapshot caches.
//!
//! A [`TtlCache`] holds one immutable value behind an `Arc`. Readers get a
//! clone of the `Arc`, so a refresh never changes what an earlier reader
//! holds. The async mutex is held across the refresh, which makes it
//! single-flight: concurrent callers during a refresh wait for it and then
//! share its result.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use exo_archive::{ArchiveClient, FetchError, FetchErrorKind};
use exo_config::ExoConfig;
use exo_core::{CatalogSnapshot, ImageSnapshot, RawTable};
use tokio::sync::Mutex;

use crate::fallback;
use crate::normalize::Normalizer;
use crate::source::{CatalogSource, ImageSource};

/// A value that knows when it was produced.
pub trait Timestamped {
    fn fetched_at(&self) -> DateTime<Utc>;
}

impl Timestamped for CatalogSnapshot {
    fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

impl Timestamped for ImageSnapshot {
    fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// One cached value with a time-to-live.
#[derive(Debug)]
pub struct TtlCache<T> {
    ttl: TimeDelta,
    slot: Mutex<Option<Arc<T>>>,
}

impl<T: Timestamped> TtlCache<T> {
    /// A zero TTL makes every [`Self::get_or_refresh`] refresh.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value, or run `refresh` and cache its result if the
    /// slot is empty or stale.
    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> Arc<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(current) = slot.as_ref() {
            if self.is_fresh(current.as_ref(), Utc::now()) {
                return Arc::clone(current);
            }
        }
        let fresh = Arc::new(refresh().await);
        *slot = Some(Arc::clone(&fresh));
        fresh
    }

    /// The cached value, fresh or not, without refreshing.
    pub async fn peek(&self) -> Option<Arc<T>> {
        self.slot.lock().await.clone()
    }

    /// Drop the cached value so the next read refreshes.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    /// A value stamped after `now` means the clock went backwards; it is stale.
    fn is_fresh(&self, value: &T, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(value.fetched_at());
        age >= TimeDelta::zero() && age < self.ttl
    }
}

/// The catalog table, fetched lazily and replaced whole on expiry.
pub struct CatalogCache<S> {
    source: S,
    normalizer: Normalizer,
    cache: TtlCache<CatalogSnapshot>,
}

impl CatalogCache<ArchiveClient> {
    /// Cache backed by the archive client, using the configured TTL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the HTTP client cannot be built.
    pub fn from_config(config: &ExoConfig) -> Result<Self, FetchError> {
        let client = ArchiveClient::from_config(config)?;
        Ok(Self::new(client, config.archive.ttl()))
    }
}

impl<S: CatalogSource> CatalogCache<S> {
    #[must_use]
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            normalizer: Normalizer::new(),
            cache: TtlCache::new(ttl),
        }
    }

    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// The current snapshot, refreshing first if it is missing or expired.
    ///
    /// Never fails: a failed fetch yields a fallback snapshot, which is
    /// cached for the full TTL like a live one.
    pub async fn get(&self) -> Arc<CatalogSnapshot> {
        self.cache
            .get_or_refresh(|| async {
                let result = self.source.fetch_table().await;
                self.snapshot_from(result)
            })
            .await
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    fn snapshot_from(&self, result: Result<RawTable, FetchError>) -> CatalogSnapshot {
        let now = Utc::now();
        let table = match result {
            Ok(table) => table,
            Err(err) => {
                match err.kind() {
                    FetchErrorKind::Network => {
                        tracing::warn!(%err, timeout = err.is_timeout(), "archive unreachable, serving sample catalog");
                    }
                    FetchErrorKind::Service => {
                        tracing::warn!(%err, "archive returned unusable data, serving sample catalog");
                    }
                    FetchErrorKind::Request => {
                        tracing::warn!(%err, "archive request rejected, serving sample catalog");
                    }
                }
                return CatalogSnapshot::fallback(fallback::sample(), now, err.to_string());
            }
        };

        let records = self.normalizer.normalize(&table);
        if records.is_empty() {
            tracing::warn!(rows = table.len(), "no archive row survived normalization, serving sample catalog");
            return CatalogSnapshot::fallback(
                fallback::sample(),
                now,
                format!("none of {} archive rows were usable", table.len()),
            );
        }

        tracing::info!(records = records.len(), "catalog refreshed from archive");
        CatalogSnapshot::remote(records, now)
    }
}

/// The image of the day, fetched lazily.
pub struct ImageCache<S> {
    source: S,
    cache: TtlCache<ImageSnapshot>,
}

impl ImageCache<ArchiveClient> {
    /// Cache backed by the archive client, using the configured image TTL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the HTTP client cannot be built.
    pub fn from_config(config: &ExoConfig) -> Result<Self, FetchError> {
        let client = ArchiveClient::from_config(config)?;
        Ok(Self::new(client, config.apod.ttl()))
    }
}

impl<S: ImageSource> ImageCache<S> {
    #[must_use]
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            cache: TtlCache::new(ttl),
        }
    }

    /// The current image lookup. `image` is `None` when the service failed.
    pub async fn get(&self) -> Arc<ImageSnapshot> {
        self.cache
            .get_or_refresh(|| async {
                let image = match self.source.fetch_image().await {
                    Ok(image) => Some(image),
                    Err(FetchError::NotConfigured(field)) => {
                        tracing::debug!(field, "image of the day disabled");
                        None
                    }
                    Err(err) => {
                        tracing::warn!(%err, "image of the day unavailable");
                        None
                    }
                };
                ImageSnapshot {
                    image,
                    fetched_at: Utc::now(),
                }
            })
            .await
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}
