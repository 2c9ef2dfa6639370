//! Data source seams the caches fetch through.
//!
//! [`ArchiveClient`] implements both traits; tests substitute scripted
//! sources.

use std::sync::Arc;

use async_trait::async_trait;
use exo_archive::{ArchiveClient, FetchError};
use exo_core::{DailyImageRecord, RawTable};

/// Something that can produce the raw catalog table.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw catalog rows. One attempt, no retries.
    async fn fetch_table(&self) -> Result<RawTable, FetchError>;
}

/// Something that can produce today's image record.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch the image-of-the-day record. One attempt, no retries.
    async fn fetch_image(&self) -> Result<DailyImageRecord, FetchError>;
}

#[async_trait]
impl CatalogSource for ArchiveClient {
    async fn fetch_table(&self) -> Result<RawTable, FetchError> {
        self.fetch_catalog().await
    }
}

#[async_trait]
impl ImageSource for ArchiveClient {
    async fn fetch_image(&self) -> Result<DailyImageRecord, FetchError> {
        self.fetch_daily_image().await
    }
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Arc<T> {
    async fn fetch_table(&self) -> Result<RawTable, FetchError> {
        (**self).fetch_table().await
    }
}

#[async_trait]
impl<T: ImageSource + ?Sized> ImageSource for Arc<T> {
    async fn fetch_image(&self) -> Result<DailyImageRecord, FetchError> {
        (**self).fetch_image().await
    }
}
