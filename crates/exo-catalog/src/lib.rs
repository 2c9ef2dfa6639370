//! # exo-catalog
//!
//! Everything between the archive client and the presentation layer:
//!
//! - [`Normalizer`] turns a [`RawTable`](exo_core::RawTable) into typed records
//! - [`fallback::sample`] is the built-in catalog used when a fetch fails
//! - [`CatalogCache`] and [`ImageCache`] hold immutable snapshots for a TTL,
//!   refreshing lazily with at most one fetch in flight
//! - [`CatalogFilter`] derives filtered views without touching the snapshot
//! - [`stats`] computes the dashboard figures and chart series
//!
//! Fetch failures never escape this crate: the catalog cache substitutes the
//! sample set and tags the snapshot [`Provenance::Fallback`](exo_core::Provenance),
//! the image cache records "no image available".

pub mod cache;
pub mod fallback;
pub mod filter;
pub mod normalize;
pub mod source;
pub mod stats;

pub use cache::{CatalogCache, ImageCache, Timestamped, TtlCache};
pub use filter::{CatalogFilter, YearRange, filter};
pub use normalize::{MissingYearPolicy, Normalizer};
pub use source::{CatalogSource, ImageSource};
