//! # exo-core
//!
//! Core types shared across the exodash crates.
//!
//! This crate provides:
//! - [`ExoplanetRecord`], the fully-typed catalog row produced by normalization
//! - [`Column`], the numeric columns a record exposes to charts
//! - [`CatalogSnapshot`] and [`Provenance`], the immutable cached table
//! - [`DailyImageRecord`] and [`ImageSnapshot`], the image-of-the-day payload
//! - [`RawTable`], the untyped rows returned by the archive before normalization

pub mod column;
pub mod image;
pub mod raw;
pub mod record;
pub mod snapshot;

pub use column::{
    Column, DISCOVERY_METHOD_COLUMN, DISCOVERY_YEAR_COLUMN, HOST_STAR_COLUMN, PLANET_NAME_COLUMN,
    archive_columns,
};
pub use image::{DailyImageRecord, ImageSnapshot, MediaKind};
pub use raw::{RawRow, RawTable};
pub use record::ExoplanetRecord;
pub use snapshot::{CatalogSnapshot, Provenance};
