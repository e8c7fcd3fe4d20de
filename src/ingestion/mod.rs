//! Loading trip sources into memory.
//!
//! Most callers should use [`load_city`] (from [`loader`]) which:
//!
//! - resolves the city's file through a [`crate::config::DataConfig`]
//! - reads it into an in-memory [`crate::types::DataSet`] and appends derived calendar columns
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The schema-driven CSV reader is available under [`csv`].

pub mod csv;
pub mod loader;
pub mod observability;

pub use loader::{load_city, load_trips_from_path, load_trips_from_reader, LoadOptions};
pub use observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver};
