//! `bikeshare-stats` loads US bikeshare trip records (Chicago, New York City, Washington) into an
//! in-memory [`types::DataSet`], optionally narrows them to one month and/or weekday, and
//! reports descriptive statistics.
//!
//! The pipeline runs one way:
//!
//! 1. [`ingestion`]: read a city's CSV, parse timestamps, append derived calendar columns
//! 2. [`processing::normalize`]: fill missing demographic values with the column mode
//! 3. [`processing::filter`]: keep rows for the selected month/weekday
//! 4. [`stats`]: station popularity, trip durations, time patterns, user demographics
//!
//! [`pipeline::run`] wires these together for one [`selector::Selector`] and returns a
//! [`report::Report`].
//!
//! ## Quick example
//!
//! ```no_run
//! use bikeshare_stats::config::DataConfig;
//! use bikeshare_stats::ingestion::LoadOptions;
//! use bikeshare_stats::pipeline;
//! use bikeshare_stats::selector::Selector;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = DataConfig::with_data_dir("data");
//! let selector = Selector::parse("chicago", "march", "skip")?;
//! let report = pipeline::run(&cfg, &selector, &LoadOptions::default())?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Missing data
//!
//! - Optional columns (`User Type`, `Gender`, `Birth Year`) that a source lacks are absent from
//!   the dataset schema; the matching sub-report is skipped.
//! - Queries over an empty selection return zero counts and `None` ("no data") instead of
//!   failing.
//! - Trip durations are converted to hours with a divisor of 3600 ([`stats::SECONDS_PER_HOUR`]).
//!
//! ## Modules
//!
//! - [`config`]: city → source file mapping
//! - [`selector`]: selector types and input validation
//! - [`ingestion`]: CSV loading and load observers
//! - [`processing`]: filter/map/normalize/reduce over [`types::DataSet`]
//! - [`stats`] and [`report`]: the statistics and their rendering
//! - [`prompt`]: the interactive console session
//! - [`error`]: error types

pub mod columns;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod prompt;
pub mod report;
pub mod selector;
pub mod stats;
pub mod types;

pub use error::{BikeshareError, BikeshareResult};
