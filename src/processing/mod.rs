//! In-memory data transformations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by the loader.
//! Every operation is pure with respect to its input: borrowed datasets are never modified, and
//! operations that take ownership return the transformed dataset.
//!
//! Currently implemented:
//!
//! - [`filter()`] and [`filter_by_period()`]: row filtering by predicate or by month/weekday
//! - [`append_columns()`]: derived columns
//! - [`fill_missing_with_mode()`]: missing-value normalization
//! - [`reduce()`], [`mode()`], [`value_counts()`], [`most_common_pair()`]: reductions
//!
//! ## Example: filter → reduce
//!
//! ```rust
//! use bikeshare_stats::processing::{filter, mode, reduce, ReduceOp};
//! use bikeshare_stats::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("station", DataType::Utf8),
//!     Field::new("seconds", DataType::Float64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Utf8("Canal St".into()), Value::Float64(600.0)],
//!         vec![Value::Utf8("Clark St".into()), Value::Float64(1200.0)],
//!         vec![Value::Utf8("Canal St".into()), Value::Float64(300.0)],
//!     ],
//! );
//!
//! let long = filter(&ds, |row| row[1].as_f64().is_some_and(|s| s >= 600.0));
//! assert_eq!(reduce(&long, "seconds", ReduceOp::Sum), Some(Value::Float64(1800.0)));
//! assert_eq!(mode(&ds, "station"), Some(Value::Utf8("Canal St".into())));
//! ```

pub mod filter;
pub mod map;
pub mod normalize;
pub mod reduce;

pub use filter::{filter, filter_by_period};
pub use map::append_columns;
pub use normalize::{fill_missing_with_mode, ColumnFill};
pub use reduce::{mode, mode_of, most_common_pair, reduce, value_counts, ReduceOp};
