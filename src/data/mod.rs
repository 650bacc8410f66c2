/// Data layer: launch records, loading, selection and chart resolution.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RecordSet
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ RecordSet │  Vec<LaunchRecord>, payload bounds
///   └──────────┘
///        │   + Selection (site filter, payload interval)
///        ▼
///   ┌──────────┐
///   │ resolver  │  filter + group → ProportionChart / CorrelationChart
///   └──────────┘
/// ```
use std::path::PathBuf;

use thiserror::Error;

pub mod chart;
pub mod loader;
pub mod model;
pub mod resolver;
pub mod selection;

pub use chart::{CorrelationChart, CorrelationPoint, GroupValue, Grouping, ProportionChart, Slice};
pub use loader::load_file;
pub use model::{LaunchRecord, Outcome, PayloadBounds, RecordSet};
pub use resolver::{correlation_chart, proportion_chart};
pub use selection::{PayloadInterval, Selection, SiteFilter};

/// Fatal dataset errors. Everything past loading is infallible.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source file is missing, unreadable or malformed.
    #[error("launch data unavailable at {}: {reason}", path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    /// The dataset loaded but has no rows, so no payload bounds exist.
    #[error("launch dataset contains no records")]
    EmptyDataset,
}
