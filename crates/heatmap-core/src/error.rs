// File: crates/heatmap-core/src/error.rs
// Summary: Error types for dataset loading and validation.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for dataset and scene operations.
#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("dataset contains no monthly records")]
    EmptyDataset,

    #[error("month {month} out of range for year {year}")]
    MonthOutOfRange { year: i32, month: u32 },

    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}
