use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::Granularity;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid granularity: `{0}`")]
    InvalidGranularity(String),

    #[error("no `{granularity}` boundary representable near {instant}")]
    InstantOutOfRange {
        granularity: Granularity,
        instant: DateTime<Utc>,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
