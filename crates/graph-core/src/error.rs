// File: crates/graph-core/src/error.rs
// Summary: Error type for index-taking graph operations.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("dataset index {index} out of range for {len} datasets")]
    DatasetIndexOutOfRange { index: usize, len: usize },

    #[error("point {index} out of range in dataset {dataset}")]
    PointIndexOutOfRange { dataset: usize, index: usize },
}
