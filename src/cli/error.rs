use crate::containers::ListError;
use crate::model::{CoreError, StateIoError};
use crate::sorter::ReorderError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("state file error: {0}")]
    State(#[from] StateIoError),

    #[error("invalid dims: {0}")]
    Core(#[from] CoreError),

    #[error("reorder failed: {0}")]
    Reorder(#[from] ReorderError),

    #[error("axis list error: {0}")]
    List(#[from] ListError),

    #[error("axis {axis} is not in the axis list")]
    UnknownAxis { axis: usize },

    #[error("output serialization failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("viewer failed: {0}")]
    Ui(#[from] eframe::Error),
}
