use crate::containers::ListError;
use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReorderError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("axis {axis} is not present in the axis list")]
    AxisNotFound { axis: usize },

    #[error("desired order has {desired} axes but the list only holds {current}")]
    OrderTooLong { desired: usize, current: usize },

    #[error("axis {axis} appears more than once")]
    DuplicateAxis { axis: usize },

    #[error("axis list error: {0}")]
    List(#[from] ListError),

    #[error("dims rejected the order: {0}")]
    Core(#[from] CoreError),
}
