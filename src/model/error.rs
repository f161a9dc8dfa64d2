use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid axis order {order:?}: {reason}")]
    InvalidOrder { order: Vec<usize>, reason: String },

    #[error("axis {axis} out of range for {ndim} dimensions")]
    AxisOutOfRange { axis: usize, ndim: usize },

    #[error("{field} has {actual} entries but dims has {expected} dimensions")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("ndisplay must be 2 or 3, got {0}")]
    InvalidNdisplay(usize),
}

#[derive(Debug, Error)]
pub enum StateIoError {
    #[error("dims state I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("dims state JSON failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("dims state YAML failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("invalid dims state: {0}")]
    Invalid(#[from] CoreError),
}
