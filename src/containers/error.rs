use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
