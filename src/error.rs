use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// The requested length does not fit the sequence it refers to.
    #[error("invalid argument: length {len} exceeds sequence capacity {capacity}")]
    InvalidArgument { len: usize, capacity: usize },

    #[error("unknown sort strategy `{0}`, expected one of: insertion, selection")]
    UnknownStrategy(String),
}
