use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),
    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),
}
