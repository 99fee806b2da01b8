use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid tooth position code: {0}")]
    InvalidPosition(String),
    #[error("status palette is empty")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, ChartError>;
