#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid position '{0}', expected LINE:CHARACTER")]
    InvalidPosition(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
