use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("product id must not be empty")]
    EmptyProductId,
    #[error("unknown stock status: {0}")]
    UnknownStatus(String),
    #[error("unknown user role: {0}")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
