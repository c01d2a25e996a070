use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReshapeError {
    #[error("required column not found: {name}")]
    MissingColumn { name: String },
}

pub type Result<T> = std::result::Result<T, ReshapeError>;
