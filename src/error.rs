use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    #[error("invalid time of day: {0:?}")]
    InvalidTime(String),
    #[error("invalid block label: {0:?}")]
    InvalidBlockLabel(String),
    #[error("rotation grid has no position columns")]
    EmptyGrid,
}
