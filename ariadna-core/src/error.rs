use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Please enter an address")]
    EmptyAddress,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Nothing found")]
    NotFound,
    #[error("Geocoding failed: {0}")]
    Lookup(String),
}

pub type Result<T> = std::result::Result<T, Error>;
