use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No available rooms in the {category} category.")]
    NotAvailable { category: String },
    #[error("reservation ids are exhausted")]
    ReservationIdExhausted,
    #[error("total amount for room {0} is out of range")]
    AmountOverflow(String),
    #[error("{0}")]
    InvalidCatalog(String),
    #[error("failed to read the catalog file")]
    CatalogReadError(#[from] std::io::Error),
    #[error("failed to parse the catalog file")]
    CatalogParseError(#[from] serde_json::Error),
    #[error("{0}")]
    TransactionError(String),
    #[error("{0}")]
    ConfigError(String),
}

impl AppError {
    pub fn is_not_available(&self) -> bool {
        matches!(self, Self::NotAvailable { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
