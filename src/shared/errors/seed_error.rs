use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<diesel::result::Error> for SeedError {
    fn from(err: diesel::result::Error) -> Self {
        SeedError::Database(err.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for SeedError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        SeedError::Database(format!("Database pool error: {}", err))
    }
}

// Result type alias for convenience
pub type SeedResult<T> = Result<T, SeedError>;
