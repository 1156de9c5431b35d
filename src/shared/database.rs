use crate::log_info;
use crate::shared::errors::SeedError;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use std::env;
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Owns the connection pool for a single seeding run. The pool is dropped
/// (and its connections released) when this value goes out of scope, so the
/// binary holds it for the whole run and lets it fall at the end of `main`.
#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new() -> Result<Self, SeedError> {
        let database_url = Self::get_validated_database_url()?;

        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = r2d2::Pool::builder()
            // A seeding run fans out at most one batch of upserts at a time
            .max_size(10)
            .connection_timeout(Duration::from_secs(10))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                SeedError::Database(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {}",
            pool.max_size()
        );

        Ok(Self { pool })
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_validated_database_url() -> Result<String, SeedError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| {
            SeedError::Config("DATABASE_URL environment variable not found".to_string())
        })?;

        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            return Err(SeedError::Config(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }

        // Log connection attempt without exposing credentials
        log_info!(
            "Connecting to database at: {}",
            database_url.split('@').last().unwrap_or("unknown_host")
        );

        Ok(database_url)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn get_connection(&self) -> Result<DbConnection, SeedError> {
        self.pool
            .get()
            .map_err(|e| SeedError::Database(format!("Failed to get connection: {}", e)))
    }
}
