// Shared kernel: error types, database pool, batching, utilities.

pub mod batch;
pub mod database;
pub mod errors;
pub mod utils;

// Re-exports for convenience
pub use batch::run_in_batches;
pub use database::{Database, DbConnection, DbPool};
pub use errors::{SeedError, SeedResult};
