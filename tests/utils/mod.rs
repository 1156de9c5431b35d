/// Shared test utilities: in-memory repository doubles standing in for the
/// PostgreSQL store.
pub mod memory;
