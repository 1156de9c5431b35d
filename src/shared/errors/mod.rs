pub mod seed_error;

pub use seed_error::{SeedError, SeedResult};
