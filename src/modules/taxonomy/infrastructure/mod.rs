pub mod csv_reader;
pub mod models;
pub mod repository;

pub use repository::TaxonomyRepositoryImpl;
