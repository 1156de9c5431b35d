pub mod entities;
pub mod repository;

pub use entities::{Make, Model, ModelVariant, TaxonomyRecord, TaxonomyTree, YearRange};
pub use repository::TaxonomyRepository;
