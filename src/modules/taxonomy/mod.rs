/// Vehicle taxonomy import module
///
/// Seeds the make -> model -> model variant hierarchy from `taxonomy.csv`:
/// - Domain: parsed records, the aggregated taxonomy tree, repository trait
/// - Application: three-phase upsert orchestration (makes, models, variants)
/// - Infrastructure: CSV reader and Diesel-backed repository
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::import_service::{ImportSummary, TaxonomyImportService, BATCH_SIZE};
pub use domain::{
    entities::{Make, Model, ModelVariant, TaxonomyRecord, TaxonomyTree, YearRange},
    repository::{NewMake, NewModel, NewVariant, TaxonomyRepository},
};
pub use infrastructure::csv_reader::{read_taxonomy_csv, TaxonomyCsvReader};
pub use infrastructure::TaxonomyRepositoryImpl;
