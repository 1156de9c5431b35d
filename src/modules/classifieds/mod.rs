/// Classified listings module
///
/// Generates one randomized listing per persisted make and bulk-inserts them
/// with duplicate slugs skipped. Runs after the taxonomy import so listings
/// can reference real make/model/variant ids.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::seed_service::ClassifiedSeedService;
pub use domain::{
    entities::{MakeWithModels, ModelWithVariants, NewClassified},
    repository::ClassifiedRepository,
    value_objects::{
        BodyType, ClassifiedStatus, Colour, CurrencyCode, FuelType, Transmission, UlezCompliance,
    },
};
pub use infrastructure::ClassifiedRepositoryImpl;
