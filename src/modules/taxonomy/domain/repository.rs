/// Repository trait for the vehicle taxonomy store
///
/// This is the only surface the import path talks to; the production
/// implementation is Diesel/PostgreSQL, tests use an in-memory double.
/// Every upsert is individually atomic; nothing here is transactional
/// across calls.
use crate::modules::taxonomy::domain::entities::{Make, Model, ModelVariant};
use crate::shared::errors::SeedResult;
use async_trait::async_trait;

/// Fields for a make upsert, keyed by unique `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMake {
    pub name: String,
    pub image: String,
}

/// Fields for a model upsert, keyed by `(make_id, name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModel {
    pub make_id: i32,
    pub name: String,
}

/// Fields for a variant upsert, keyed by `(model_id, name)`. The year range
/// only applies on create; an existing row keeps its stored range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVariant {
    pub model_id: i32,
    pub name: String,
    pub year_start: i32,
    pub year_end: i32,
}

#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    /// Create-or-update a make by name; both paths refresh the image URL.
    async fn upsert_make(&self, make: NewMake) -> SeedResult<Make>;

    /// Create-or-update a model by `(make_id, name)`.
    async fn upsert_model(&self, model: NewModel) -> SeedResult<Model>;

    /// Create-or-update a variant by `(model_id, name)`; on update only the
    /// name is refreshed.
    async fn upsert_variant(&self, variant: NewVariant) -> SeedResult<ModelVariant>;

    /// All persisted models belonging to a make.
    async fn find_models_by_make(&self, make_id: i32) -> SeedResult<Vec<Model>>;
}
