use crate::modules::classifieds::domain::entities::{MakeWithModels, NewClassified};
use crate::shared::errors::SeedResult;
use async_trait::async_trait;

#[async_trait]
pub trait ClassifiedRepository: Send + Sync {
    /// Every persisted make, with models and their variants attached.
    async fn find_makes_with_models(&self) -> SeedResult<Vec<MakeWithModels>>;

    /// Bulk insert, skipping rows whose slug already exists. Returns the
    /// number of rows actually inserted.
    async fn create_many(&self, listings: Vec<NewClassified>) -> SeedResult<usize>;
}
