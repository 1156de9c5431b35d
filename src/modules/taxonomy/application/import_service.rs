use crate::log_info;
use crate::modules::taxonomy::domain::entities::{make_image_url, Make, TaxonomyTree};
use crate::modules::taxonomy::domain::repository::{
    NewMake, NewModel, NewVariant, TaxonomyRepository,
};
use crate::shared::batch::run_in_batches;
use crate::shared::errors::SeedResult;
use futures::future::try_join_all;
use std::sync::Arc;

/// Upper bound on concurrently outstanding model/variant upserts.
pub const BATCH_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub makes: usize,
    pub models: usize,
    pub variants: usize,
}

/// Three-phase taxonomy upsert orchestrator.
///
/// Phases run strictly in dependency order: makes first, then models (which
/// need the persisted make ids), then variants (which need the persisted
/// model ids). Any failure aborts the remaining work; re-running the whole
/// import is the recovery path, which the upsert keys make safe.
pub struct TaxonomyImportService {
    repo: Arc<dyn TaxonomyRepository>,
}

impl TaxonomyImportService {
    pub fn new(repo: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repo }
    }

    pub async fn run(&self, tree: &TaxonomyTree) -> SeedResult<ImportSummary> {
        let makes = self.upsert_makes(tree).await?;
        let models = self.upsert_models(tree, &makes).await?;
        let variants = self.upsert_variants(tree, &makes).await?;

        Ok(ImportSummary {
            makes: makes.len(),
            models,
            variants,
        })
    }

    /// Phase 1: makes have no ordering dependency among themselves, so the
    /// whole set is dispatched at once and joined.
    async fn upsert_makes(&self, tree: &TaxonomyTree) -> SeedResult<Vec<Make>> {
        let ops: Vec<_> = tree
            .makes
            .keys()
            .map(|name| {
                self.repo.upsert_make(NewMake {
                    name: name.clone(),
                    image: make_image_url(name),
                })
            })
            .collect();

        let makes = try_join_all(ops).await?;
        log_info!("Seeded {} makes", makes.len());
        Ok(makes)
    }

    /// Phase 2: one upsert per `(make, model)` pair, batched.
    async fn upsert_models(&self, tree: &TaxonomyTree, makes: &[Make]) -> SeedResult<usize> {
        let mut ops = Vec::new();
        for make in makes {
            let Some(models) = tree.makes.get(&make.name) else {
                continue;
            };
            for name in models.keys() {
                ops.push(self.repo.upsert_model(NewModel {
                    make_id: make.id,
                    name: name.clone(),
                }));
            }
        }

        let models = run_in_batches(ops, BATCH_SIZE).await?;
        log_info!("Seeded {} models", models.len());
        Ok(models.len())
    }

    /// Phase 3: re-fetch each make's persisted models for their ids, then
    /// upsert every `(model, variant)` leaf, batched. Models persisted by an
    /// earlier import that no longer appear in the tree are skipped.
    async fn upsert_variants(&self, tree: &TaxonomyTree, makes: &[Make]) -> SeedResult<usize> {
        let mut ops = Vec::new();
        for make in makes {
            let models = self.repo.find_models_by_make(make.id).await?;
            let Some(tree_models) = tree.makes.get(&make.name) else {
                continue;
            };

            for model in models {
                let Some(entry) = tree_models.get(&model.name) else {
                    continue;
                };
                for (variant, years) in &entry.variants {
                    ops.push(self.repo.upsert_variant(NewVariant {
                        model_id: model.id,
                        name: variant.clone(),
                        year_start: years.start,
                        year_end: years.end,
                    }));
                }
            }
        }

        let variants = run_in_batches(ops, BATCH_SIZE).await?;
        log_info!("Seeded {} model variants", variants.len());
        Ok(variants.len())
    }
}
