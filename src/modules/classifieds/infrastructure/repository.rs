/// Diesel-based implementation of ClassifiedRepository
use crate::modules::classifieds::domain::entities::{
    MakeWithModels, ModelWithVariants, NewClassified,
};
use crate::modules::classifieds::domain::repository::ClassifiedRepository;
use crate::modules::classifieds::infrastructure::models::NewClassifiedRow;
use crate::modules::taxonomy::infrastructure::models::{MakeRow, ModelRow, VariantRow};
use crate::schema::{classifieds, makes, model_variants, models};
use crate::shared::database::{DbConnection, DbPool};
use crate::shared::errors::{SeedError, SeedResult};
use async_trait::async_trait;
use diesel::prelude::*;
use std::collections::HashMap;

pub struct ClassifiedRepositoryImpl {
    pool: DbPool,
}

impl ClassifiedRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> SeedResult<DbConnection> {
        self.pool
            .get()
            .map_err(|e| SeedError::Database(format!("Failed to get connection: {}", e)))
    }
}

#[async_trait]
impl ClassifiedRepository for ClassifiedRepositoryImpl {
    async fn find_makes_with_models(&self) -> SeedResult<Vec<MakeWithModels>> {
        let mut conn = self.get_conn()?;

        let make_rows: Vec<MakeRow> = makes::table.select(MakeRow::as_select()).load(&mut conn)?;
        let model_rows: Vec<ModelRow> =
            models::table.select(ModelRow::as_select()).load(&mut conn)?;
        let variant_rows: Vec<VariantRow> = model_variants::table
            .select(VariantRow::as_select())
            .load(&mut conn)?;

        // Group variants under models, then models under makes
        let mut variants_by_model: HashMap<i32, Vec<VariantRow>> = HashMap::new();
        for row in variant_rows {
            variants_by_model.entry(row.model_id).or_default().push(row);
        }

        let mut models_by_make: HashMap<i32, Vec<ModelWithVariants>> = HashMap::new();
        for row in model_rows {
            let variants = variants_by_model
                .remove(&row.id)
                .unwrap_or_default()
                .into_iter()
                .map(VariantRow::into_domain)
                .collect();
            models_by_make
                .entry(row.make_id)
                .or_default()
                .push(ModelWithVariants {
                    model: row.into_domain(),
                    variants,
                });
        }

        Ok(make_rows
            .into_iter()
            .map(|row| {
                let models = models_by_make.remove(&row.id).unwrap_or_default();
                MakeWithModels {
                    make: row.into_domain(),
                    models,
                }
            })
            .collect())
    }

    async fn create_many(&self, listings: Vec<NewClassified>) -> SeedResult<usize> {
        let mut conn = self.get_conn()?;

        let rows: Vec<NewClassifiedRow> =
            listings.iter().map(NewClassifiedRow::from_domain).collect();

        let inserted = diesel::insert_into(classifieds::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut conn)?;

        Ok(inserted)
    }
}
