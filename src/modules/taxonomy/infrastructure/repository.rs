/// Diesel-based implementation of TaxonomyRepository
///
/// Upserts map onto PostgreSQL `INSERT .. ON CONFLICT .. DO UPDATE`, keyed by
/// the unique constraints the web application's schema declares.
use crate::modules::taxonomy::domain::entities::{Make, Model, ModelVariant};
use crate::modules::taxonomy::domain::repository::{
    NewMake, NewModel, NewVariant, TaxonomyRepository,
};
use crate::modules::taxonomy::infrastructure::models::{
    MakeRow, ModelRow, NewMakeRow, NewModelRow, NewVariantRow, VariantRow,
};
use crate::schema::{makes, model_variants, models};
use crate::shared::database::{DbConnection, DbPool};
use crate::shared::errors::{SeedError, SeedResult};
use async_trait::async_trait;
use diesel::prelude::*;

pub struct TaxonomyRepositoryImpl {
    pool: DbPool,
}

impl TaxonomyRepositoryImpl {
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
impl TaxonomyRepository for TaxonomyRepositoryImpl {
    async fn upsert_make(&self, make: NewMake) -> SeedResult<Make> {
        let mut conn = self.get_conn()?;

        let row: MakeRow = diesel::insert_into(makes::table)
            .values(NewMakeRow {
                name: &make.name,
                image: &make.image,
            })
            .on_conflict(makes::name)
            .do_update()
            .set((makes::name.eq(&make.name), makes::image.eq(&make.image)))
            .returning(MakeRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into_domain())
    }

    async fn upsert_model(&self, model: NewModel) -> SeedResult<Model> {
        let mut conn = self.get_conn()?;

        let row: ModelRow = diesel::insert_into(models::table)
            .values(NewModelRow {
                make_id: model.make_id,
                name: &model.name,
            })
            .on_conflict((models::make_id, models::name))
            .do_update()
            .set(models::name.eq(&model.name))
            .returning(ModelRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into_domain())
    }

    async fn upsert_variant(&self, variant: NewVariant) -> SeedResult<ModelVariant> {
        let mut conn = self.get_conn()?;

        // Year range is set on create only; a conflicting row keeps its
        // stored range and just has its name refreshed.
        let row: VariantRow = diesel::insert_into(model_variants::table)
            .values(NewVariantRow {
                model_id: variant.model_id,
                name: &variant.name,
                year_start: variant.year_start,
                year_end: variant.year_end,
            })
            .on_conflict((model_variants::model_id, model_variants::name))
            .do_update()
            .set(model_variants::name.eq(&variant.name))
            .returning(VariantRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into_domain())
    }

    async fn find_models_by_make(&self, make_id: i32) -> SeedResult<Vec<Model>> {
        let mut conn = self.get_conn()?;

        let rows: Vec<ModelRow> = models::table
            .filter(models::make_id.eq(make_id))
            .select(ModelRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(ModelRow::into_domain).collect())
    }
}
