/// Diesel row models for the taxonomy tables
use crate::modules::taxonomy::domain::entities::{Make, Model, ModelVariant};
use crate::schema::{makes, model_variants, models};
use diesel::prelude::*;

#[derive(Insertable, Debug)]
#[diesel(table_name = makes)]
pub struct NewMakeRow<'a> {
    pub name: &'a str,
    pub image: &'a str,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = makes)]
pub struct MakeRow {
    pub id: i32,
    pub name: String,
    pub image: String,
}

impl MakeRow {
    pub fn into_domain(self) -> Make {
        Make {
            id: self.id,
            name: self.name,
            image: self.image,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = models)]
pub struct NewModelRow<'a> {
    pub make_id: i32,
    pub name: &'a str,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = models)]
pub struct ModelRow {
    pub id: i32,
    pub make_id: i32,
    pub name: String,
}

impl ModelRow {
    pub fn into_domain(self) -> Model {
        Model {
            id: self.id,
            make_id: self.make_id,
            name: self.name,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = model_variants)]
pub struct NewVariantRow<'a> {
    pub model_id: i32,
    pub name: &'a str,
    pub year_start: i32,
    pub year_end: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = model_variants)]
pub struct VariantRow {
    pub id: i32,
    pub model_id: i32,
    pub name: String,
    pub year_start: i32,
    pub year_end: i32,
}

impl VariantRow {
    pub fn into_domain(self) -> ModelVariant {
        ModelVariant {
            id: self.id,
            model_id: self.model_id,
            name: self.name,
            year_start: self.year_start,
            year_end: self.year_end,
        }
    }
}
