//! In-memory repository doubles. Upsert keys mirror the real schema's unique
//! constraints, and parent ids are checked on insert so dependency-ordering
//! violations surface as errors instead of silent bad rows.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use carmart_seed::modules::classifieds::{
    ClassifiedRepository, MakeWithModels, ModelWithVariants, NewClassified,
};
use carmart_seed::modules::taxonomy::{
    Make, Model, ModelVariant, NewMake, NewModel, NewVariant, TaxonomyRepository,
};
use carmart_seed::shared::errors::{SeedError, SeedResult};

#[derive(Default)]
struct TaxonomyState {
    next_id: i32,
    makes: Vec<Make>,
    models: Vec<Model>,
    variants: Vec<ModelVariant>,
}

impl TaxonomyState {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryTaxonomyRepository {
    state: Mutex<TaxonomyState>,
}

impl InMemoryTaxonomyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a make, e.g. with a stale image, to exercise update paths.
    pub fn insert_make(&self, name: &str, image: &str) -> Make {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let make = Make {
            id,
            name: name.to_string(),
            image: image.to_string(),
        };
        state.makes.push(make.clone());
        make
    }

    pub fn makes(&self) -> Vec<Make> {
        self.state.lock().unwrap().makes.clone()
    }

    pub fn models(&self) -> Vec<Model> {
        self.state.lock().unwrap().models.clone()
    }

    pub fn variants(&self) -> Vec<ModelVariant> {
        self.state.lock().unwrap().variants.clone()
    }

    pub fn snapshot(&self) -> Vec<MakeWithModels> {
        let state = self.state.lock().unwrap();
        state
            .makes
            .iter()
            .map(|make| MakeWithModels {
                make: make.clone(),
                models: state
                    .models
                    .iter()
                    .filter(|m| m.make_id == make.id)
                    .map(|model| ModelWithVariants {
                        model: model.clone(),
                        variants: state
                            .variants
                            .iter()
                            .filter(|v| v.model_id == model.id)
                            .cloned()
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[async_trait]
impl TaxonomyRepository for InMemoryTaxonomyRepository {
    async fn upsert_make(&self, make: NewMake) -> SeedResult<Make> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.makes.iter_mut().find(|m| m.name == make.name) {
            existing.image = make.image;
            return Ok(existing.clone());
        }

        let id = state.next_id();
        let created = Make {
            id,
            name: make.name,
            image: make.image,
        };
        state.makes.push(created.clone());
        Ok(created)
    }

    async fn upsert_model(&self, model: NewModel) -> SeedResult<Model> {
        let mut state = self.state.lock().unwrap();
        if !state.makes.iter().any(|m| m.id == model.make_id) {
            return Err(SeedError::Database(format!(
                "model references unknown make id {}",
                model.make_id
            )));
        }

        if let Some(existing) = state
            .models
            .iter()
            .find(|m| m.make_id == model.make_id && m.name == model.name)
        {
            return Ok(existing.clone());
        }

        let id = state.next_id();
        let created = Model {
            id,
            make_id: model.make_id,
            name: model.name,
        };
        state.models.push(created.clone());
        Ok(created)
    }

    async fn upsert_variant(&self, variant: NewVariant) -> SeedResult<ModelVariant> {
        let mut state = self.state.lock().unwrap();
        if !state.models.iter().any(|m| m.id == variant.model_id) {
            return Err(SeedError::Database(format!(
                "variant references unknown model id {}",
                variant.model_id
            )));
        }

        if let Some(existing) = state
            .variants
            .iter()
            .find(|v| v.model_id == variant.model_id && v.name == variant.name)
        {
            // Conflict path refreshes the name only; the stored year range
            // is deliberately left untouched.
            return Ok(existing.clone());
        }

        let id = state.next_id();
        let created = ModelVariant {
            id,
            model_id: variant.model_id,
            name: variant.name,
            year_start: variant.year_start,
            year_end: variant.year_end,
        };
        state.variants.push(created.clone());
        Ok(created)
    }

    async fn find_models_by_make(&self, make_id: i32) -> SeedResult<Vec<Model>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .models
            .iter()
            .filter(|m| m.make_id == make_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryClassifiedRepository {
    taxonomy: Vec<MakeWithModels>,
    listings: Mutex<Vec<NewClassified>>,
}

impl InMemoryClassifiedRepository {
    pub fn new(taxonomy: Vec<MakeWithModels>) -> Self {
        Self {
            taxonomy,
            listings: Mutex::new(Vec::new()),
        }
    }

    pub fn listings(&self) -> Vec<NewClassified> {
        self.listings.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClassifiedRepository for InMemoryClassifiedRepository {
    async fn find_makes_with_models(&self) -> SeedResult<Vec<MakeWithModels>> {
        Ok(self.taxonomy.clone())
    }

    async fn create_many(&self, listings: Vec<NewClassified>) -> SeedResult<usize> {
        let mut stored = self.listings.lock().unwrap();
        let mut seen: HashSet<String> = stored.iter().map(|l| l.slug.clone()).collect();

        let mut inserted = 0;
        for listing in listings {
            if seen.insert(listing.slug.clone()) {
                stored.push(listing);
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}
