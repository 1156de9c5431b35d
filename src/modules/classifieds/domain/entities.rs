use crate::modules::classifieds::domain::value_objects::{
    BodyType, ClassifiedStatus, Colour, CurrencyCode, FuelType, Transmission, UlezCompliance,
};
use crate::modules::taxonomy::domain::entities::{Make, Model, ModelVariant};

/// A make with its persisted models and variants, as read back from the
/// store after the taxonomy import.
#[derive(Debug, Clone)]
pub struct MakeWithModels {
    pub make: Make,
    pub models: Vec<ModelWithVariants>,
}

#[derive(Debug, Clone)]
pub struct ModelWithVariants {
    pub model: Model,
    pub variants: Vec<ModelVariant>,
}

/// Fields for one generated listing. `slug` is the uniqueness key for the
/// duplicate-skipping bulk insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClassified {
    pub slug: String,
    pub vrm: String,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub odo_reading: i32,
    pub doors: i32,
    pub seats: i32,
    pub views: i32,
    /// Pence
    pub price: i32,
    pub currency: CurrencyCode,
    pub body_type: BodyType,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub colour: Colour,
    pub ulez_compliance: UlezCompliance,
    pub status: ClassifiedStatus,
    pub make_id: i32,
    pub model_id: i32,
    pub model_variant_id: Option<i32>,
}
