pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{MakeWithModels, ModelWithVariants, NewClassified};
pub use repository::ClassifiedRepository;
pub use value_objects::{
    BodyType, ClassifiedStatus, Colour, CurrencyCode, FuelType, Transmission, UlezCompliance,
};
