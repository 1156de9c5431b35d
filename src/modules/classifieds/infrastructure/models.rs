/// Diesel row models for the classifieds table
use crate::modules::classifieds::domain::entities::NewClassified;
use crate::modules::classifieds::domain::value_objects::{
    BodyType, ClassifiedStatus, Colour, CurrencyCode, FuelType, Transmission, UlezCompliance,
};
use crate::schema::classifieds;
use diesel::prelude::*;

#[derive(Insertable, Debug)]
#[diesel(table_name = classifieds)]
pub struct NewClassifiedRow<'a> {
    pub slug: &'a str,
    pub vrm: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub year: i32,
    pub odo_reading: i32,
    pub doors: i32,
    pub seats: i32,
    pub views: i32,
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

impl<'a> NewClassifiedRow<'a> {
    pub fn from_domain(listing: &'a NewClassified) -> Self {
        Self {
            slug: &listing.slug,
            vrm: &listing.vrm,
            title: &listing.title,
            description: &listing.description,
            year: listing.year,
            odo_reading: listing.odo_reading,
            doors: listing.doors,
            seats: listing.seats,
            views: listing.views,
            price: listing.price,
            currency: listing.currency,
            body_type: listing.body_type,
            transmission: listing.transmission,
            fuel_type: listing.fuel_type,
            colour: listing.colour,
            ulez_compliance: listing.ulez_compliance,
            status: listing.status,
            make_id: listing.make_id,
            model_id: listing.model_id,
            model_variant_id: listing.model_variant_id,
        }
    }
}
