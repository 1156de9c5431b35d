use crate::log_info;
use crate::modules::classifieds::domain::entities::{MakeWithModels, NewClassified};
use crate::modules::classifieds::domain::repository::ClassifiedRepository;
use crate::modules::classifieds::domain::value_objects::{
    BodyType, ClassifiedStatus, Colour, CurrencyCode, FuelType, Transmission, UlezCompliance,
};
use crate::shared::errors::SeedResult;
use crate::shared::utils::slug::slugify;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 2000..=2023;
const PRICE_RANGE: std::ops::RangeInclusive<i32> = 400_000..=10_000_000;
const ODO_RANGE: std::ops::RangeInclusive<i32> = 0..=200_000;
const VIEWS_RANGE: std::ops::RangeInclusive<i32> = 0..=1_000;
const DOOR_OPTIONS: [i32; 4] = [2, 3, 4, 5];
const SEAT_OPTIONS: [i32; 6] = [2, 3, 4, 5, 6, 7];

const FILLER_WORDS: [&str; 24] = [
    "immaculate",
    "condition",
    "full",
    "service",
    "history",
    "one",
    "previous",
    "owner",
    "recently",
    "fitted",
    "tyres",
    "drives",
    "superbly",
    "long",
    "mot",
    "cambelt",
    "replaced",
    "air",
    "conditioning",
    "alloy",
    "wheels",
    "viewing",
    "recommended",
    "px-welcome",
];

/// Generates one randomized classified listing per persisted make slot and
/// bulk-inserts the lot, skipping duplicate slugs.
pub struct ClassifiedSeedService {
    repo: Arc<dyn ClassifiedRepository>,
}

impl ClassifiedSeedService {
    pub fn new(repo: Arc<dyn ClassifiedRepository>) -> Self {
        Self { repo }
    }

    pub async fn run(&self) -> SeedResult<usize> {
        let makes = self.repo.find_makes_with_models().await?;
        let listings = generate_listings(&mut rand::thread_rng(), &makes);

        let generated = listings.len();
        let created = self.repo.create_many(listings).await?;
        log_info!(
            "Created {} classifieds from {} generated listings",
            created,
            generated
        );
        Ok(created)
    }
}

/// One listing slot per make; each slot draws a random make, one of its
/// models, and optionally a variant. Makes without models yield nothing.
pub fn generate_listings<R: Rng>(rng: &mut R, makes: &[MakeWithModels]) -> Vec<NewClassified> {
    let mut listings = Vec::with_capacity(makes.len());
    for _ in 0..makes.len() {
        if let Some(listing) = generate_listing(rng, makes) {
            listings.push(listing);
        }
    }
    listings
}

fn generate_listing<R: Rng>(rng: &mut R, makes: &[MakeWithModels]) -> Option<NewClassified> {
    let make = makes.choose(rng)?;
    let model = make.models.choose(rng)?;
    let variant = model.variants.choose(rng);

    let year = rng.gen_range(YEAR_RANGE);
    let title = match variant {
        Some(v) => format!("{} {} {} {}", year, make.make.name, model.model.name, v.name),
        None => format!("{} {} {}", year, make.make.name, model.model.name),
    };
    let vrm = random_vrm(rng);
    let slug = slugify(&format!("{} {}", title, vrm));

    Some(NewClassified {
        slug,
        vrm,
        title,
        description: filler_paragraphs(rng, 3),
        year,
        odo_reading: rng.gen_range(ODO_RANGE),
        doors: *DOOR_OPTIONS.choose(rng).unwrap_or(&4),
        seats: *SEAT_OPTIONS.choose(rng).unwrap_or(&5),
        views: rng.gen_range(VIEWS_RANGE),
        price: rng.gen_range(PRICE_RANGE),
        currency: CurrencyCode::Gbp,
        body_type: pick(rng, BodyType::ALL),
        transmission: pick(rng, Transmission::ALL),
        fuel_type: pick(rng, FuelType::ALL),
        colour: pick(rng, Colour::ALL),
        ulez_compliance: pick(rng, UlezCompliance::ALL),
        status: pick(rng, ClassifiedStatus::ALL),
        make_id: make.make.id,
        model_id: model.model.id,
        model_variant_id: variant.map(|v| v.id),
    })
}

fn pick<R: Rng, T: Copy>(rng: &mut R, options: &[T]) -> T {
    options[rng.gen_range(0..options.len())]
}

/// Current-style UK registration mark, e.g. `AB12 CDE`.
fn random_vrm<R: Rng>(rng: &mut R) -> String {
    let letter = |rng: &mut R| (b'A' + rng.gen_range(0..26)) as char;
    let mut out = String::with_capacity(8);
    out.push(letter(rng));
    out.push(letter(rng));
    out.push(char::from_digit(rng.gen_range(0..10), 10).unwrap_or('0'));
    out.push(char::from_digit(rng.gen_range(0..10), 10).unwrap_or('0'));
    out.push(' ');
    out.push(letter(rng));
    out.push(letter(rng));
    out.push(letter(rng));
    out
}

fn filler_paragraphs<R: Rng>(rng: &mut R, paragraphs: usize) -> String {
    let mut out = Vec::with_capacity(paragraphs);
    for _ in 0..paragraphs {
        let words: Vec<&str> = (0..rng.gen_range(12..=20))
            .map(|_| pick(rng, &FILLER_WORDS))
            .collect();
        out.push(words.join(" "));
    }
    out.join("\n\n")
}
