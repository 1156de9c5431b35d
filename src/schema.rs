// Mirrors the tables the seeder writes to. Migrations are owned by the web
// application; keep this file in sync with its schema.

pub mod sql_types {
    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "BodyType"))]
    pub struct BodyType;

    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "ClassifiedStatus"))]
    pub struct ClassifiedStatus;

    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "Colour"))]
    pub struct Colour;

    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "CurrencyCode"))]
    pub struct CurrencyCode;

    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "FuelType"))]
    pub struct FuelType;

    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "Transmission"))]
    pub struct Transmission;

    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "ULEZCompliance"))]
    pub struct UlezCompliance;
}

diesel::table! {
    makes (id) {
        id -> Int4,
        #[max_length = 120]
        name -> Varchar,
        image -> Text,
    }
}

diesel::table! {
    models (id) {
        id -> Int4,
        make_id -> Int4,
        #[max_length = 120]
        name -> Varchar,
    }
}

diesel::table! {
    model_variants (id) {
        id -> Int4,
        model_id -> Int4,
        #[max_length = 120]
        name -> Varchar,
        year_start -> Int4,
        year_end -> Int4,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use super::sql_types::BodyType;
    use super::sql_types::ClassifiedStatus;
    use super::sql_types::Colour;
    use super::sql_types::CurrencyCode;
    use super::sql_types::FuelType;
    use super::sql_types::Transmission;
    use super::sql_types::UlezCompliance;

    classifieds (id) {
        id -> Int4,
        slug -> Text,
        #[max_length = 10]
        vrm -> Varchar,
        title -> Text,
        description -> Text,
        year -> Int4,
        odo_reading -> Int4,
        doors -> Int4,
        seats -> Int4,
        views -> Int4,
        price -> Int4,
        currency -> CurrencyCode,
        body_type -> BodyType,
        transmission -> Transmission,
        fuel_type -> FuelType,
        colour -> Colour,
        ulez_compliance -> UlezCompliance,
        status -> ClassifiedStatus,
        make_id -> Int4,
        model_id -> Int4,
        model_variant_id -> Nullable<Int4>,
    }
}

diesel::joinable!(models -> makes (make_id));
diesel::joinable!(model_variants -> models (model_id));
diesel::joinable!(classifieds -> makes (make_id));
diesel::joinable!(classifieds -> models (model_id));

diesel::allow_tables_to_appear_in_same_query!(makes, models, model_variants, classifieds);
