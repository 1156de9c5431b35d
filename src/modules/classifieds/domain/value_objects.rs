/// Enum columns of the classifieds table, matching the Postgres enum types
/// the web application's schema declares.

macro_rules! classified_enum {
    ($name:ident, $sql_type:literal, [$($variant:ident),+ $(,)?]) => {
        #[derive(diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq)]
        #[ExistingTypePath = $sql_type]
        #[DbValueStyle = "SCREAMING_SNAKE_CASE"]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }
    };
}

classified_enum!(
    CurrencyCode,
    "crate::schema::sql_types::CurrencyCode",
    [Gbp, Eur, Usd]
);

classified_enum!(
    BodyType,
    "crate::schema::sql_types::BodyType",
    [Sedan, Hatchback, Suv, Coupe, Convertible, Wagon]
);

classified_enum!(
    Transmission,
    "crate::schema::sql_types::Transmission",
    [Manual, Automatic]
);

classified_enum!(
    FuelType,
    "crate::schema::sql_types::FuelType",
    [Petrol, Diesel, Electric, Hybrid]
);

classified_enum!(
    Colour,
    "crate::schema::sql_types::Colour",
    [
        Black, Blue, Brown, Gold, Green, Grey, Orange, Pink, Purple, Red, Silver, White, Yellow
    ]
);

classified_enum!(
    UlezCompliance,
    "crate::schema::sql_types::UlezCompliance",
    [Exempt, NonExempt]
);

classified_enum!(
    ClassifiedStatus,
    "crate::schema::sql_types::ClassifiedStatus",
    [Live, Draft, Sold]
);
