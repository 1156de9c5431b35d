pub mod classifieds;
pub mod taxonomy;
