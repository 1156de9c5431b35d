pub mod logger;
pub mod slug;

pub use logger::init_logger;
pub use slug::slugify;
