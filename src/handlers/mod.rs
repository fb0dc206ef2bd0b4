// HTTP handlers and their route builders

pub mod extractors;
pub mod health;
pub mod items;

pub use items::item_routes;
