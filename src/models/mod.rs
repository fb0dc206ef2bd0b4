// Data models and DTOs

pub mod item;

pub use item::{CreateItemInput, Item, ItemError, UpdateItemInput};
