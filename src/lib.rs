pub mod collection;
pub mod config;
pub mod content;
pub mod content_store;
pub mod error;
pub mod loader;
pub mod logger;
pub mod posts;
pub mod schema;
pub mod text_utils;
pub mod util;
mod test_data;

pub use collection::{define_collection, Collection, CollectionRegistry, CollectionType};
pub use posts::{collections, PostEntry};
