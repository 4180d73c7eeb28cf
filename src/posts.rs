use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collection::{define_collection, Collection, CollectionRegistry, CollectionType};
use crate::schema::{ObjectShape, Shape, Violations};
use crate::util::entry_date::EntryDate;

pub const POSTS: &str = "posts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub initial: String,
    pub bio: String,
}

/// Front-matter of a blog post. Every field is required; `tags` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEntry {
    pub title: String,
    /// Title with inline markup allowed
    pub title_html: String,
    pub subtitle: String,
    pub category: String,
    pub date: EntryDate,
    /// e.g. "5 min"
    pub read_time: String,
    pub thumbnail: Thumbnail,
    pub hero_image: HeroImage,
    pub tags: Vec<String>,
    pub author: Author,
}

impl PostEntry {
    pub fn from_record(record: &Value) -> Result<PostEntry, Violations> {
        POST_COLLECTION.parse_entry_as(record)
    }
}

pub fn post_schema() -> ObjectShape {
    ObjectShape::new()
        .field("title", Shape::Text)
        .field("titleHtml", Shape::Text)
        .field("subtitle", Shape::Text)
        .field("category", Shape::Text)
        .field("date", Shape::Date)
        .field("readTime", Shape::Text)
        .field("thumbnail", Shape::Object(ObjectShape::new()
            .field("src", Shape::Text)
            .field("alt", Shape::Text)))
        .field("heroImage", Shape::Object(ObjectShape::new()
            .field("src", Shape::Text)
            .field("alt", Shape::Text)
            .field("caption", Shape::Text)))
        .field("tags", Shape::array(Shape::Text))
        .field("author", Shape::Object(ObjectShape::new()
            .field("name", Shape::Text)
            .field("initial", Shape::Text)
            .field("bio", Shape::Text)))
}

lazy_static! {
    static ref POST_COLLECTION: Collection = define_collection(CollectionType::Content, post_schema());
    static ref COLLECTIONS: CollectionRegistry = CollectionRegistry::new()
        .with(POSTS, POST_COLLECTION.clone());
}

/// Every collection of the site, by name.
pub fn collections() -> &'static CollectionRegistry {
    &COLLECTIONS
}
