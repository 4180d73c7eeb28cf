use std::fmt::{Display, Formatter};
use std::fmt;

use serde_json::{json, Value};

pub mod violation;
mod validate;

pub use violation::{FieldPath, PathSegment, ShapeViolation, ViolationKind, Violations};

/// Accepted shape of a front-matter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Text,
    Date,
    Array(Box<Shape>),
    Object(ObjectShape),
}

impl Shape {
    pub fn array(items: Shape) -> Shape {
        Shape::Array(Box::new(items))
    }

    fn describe(&self) -> Value {
        match self {
            Shape::Text => json!("text"),
            Shape::Date => json!("date"),
            Shape::Array(items) => json!({ "array": items.describe() }),
            Shape::Object(object) => object.describe(),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Text => write!(f, "text"),
            Shape::Date => write!(f, "date"),
            Shape::Array(items) => write!(f, "{}[]", items),
            Shape::Object(_) => write!(f, "object"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Unknown keys are dropped from the parsed record
    #[default]
    Strip,
    /// Unknown keys are violations
    Strict,
}

/// A record shape: named fields, all required, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectShape {
    fields: Vec<(String, Shape)>,
    unknown_keys: UnknownKeys,
}

impl ObjectShape {
    pub fn new() -> ObjectShape {
        ObjectShape::default()
    }

    pub fn field(mut self, name: &str, shape: Shape) -> ObjectShape {
        self.fields.retain(|(existing, _)| existing != name);
        self.fields.push((name.to_string(), shape));
        self
    }

    pub fn strict(mut self) -> ObjectShape {
        self.unknown_keys = UnknownKeys::Strict;
        self
    }

    pub fn unknown_keys(&self) -> UnknownKeys {
        self.unknown_keys
    }

    pub fn fields(&self) -> impl Iterator<Item=(&str, &Shape)> {
        self.fields.iter().map(|(name, shape)| (name.as_str(), shape))
    }

    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.fields.iter()
            .find(|(field, _)| field == name)
            .map(|(_, shape)| shape)
    }

    /// Name of the first top-level date field, used to order entries.
    pub fn date_field(&self) -> Option<&str> {
        self.fields()
            .find(|(_, shape)| **shape == Shape::Date)
            .map(|(name, _)| name)
    }

    /// Checks the whole record and reports every violation found.
    pub fn validate(&self, record: &Value) -> Result<(), Violations> {
        let mut violations = vec![];
        validate::validate_object(self, record, &FieldPath::root(), &mut violations);
        match Violations::from_vec(violations) {
            Some(violations) => Err(violations),
            None => Ok(()),
        }
    }

    /// Validates the record and returns it holding only the declared fields.
    pub fn parse(&self, record: &Value) -> Result<Value, Violations> {
        self.validate(record)?;
        Ok(validate::strip_object(self, record))
    }

    pub fn describe(&self) -> Value {
        let fields: Vec<Value> = self.fields.iter()
            .map(|(name, shape)| json!({ "name": name, "shape": shape.describe() }))
            .collect();
        json!({
            "object": fields,
            "strict": self.unknown_keys == UnknownKeys::Strict,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn image_shape() -> ObjectShape {
        ObjectShape::new()
            .field("src", Shape::Text)
            .field("alt", Shape::Text)
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::Text.to_string(), "text");
        assert_eq!(Shape::array(Shape::Text).to_string(), "text[]");
        assert_eq!(Shape::Object(image_shape()).to_string(), "object");
    }

    #[test]
    fn test_field_redeclared_replaces() {
        let shape = image_shape().field("src", Shape::Date);
        assert_eq!(shape.fields().count(), 2);
        assert_eq!(shape.get("src"), Some(&Shape::Date));
    }

    #[test]
    fn test_date_field() {
        let shape = ObjectShape::new()
            .field("title", Shape::Text)
            .field("published", Shape::Date);
        assert_eq!(shape.date_field(), Some("published"));
        assert_eq!(image_shape().date_field(), None);
    }

    #[test]
    fn test_parse_strips_unknown_keys() {
        let record = json!({ "src": "a.png", "alt": "A", "width": 300 });
        let parsed = image_shape().parse(&record).unwrap();
        assert_eq!(parsed, json!({ "src": "a.png", "alt": "A" }));
    }

    #[test]
    fn test_strict_rejects_unknown_keys() {
        let record = json!({ "src": "a.png", "alt": "A", "width": 300 });
        let violations = image_shape().strict().validate(&record).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(violations.contains_path("width"));
    }

    #[test]
    fn test_describe() {
        let shape = ObjectShape::new()
            .field("tags", Shape::array(Shape::Text))
            .field("thumbnail", Shape::Object(image_shape()));
        assert_eq!(shape.describe(), json!({
            "object": [
                { "name": "tags", "shape": { "array": "text" } },
                { "name": "thumbnail", "shape": {
                    "object": [
                        { "name": "src", "shape": "text" },
                        { "name": "alt", "shape": "text" },
                    ],
                    "strict": false,
                } },
            ],
            "strict": false,
        }));
    }
}
