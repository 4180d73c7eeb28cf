use std::fmt::{Display, Formatter};
use std::fmt;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a record, displayed as `thumbnail.alt` or `tags[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> FieldPath {
        FieldPath(vec![])
    }

    pub fn key(&self, key: &str) -> FieldPath {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        FieldPath(segments)
    }

    pub fn index(&self, index: usize) -> FieldPath {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        FieldPath(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "(root)");
        }

        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Missing { expected: String },
    WrongType { expected: String, found: &'static str },
    InvalidDate { value: String },
    UnrecognizedKey,
    /// The value passed shape validation but the typed record refused it.
    Rejected { reason: String },
}

impl Display for ViolationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing { expected } => write!(f, "required {} is missing", expected),
            ViolationKind::WrongType { expected, found } => write!(f, "expected {}, found {}", expected, found),
            ViolationKind::InvalidDate { value } => write!(f, "'{}' is not a recognized date", value),
            ViolationKind::UnrecognizedKey => write!(f, "unrecognized key"),
            ViolationKind::Rejected { reason } => write!(f, "rejected: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct ShapeViolation {
    pub path: FieldPath,
    pub kind: ViolationKind,
}

/// Every violation found in one record. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<ShapeViolation>);

impl Violations {
    pub(crate) fn from_vec(violations: Vec<ShapeViolation>) -> Option<Violations> {
        if violations.is_empty() {
            None
        } else {
            Some(Violations(violations))
        }
    }

    pub fn single(path: FieldPath, kind: ViolationKind) -> Violations {
        Violations(vec![ShapeViolation { path, kind }])
    }

    pub fn iter(&self) -> impl Iterator<Item=&ShapeViolation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Display form of every offending path, in the order they were found.
    pub fn paths(&self) -> Vec<String> {
        self.0.iter().map(|v| v.path.to_string()).collect()
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.0.iter().any(|v| v.path.to_string() == path)
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", lines.join("; "))
    }
}

impl std::error::Error for Violations {}

impl IntoIterator for Violations {
    type Item = ShapeViolation;
    type IntoIter = std::vec::IntoIter<ShapeViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub(crate) fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        assert_eq!(FieldPath::root().to_string(), "(root)");
        assert_eq!(FieldPath::root().key("thumbnail").key("alt").to_string(), "thumbnail.alt");
        assert_eq!(FieldPath::root().key("tags").index(2).to_string(), "tags[2]");
    }

    #[test]
    fn test_violation_display() {
        let violations = Violations(vec![
            ShapeViolation {
                path: FieldPath::root().key("readTime"),
                kind: ViolationKind::Missing { expected: "text".to_string() },
            },
            ShapeViolation {
                path: FieldPath::root().key("date"),
                kind: ViolationKind::InvalidDate { value: "soon".to_string() },
            },
        ]);
        assert_eq!(violations.to_string(), "readTime: required text is missing; date: 'soon' is not a recognized date");
        assert_eq!(violations.paths(), ["readTime", "date"]);
    }
}
