use serde_json::{Map, Value};

use crate::schema::violation::type_of;
use crate::schema::{FieldPath, ObjectShape, Shape, ShapeViolation, UnknownKeys, ViolationKind};
use crate::text_utils::parse_date_time;

pub(crate) fn validate_object(shape: &ObjectShape, value: &Value, path: &FieldPath, out: &mut Vec<ShapeViolation>) {
    let Value::Object(record) = value else {
        out.push(wrong_type(path, "object", value));
        return;
    };

    for (name, field_shape) in shape.fields() {
        let field_path = path.key(name);
        match record.get(name) {
            Some(field) => validate_value(field_shape, field, &field_path, out),
            None => out.push(ShapeViolation {
                path: field_path,
                kind: ViolationKind::Missing { expected: field_shape.to_string() },
            }),
        }
    }

    if shape.unknown_keys() == UnknownKeys::Strict {
        for key in record.keys() {
            if shape.get(key).is_none() {
                out.push(ShapeViolation {
                    path: path.key(key),
                    kind: ViolationKind::UnrecognizedKey,
                });
            }
        }
    }
}

fn validate_value(shape: &Shape, value: &Value, path: &FieldPath, out: &mut Vec<ShapeViolation>) {
    match (shape, value) {
        (Shape::Text, Value::String(_)) => {}
        (Shape::Date, Value::String(date)) => {
            if parse_date_time(date).is_err() {
                out.push(ShapeViolation {
                    path: path.clone(),
                    kind: ViolationKind::InvalidDate { value: date.clone() },
                });
            }
        }
        (Shape::Array(items), Value::Array(values)) => {
            for (i, item) in values.iter().enumerate() {
                validate_value(items, item, &path.index(i), out);
            }
        }
        (Shape::Object(object), Value::Object(_)) => validate_object(object, value, path, out),
        (shape, value) => out.push(wrong_type(path, &shape.to_string(), value)),
    }
}

fn wrong_type(path: &FieldPath, expected: &str, value: &Value) -> ShapeViolation {
    ShapeViolation {
        path: path.clone(),
        kind: ViolationKind::WrongType { expected: expected.to_string(), found: type_of(value) },
    }
}

/// Projects an already validated value onto its shape.
pub(crate) fn strip_object(shape: &ObjectShape, value: &Value) -> Value {
    let Value::Object(record) = value else {
        return value.clone();
    };

    let mut stripped = Map::new();
    for (name, field_shape) in shape.fields() {
        if let Some(field) = record.get(name) {
            stripped.insert(name.to_string(), strip_value(field_shape, field));
        }
    }
    Value::Object(stripped)
}

fn strip_value(shape: &Shape, value: &Value) -> Value {
    match (shape, value) {
        (Shape::Array(items), Value::Array(values)) => {
            Value::Array(values.iter().map(|v| strip_value(items, v)).collect())
        }
        (Shape::Object(object), value) => strip_object(object, value),
        (_, value) => value.clone(),
    }
}
