//! The parsed value tree and its accessors.
//!
//! A [`Value`] owns its children outright: dropping the root releases the
//! whole tree. String payloads are shared [`IStr`] handles, kept alive by
//! reference counting for as long as any value mentions them.

use crate::error::AccessError;
use crate::intern::IStr;

/// A JSON number, split by representation.
///
/// Literals without a fraction or exponent that fit `i64` are [`Int`];
/// everything else is [`Float`].
///
/// [`Int`]: Number::Int
/// [`Float`]: Number::Float
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integer literal within `i64` range.
    Int(i64),
    /// A fractional, exponent-bearing or `i64`-overflowing literal.
    Float(f64),
}

impl Number {
    /// The value as `i64`, if it is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(*n),
            Number::Float(_) => None,
        }
    }

    /// The value as `f64`, converting integers losslessly where possible.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(f) => *f,
        }
    }
}

/// A node in a parsed JSON tree.
///
/// Objects preserve the order in which fields appeared in the document.
/// Every node exclusively owns its children; a fresh parse always yields a
/// fresh tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON `true` or `false`.
    Bool(bool),
    /// A JSON number.
    Number(Number),
    /// A JSON string, decoded and interned.
    String(IStr),
    /// A JSON array.
    Array(Vec<Value>),
    /// A JSON object as ordered `(key, value)` pairs.
    Object(Vec<(IStr, Value)>),
}

impl Value {
    /// Returns true if this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer value, if this is an integer number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// The numeric value as `f64`, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// The string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The ordered field pairs, if this is an object.
    pub fn as_object(&self) -> Option<&[(IStr, Value)]> {
        match self {
            Value::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// The variant name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Look up an object field by exact key.
    ///
    /// Keys are matched by byte equality; the first match in insertion order
    /// wins. Fails with [`AccessError::TypeMismatch`] on non-objects and
    /// [`AccessError::NotFound`] for absent keys.
    pub fn get_field(&self, key: &str) -> Result<&Value, AccessError> {
        match self {
            Value::Object(pairs) => pairs
                .iter()
                .find(|(k, _)| k.as_ref() == key)
                .map(|(_, v)| v)
                .ok_or_else(|| AccessError::NotFound {
                    key: key.to_string(),
                }),
            other => Err(AccessError::TypeMismatch {
                expected: "object",
                found: other.type_name(),
            }),
        }
    }

    /// Look up an array element by index.
    ///
    /// Fails with [`AccessError::TypeMismatch`] on non-arrays and
    /// [`AccessError::IndexOutOfRange`] for indexes past the end.
    pub fn get_index(&self, index: usize) -> Result<&Value, AccessError> {
        match self {
            Value::Array(items) => {
                items.get(index).ok_or(AccessError::IndexOutOfRange {
                    index,
                    len: items.len(),
                })
            }
            other => Err(AccessError::TypeMismatch {
                expected: "array",
                found: other.type_name(),
            }),
        }
    }

    /// Resolve a dotted path such as `servers.0.host`.
    ///
    /// Each segment is a field name, except that numeric segments index into
    /// arrays. The empty path resolves to `self`.
    pub fn lookup(&self, path: &str) -> Result<&Value, AccessError> {
        if path.is_empty() {
            return Ok(self);
        }
        let mut node = self;
        for segment in path.split('.') {
            node = match (node, segment.parse::<usize>()) {
                (Value::Array(_), Ok(index)) => node.get_index(index)?,
                _ => node.get_field(segment)?,
            };
        }
        Ok(node)
    }
}
