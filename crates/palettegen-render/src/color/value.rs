//! Raw color attribute values.
//!
//! Attributes arrive from a palette definition as loosely typed scalars. The
//! distinction between integers and floats is load-bearing: integers are read
//! as 0-255 channel values, floats as 0-1 fractions.

use std::fmt;

/// A single raw attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Whole number (`255`, `0xFF8000`).
    Integer(i64),
    /// Fractional number (`0.5`).
    Float(f64),
    /// String, only meaningful for `hex` (`"#FF8000"`).
    Text(String),
}

impl AttributeValue {
    /// Parses an attribute value from a YAML scalar.
    ///
    /// Supports:
    /// - Integers (any value that fits in `i64`)
    /// - Floats
    /// - Strings
    ///
    /// Booleans, nulls, sequences and mappings are rejected.
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        match value {
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(AttributeValue::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(AttributeValue::Float(f))
                } else {
                    Err(format!("Unsupported number: {}", n))
                }
            }
            serde_yaml::Value::String(s) => Ok(AttributeValue::Text(s.clone())),
            _ => Err(format!("Expected a number or string, got {:?}", value)),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(i) => write!(f, "{}", i),
            AttributeValue::Float(x) => write!(f, "{}", x),
            AttributeValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttributeValue {
                fn from(value: $t) -> Self {
                    AttributeValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, i8, i16, i32, i64);

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        AttributeValue::Float(f64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

/// Ordered raw attributes for one color.
///
/// Keys are kept as written (`r`, `red`, `hex`, ...). Insertion order is kept
/// so that a later spelling of the same component wins during resolution.
///
/// ```rust
/// use palettegen_render::Attributes;
///
/// let attrs = Attributes::new().with("r", 255).with("g", 128).with("b", 0);
/// assert_eq!(attrs.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Appends an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Returns the last value recorded under `key`.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}
