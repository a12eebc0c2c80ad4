//! Scalar payloads carried by value objects.

use serde::Serialize;

/// Kind of a scalar payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
}

impl ScalarKind {
    /// Single-character tag used to keep loosely-equal values of different
    /// kinds (`1` and `"1"`) in separate cache slots.
    pub fn tag(self) -> char {
        match self {
            ScalarKind::Null => 'N',
            ScalarKind::Bool => 'b',
            ScalarKind::Int => 'i',
            ScalarKind::Float => 'd',
            ScalarKind::Text => 's',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Null => "null",
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Text => "text",
        }
    }
}

impl core::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A primitive scalar. Exactly one kind is active.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ScalarValue {
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Null => ScalarKind::Null,
            ScalarValue::Bool(_) => ScalarKind::Bool,
            ScalarValue::Int(_) => ScalarKind::Int,
            ScalarValue::Float(_) => ScalarKind::Float,
            ScalarValue::Text(_) => ScalarKind::Text,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Canonical rendering.
///
/// This is also the value half of the cache key, so two scalars of the same
/// kind that render identically share one instance (`-0.0` and `0.0` do not:
/// they render as `-0` and `0`).
impl core::fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScalarValue::Null => Ok(()),
            ScalarValue::Bool(b) => core::fmt::Display::fmt(b, f),
            ScalarValue::Int(n) => core::fmt::Display::fmt(n, f),
            ScalarValue::Float(x) => core::fmt::Display::fmt(x, f),
            ScalarValue::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_scalar_from {
    ($t:ty, $variant:ident, $conv:expr) => {
        impl From<$t> for ScalarValue {
            fn from(value: $t) -> Self {
                ScalarValue::$variant($conv(value))
            }
        }
    };
}

impl_scalar_from!(bool, Bool, |v| v);
impl_scalar_from!(i64, Int, |v| v);
impl_scalar_from!(i32, Int, i64::from);
impl_scalar_from!(u32, Int, i64::from);
impl_scalar_from!(f64, Float, |v| v);
impl_scalar_from!(String, Text, |v| v);
impl_scalar_from!(&str, Text, str::to_owned);

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ScalarValue::Null, Into::into)
    }
}

impl From<ScalarValue> for serde_json::Value {
    /// Non-finite floats have no JSON form and become `null`.
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Null => serde_json::Value::Null,
            ScalarValue::Bool(b) => serde_json::Value::Bool(b),
            ScalarValue::Int(n) => serde_json::Value::from(n),
            ScalarValue::Float(x) => serde_json::Value::from(x),
            ScalarValue::Text(s) => serde_json::Value::String(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_are_distinct() {
        let tags = [
            ScalarKind::Null.tag(),
            ScalarKind::Bool.tag(),
            ScalarKind::Int.tag(),
            ScalarKind::Float.tag(),
            ScalarKind::Text.tag(),
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn canonical_rendering() {
        assert_eq!(ScalarValue::Int(-42).to_string(), "-42");
        assert_eq!(ScalarValue::Int(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(ScalarValue::Float(1.0).to_string(), "1");
        assert_eq!(ScalarValue::Float(1.5).to_string(), "1.5");
        assert_eq!(ScalarValue::Text("string with spaces".into()).to_string(), "string with spaces");
        assert_eq!(ScalarValue::Bool(true).to_string(), "true");
        assert_eq!(ScalarValue::Bool(false).to_string(), "false");
        assert_eq!(ScalarValue::Null.to_string(), "");
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(ScalarValue::from(None::<i64>), ScalarValue::Null);
        assert_eq!(ScalarValue::from(Some(3)), ScalarValue::Int(3));
    }

    #[test]
    fn accessors_match_kind_only() {
        let v = ScalarValue::from("1");
        assert_eq!(v.as_str(), Some("1"));
        assert_eq!(v.as_i64(), None);
        assert_eq!(v.kind(), ScalarKind::Text);
    }

    #[test]
    fn serializes_as_bare_scalar() {
        assert_eq!(serde_json::to_string(&ScalarValue::Int(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&ScalarValue::from("a")).unwrap(), "\"a\"");
        assert_eq!(serde_json::to_string(&ScalarValue::Null).unwrap(), "null");
    }
}
