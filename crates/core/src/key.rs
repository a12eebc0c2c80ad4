//! Instance table key.

use std::sync::Arc;

use crate::declared::DeclaredType;
use crate::scalar::ScalarValue;

/// `(declared type, kind tag, canonical rendering)`.
///
/// The kind tag is load-bearing: `1` and `"1"` render identically and are
/// separated only by their tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    declared_type: Arc<str>,
    tag: char,
    rendered: String,
}

impl CacheKey {
    pub fn new(declared_type: &DeclaredType, value: &ScalarValue) -> Self {
        Self {
            declared_type: declared_type.shared_path(),
            tag: value.kind().tag(),
            rendered: value.to_string(),
        }
    }

    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    pub fn tag(&self) -> char {
        self.tag
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl core::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}|{}|{}", self.declared_type, self.tag, self.rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: impl Into<ScalarValue>) -> CacheKey {
        CacheKey::new(&DeclaredType::base(), &value.into())
    }

    #[test]
    fn loosely_equal_values_of_different_kinds_do_not_collide() {
        let pairs: Vec<(ScalarValue, ScalarValue)> = vec![
            (1.into(), "1".into()),
            (true.into(), 1.into()),
            (true.into(), "true".into()),
            (false.into(), "false".into()),
            (ScalarValue::Null, "".into()),
            (ScalarValue::Null, false.into()),
            (ScalarValue::Float(1.0), 1.into()),
        ];
        for (a, b) in pairs {
            assert_ne!(key(a.clone()), key(b.clone()), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn equal_values_collide() {
        assert_eq!(key(7), key(7i32));
        assert_eq!(key("abc"), key(String::from("abc")));
    }

    #[test]
    fn declared_type_is_part_of_the_key() {
        let child = DeclaredType::base().extend("Example");
        assert_ne!(
            CacheKey::new(&DeclaredType::base(), &ScalarValue::Int(1)),
            CacheKey::new(&child, &ScalarValue::Int(1))
        );
    }

    #[test]
    fn display_layout() {
        assert_eq!(key(42).to_string(), "ValueObject|i|42");
        assert_eq!(key("x").tag(), 's');
    }
}
