//! Positive integer value objects.

use std::sync::LazyLock;

use serde::Serialize;

use scalarvo_core::{
    DeclaredType, RawValue, ScalarValue, ValueObjectError, ValueObjectRef, ValueObjectResult,
    ValueObjectStore,
};

static POSITIVE_INT: LazyLock<DeclaredType> =
    LazyLock::new(|| DeclaredType::base().refine("PositiveInt", normalize_positive_int));

/// Declared type of [`PositiveInt`]. Refine or extend it for narrower domains.
pub fn positive_int() -> DeclaredType {
    POSITIVE_INT.clone()
}

/// Accept integers above zero, or their canonical decimal text, and store them
/// as integers.
///
/// Text must round-trip exactly (`"1"`, not `"+1"`, `"01"` or `"1.0"`), so
/// every accepted text maps to one integer and back.
pub fn normalize_positive_int(value: ScalarValue) -> ValueObjectResult<ScalarValue> {
    let n = match &value {
        ScalarValue::Int(n) => *n,
        ScalarValue::Text(s) => parse_canonical(s)?,
        other => {
            return Err(ValueObjectError::invalid_value(format!(
                "positive int expects an integer, got {}",
                other.kind()
            )));
        }
    };

    if n <= 0 {
        return Err(ValueObjectError::invalid_value(format!(
            "positive int must be greater than zero, got {n}"
        )));
    }
    Ok(ScalarValue::Int(n))
}

fn parse_canonical(s: &str) -> ValueObjectResult<i64> {
    let n: i64 = s
        .parse()
        .map_err(|_| ValueObjectError::invalid_value(format!("'{s}' is not an integer")))?;
    if n.to_string() != s {
        return Err(ValueObjectError::invalid_value(format!(
            "'{s}' is not in canonical integer form"
        )));
    }
    Ok(n)
}

/// An interned integer greater than zero.
///
/// The integer is kept next to the handle; both are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PositiveInt {
    instance: ValueObjectRef,
    #[serde(skip)]
    value: i64,
}

impl PositiveInt {
    pub fn instance(store: &ValueObjectStore, raw: impl Into<RawValue>) -> ValueObjectResult<Self> {
        Self::instance_of(store, &positive_int(), raw)
    }

    /// Intern under `declared_type`, which must be [`positive_int()`] or a
    /// refinement of it.
    pub fn instance_of(
        store: &ValueObjectStore,
        declared_type: &DeclaredType,
        raw: impl Into<RawValue>,
    ) -> ValueObjectResult<Self> {
        if !declared_type.descends_from(&POSITIVE_INT) {
            return Err(ValueObjectError::invalid_operation(format!(
                "'{declared_type}' is not a refinement of PositiveInt"
            )));
        }
        let instance = store.instance_checked(declared_type, raw, |value| match value {
            ScalarValue::Int(_) => Ok(()),
            other => Err(ValueObjectError::invalid_operation(format!(
                "'{declared_type}' normalized a positive int into {}",
                other.kind()
            ))),
        })?;
        let value = instance.value().as_i64().ok_or_else(|| {
            ValueObjectError::invalid_operation(format!("'{declared_type}' holds a non-integer"))
        })?;
        Ok(Self { instance, value })
    }

    pub fn get(&self) -> i64 {
        self.value
    }
}

impl AsRef<ValueObjectRef> for PositiveInt {
    fn as_ref(&self) -> &ValueObjectRef {
        &self.instance
    }
}

impl From<PositiveInt> for ValueObjectRef {
    fn from(value: PositiveInt) -> Self {
        value.instance
    }
}

impl core::fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.value, f)
    }
}
