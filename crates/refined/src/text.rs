//! Text value objects.

use std::sync::LazyLock;

use serde::Serialize;

use scalarvo_core::{
    DeclaredType, RawValue, ScalarValue, ValueObjectError, ValueObjectRef, ValueObjectResult,
    ValueObjectStore,
};

static NON_EMPTY_TEXT: LazyLock<DeclaredType> =
    LazyLock::new(|| DeclaredType::base().refine("NonEmptyText", normalize_non_empty_text));

/// Declared type of [`NonEmptyText`].
pub fn non_empty_text() -> DeclaredType {
    NON_EMPTY_TEXT.clone()
}

/// Accept text with at least one non-whitespace character; store it trimmed.
pub fn normalize_non_empty_text(value: ScalarValue) -> ValueObjectResult<ScalarValue> {
    match value {
        ScalarValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(ValueObjectError::invalid_value("text must not be blank"))
            } else if trimmed.len() == s.len() {
                Ok(ScalarValue::Text(s))
            } else {
                Ok(ScalarValue::Text(trimmed.to_string()))
            }
        }
        other => Err(ValueObjectError::invalid_value(format!(
            "non-empty text expects text, got {}",
            other.kind()
        ))),
    }
}

/// Interned, trimmed, non-blank text.
///
/// Only built from [`non_empty_text()`], whose refinement always yields text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NonEmptyText(ValueObjectRef);

impl NonEmptyText {
    pub fn instance(store: &ValueObjectStore, raw: impl Into<RawValue>) -> ValueObjectResult<Self> {
        let instance = store.instance(&NON_EMPTY_TEXT, raw)?;
        Ok(Self(instance))
    }

    pub fn as_str(&self) -> &str {
        match self.0.value() {
            ScalarValue::Text(s) => s,
            other => unreachable!("non-empty text holds {other:?}"),
        }
    }
}

impl AsRef<ValueObjectRef> for NonEmptyText {
    fn as_ref(&self) -> &ValueObjectRef {
        &self.0
    }
}

impl core::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
