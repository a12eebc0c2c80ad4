//! Scalar acceptability check for raw input.

use crate::error::{ValueObjectError, ValueObjectResult};
use crate::scalar::ScalarValue;

/// Arbitrary caller-supplied input.
pub type RawValue = serde_json::Value;

/// Accept a raw value if it is a scalar, rejecting sequences and structured values.
///
/// Numbers that fit `i64` become `Int`; other numbers become `Float`, except
/// unsigned integers too large for `i64`, which are rejected rather than
/// silently losing precision.
pub fn validate(raw: &RawValue) -> ValueObjectResult<ScalarValue> {
    match raw {
        RawValue::Null => Ok(ScalarValue::Null),
        RawValue::Bool(b) => Ok(ScalarValue::Bool(*b)),
        RawValue::String(s) => Ok(ScalarValue::Text(s.clone())),
        RawValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(ScalarValue::Int(i))
            } else if n.is_u64() {
                Err(ValueObjectError::invalid_value(format!(
                    "integer out of range: {n}"
                )))
            } else {
                n.as_f64()
                    .map(ScalarValue::Float)
                    .ok_or_else(|| ValueObjectError::invalid_value(format!("unrepresentable number: {n}")))
            }
        }
        RawValue::Array(_) => Err(ValueObjectError::invalid_value("sequence is not a scalar")),
        RawValue::Object(_) => Err(ValueObjectError::invalid_value(
            "structured value is not a scalar",
        )),
    }
}
