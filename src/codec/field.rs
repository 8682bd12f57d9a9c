//! Column text ⇄ typed attribute.

use crate::errors::{AppError, AppResult};
use crate::models::FieldValue;

/// Decodes a mandatory column. Blank text is a validation error.
pub fn decode_required<T: FieldValue>(raw: &str) -> AppResult<T> {
    let t = raw.trim();
    if t.is_empty() {
        return Err(AppError::invalid(T::FIELD, raw, "this field is required"));
    }
    T::parse(t)
}

/// Decodes an optional column. Blank text means the value is absent.
pub fn decode_optional<T: FieldValue>(raw: &str) -> AppResult<Option<T>> {
    let t = raw.trim();
    if t.is_empty() {
        return Ok(None);
    }
    T::parse(t).map(Some)
}

pub fn encode_optional<T: FieldValue>(value: Option<&T>) -> String {
    value.map(FieldValue::encode).unwrap_or_default()
}
