//! Validation utilities for AgroGraf inputs

use std::borrow::Cow;

use serde_json::Value;
use validator::ValidationError;

/// Reject strings that are empty once whitespace is trimmed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("Campo não pode ficar em branco"));
        return Err(error);
    }
    Ok(())
}

/// Telemetry payloads may be any JSON value except an empty one
/// (`null`, `false`, `0`, `""`, `[]`, `{}`)
pub fn validate_telemetry_payload(payload: &Value) -> Result<(), &'static str> {
    let empty = match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    };
    if empty {
        Err("Telemetry payload is empty")
    } else {
        Ok(())
    }
}

/// Uploads on the identification page must be images
pub fn validate_image_content_type(content_type: &str) -> Result<(), &'static str> {
    if content_type.starts_with("image/") {
        Ok(())
    } else {
        Err("Only image uploads are accepted")
    }
}
