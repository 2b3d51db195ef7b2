//! Shared serialization contract for every attachment element.

use crate::errors::FormationError;
use serde::Serialize;
use serde_json::{Map, Value};

/// JSON object produced by an element, ready to embed in an attachment payload.
pub type JsonMap = Map<String, Value>;

/// An element that can render itself into a wire-ready JSON object.
pub trait JsonObject {
    fn to_json(&self) -> Result<JsonMap, FormationError>;
}

/// Serializes `value` and keeps only the listed attributes that are not null.
///
/// Enum-valued fields come out as their plain string form, so callers never see
/// wrapper shapes in the result.
pub fn non_null_keys<T>(value: &T, attributes: &[&str]) -> Result<JsonMap, FormationError>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value)? {
        Value::Object(mut fields) => {
            fields.retain(|key, field| !field.is_null() && attributes.contains(&key.as_str()));
            Ok(fields)
        }
        other => Err(FormationError::Serialize(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        keep: &'static str,
        empty: Option<String>,
        hidden: u32,
    }

    #[test]
    fn drops_nulls_and_undeclared_attributes() {
        let sample = Sample {
            keep: "yes",
            empty: None,
            hidden: 7,
        };
        let json = non_null_keys(&sample, &["keep", "empty"]).expect("object");
        assert_eq!(Value::Object(json), json!({ "keep": "yes" }));
    }

    #[test]
    fn rejects_non_object_values() {
        let err = non_null_keys(&"plain", &["keep"]).unwrap_err();
        assert!(matches!(err, FormationError::Serialize(_)));
    }
}
