use serde::Serialize;

use crate::cli::AppError;

/// Pretty JSON for anything the CLI prints.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbnames::ExtractedValue;

    #[test]
    fn names_serialize_as_array() {
        let json = to_json(&["sub-001", "sub-002"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!(["sub-001", "sub-002"]));
    }

    #[test]
    fn extracted_values_are_untagged() {
        let values = vec![
            ExtractedValue::Int(7),
            ExtractedValue::Text("abc".to_string()),
        ];
        let value: serde_json::Value = serde_json::from_str(&to_json(&values).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!([7, "abc"]));
    }
}
