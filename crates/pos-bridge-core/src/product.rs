// Product identifier resolution.
//
// Product records arrive as JSON objects owned by the caller. An optional
// `goodIdentifications` array carries alternate identifiers encoded as
// "type/value"; a matching entry overrides the record's direct field.

use serde_json::Value;

/// Field holding the `"type/value"` identification entries.
pub const GOOD_IDENTIFICATIONS_FIELD: &str = "goodIdentifications";

/// Resolve the display identifier of `identifier_type` for a product record.
///
/// Returns `None` for an empty record (data not yet loaded) and for a record
/// with neither a direct field nor a matching identification entry. Only the
/// first matching entry counts; an entry `"type/"` resolves to an empty
/// string. The `"type/value"` convention is assumed, not validated.
pub fn product_identifier(identifier_type: &str, product: &Value) -> Option<String> {
    let record = product.as_object()?;
    if record.is_empty() {
        return None;
    }

    let mut value = record.get(identifier_type).and_then(field_as_string);

    let prefix = format!("{identifier_type}/");
    let identification = record
        .get(GOOD_IDENTIFICATIONS_FIELD)
        .and_then(Value::as_array)
        .and_then(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .find(|entry| entry.starts_with(&prefix))
        });

    if let Some(entry) = identification {
        value = entry.split('/').nth(1).map(str::to_string);
    }

    value
}

fn field_as_string(field: &Value) -> Option<String> {
    match field {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
