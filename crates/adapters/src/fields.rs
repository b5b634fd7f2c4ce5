//! Duration, details, and errors resolvers.

use msglog_domain::{Detail, MessageNumber, Scalar, errors_in_order, first_duration};
use msglog_ports::{DetailsResolver, DurationResolver, ErrorsResolver, RecordDetails, RecordErrors};
use serde_json::Value;

/// Text that should be embedded as structured JSON rather than quoted.
///
/// Only objects and arrays qualify; a quoted JSON string is unquoted first.
#[must_use]
pub fn embedded_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    let unquoted = if trimmed.starts_with('"') {
        serde_json::from_str::<String>(trimmed).ok()
    } else {
        None
    };
    let candidate = unquoted.as_deref().unwrap_or(trimmed);
    match serde_json::from_str::<Value>(candidate) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
        _ => None,
    }
}

fn json_or_string(text: &str) -> Value {
    embedded_json(text).unwrap_or_else(|| Value::String(text.to_string()))
}

/// First duration detail, in microseconds. Zero is treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrosDurationResolver;

impl DurationResolver for MicrosDurationResolver {
    fn resolve_duration(&self, _number: MessageNumber, details: &[Detail]) -> Option<i64> {
        let micros = first_duration(details)?.as_micros();
        match i64::try_from(micros) {
            Ok(0) => None,
            Ok(micros) => Some(micros),
            Err(_) => Some(i64::MAX),
        }
    }
}

/// Scalars keyed by 1-based position; string maps contribute their own keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyedDetailsResolver;

impl DetailsResolver for KeyedDetailsResolver {
    fn resolve_details(&self, _number: MessageNumber, details: &[Detail]) -> RecordDetails {
        let mut result = RecordDetails::new();
        for (index, detail) in details.iter().enumerate() {
            let ordinal = (index + 1).to_string();
            match detail {
                Detail::Nil => {
                    result.insert(ordinal, Value::String("<nil>".to_string()));
                },
                Detail::Scalar(scalar) => {
                    result.insert(ordinal, scalar_value(scalar));
                },
                Detail::Map(map) => {
                    for (key, value) in map {
                        result.insert(key.clone(), json_or_string(value));
                    }
                },
                Detail::Severity(_)
                | Detail::Error(_)
                | Detail::MessageNumber(_)
                | Detail::Duration(_) => {},
            }
        }
        result
    }
}

fn scalar_value(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Str(text) => Value::String(text.clone()),
        Scalar::Int(value) => Value::from(*value),
        Scalar::Uint(value) => Value::from(*value),
        Scalar::Float(value) => Value::from(*value),
        Scalar::Bool(value) => Value::String(value.to_string()),
        Scalar::Opaque(text) => json_or_string(text),
    }
}

/// Wrapped errors in supplied order, each as embedded JSON or `{"text": message}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonErrorsResolver;

impl ErrorsResolver for JsonErrorsResolver {
    fn resolve_errors(&self, _number: MessageNumber, details: &[Detail]) -> RecordErrors {
        errors_in_order(details)
            .map(|error| {
                let message = error.message();
                embedded_json(&message).unwrap_or_else(|| serde_json::json!({ "text": message }))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msglog_domain::{Severity, StringMap};
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn embedded_json_accepts_structures_only() {
        assert_eq!(embedded_json(r#"{"a":1}"#), Some(json!({"a": 1})));
        assert_eq!(embedded_json(r#""[1,2]""#), Some(json!([1, 2])));
        assert_eq!(embedded_json("42"), None);
        assert_eq!(embedded_json("hello"), None);
        assert_eq!(embedded_json(r#""quoted""#), None);
    }

    #[test]
    fn duration_is_first_in_micros() {
        let details = [
            Detail::from("x"),
            Detail::from(Duration::from_millis(3)),
            Detail::from(Duration::from_secs(1)),
        ];
        let resolver = MicrosDurationResolver;
        assert_eq!(resolver.resolve_duration(MessageNumber::new(1), &details), Some(3000));
        assert_eq!(
            resolver.resolve_duration(MessageNumber::new(1), &[Detail::from(Duration::ZERO)]),
            None
        );
        assert_eq!(resolver.resolve_duration(MessageNumber::new(1), &[]), None);
    }

    #[test]
    fn details_use_ordinals_and_map_keys() {
        let map = StringMap::from([
            ("name".to_string(), "Bob".to_string()),
            ("payload".to_string(), r#"{"k":[1]}"#.to_string()),
        ]);
        let details = vec![
            Detail::from("first"),
            Detail::from(Severity::Warn),
            Detail::Nil,
            Detail::from(7),
            Detail::from(true),
            Detail::from(map),
            Detail::error_msg("boom"),
            Detail::from(1.5),
            Detail::opaque(r#"[{"x":1}]"#),
        ];

        let resolved = KeyedDetailsResolver.resolve_details(MessageNumber::new(1), &details);
        let expected = json!({
            "1": "first",
            "3": "<nil>",
            "4": 7,
            "5": "true",
            "name": "Bob",
            "payload": {"k": [1]},
            "8": 1.5,
            "9": [{"x": 1}],
        });
        assert_eq!(serde_json::to_value(&resolved).ok(), Some(expected));
    }

    #[test]
    fn errors_keep_supplied_order() {
        let details = [
            Detail::error_msg("0019E|first"),
            Detail::from("not an error"),
            Detail::error_msg(r#"{"inner":"json"}"#),
        ];
        let errors = JsonErrorsResolver.resolve_errors(MessageNumber::new(1), &details);
        assert_eq!(
            errors,
            vec![json!({"text": "0019E|first"}), json!({"inner": "json"})]
        );
    }
}
