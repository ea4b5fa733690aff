//! Request body parsing ahead of feature validation.

use serde_json::{Map, Value};

/// Why a request body carried no usable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDataReason {
    EmptyBody,
    Malformed,
    /// `null`, `false`, `0`, `""`, `[]`, or `{}`.
    Falsy,
    NotAnObject,
    /// The body could not be read off the connection.
    Unreadable,
}

impl NoDataReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyBody => "empty_body",
            Self::Malformed => "malformed_json",
            Self::Falsy => "falsy_value",
            Self::NotAnObject => "not_an_object",
            Self::Unreadable => "unreadable_body",
        }
    }
}

/// Parse a body into a non-empty JSON object.
///
/// The content type is not checked. A number outside the `f64` range fails
/// JSON parsing, so it is reported as malformed rather than against its field.
pub fn parse_record(body: &[u8]) -> Result<Map<String, Value>, NoDataReason> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(NoDataReason::EmptyBody);
    }
    let value: Value = serde_json::from_slice(body).map_err(|_| NoDataReason::Malformed)?;
    if is_falsy(&value) {
        return Err(NoDataReason::Falsy);
    }
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(NoDataReason::NotAnObject),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_bodies() {
        assert_eq!(parse_record(b""), Err(NoDataReason::EmptyBody));
        assert_eq!(parse_record(b"  \n"), Err(NoDataReason::EmptyBody));
    }

    #[test]
    fn malformed_json() {
        assert_eq!(parse_record(b"{\"age\": "), Err(NoDataReason::Malformed));
        assert_eq!(parse_record(b"age=30"), Err(NoDataReason::Malformed));
    }

    #[test]
    fn out_of_range_number_is_malformed() {
        assert_eq!(
            parse_record(br#"{"age": 1e400, "bmi": 25.0}"#),
            Err(NoDataReason::Malformed)
        );
    }

    #[test]
    fn falsy_values() {
        for body in ["null", "false", "0", "0.0", "\"\"", "[]", "{}"] {
            assert_eq!(
                parse_record(body.as_bytes()),
                Err(NoDataReason::Falsy),
                "{body}"
            );
        }
    }

    #[test]
    fn truthy_non_objects() {
        for body in ["[1]", "\"age\"", "7", "true"] {
            assert_eq!(
                parse_record(body.as_bytes()),
                Err(NoDataReason::NotAnObject),
                "{body}"
            );
        }
    }

    #[test]
    fn object_passes_through() {
        let map = parse_record(br#"{"age": 30}"#).unwrap();
        assert_eq!(map.get("age"), Some(&Value::from(30)));
    }
}
