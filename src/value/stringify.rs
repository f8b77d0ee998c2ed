// ABOUTME: Value stringification policy for the renderer
// ABOUTME: Converts any resolved value to text without ever failing

use super::Value;

/// Fallback strings used when a value has no clean textual form.
#[derive(Debug, Clone)]
pub struct StringifyOptions {
    /// Output for value kinds with no textual representation at all.
    pub invalid_type: String,
    /// Output when JSON serialization of a structured value fails.
    pub invalid_obj: String,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            invalid_type: String::new(),
            invalid_obj: "{...}".to_string(),
        }
    }
}

/// Convert a resolved value to its textual form.
///
/// Every kind terminates in a string: missing values and nulls become empty
/// strings, structured values that fail to serialize fall back to
/// `invalid_obj`, and unsupported kinds fall back to `invalid_type`. A single
/// malformed value can therefore never abort rendering of an otherwise valid
/// template.
pub fn stringify(value: &Value, options: &StringifyOptions) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if *n == f64::INFINITY {
                "∞".to_string()
            } else if *n == f64::NEG_INFINITY {
                "-∞".to_string()
            } else {
                // NaN formats as "NaN", finite doubles as plain decimal text
                n.to_string()
            }
        }
        Value::Null | Value::Absent => String::new(),
        Value::Display(d) => d.to_string(),
        Value::Structured(s) => s
            .json_text()
            .unwrap_or_else(|_| options.invalid_obj.clone()),
        Value::Unsupported => options.invalid_type.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde::{Serialize, Serializer};
    use serde_json::json;

    fn s(value: &Value) -> String {
        stringify(value, &StringifyOptions::default())
    }

    #[test]
    fn test_text_passes_through() {
        assert_eq!(s(&Value::Text("hello".into())), "hello");
        assert_eq!(s(&Value::Text(String::new())), "");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(s(&Value::Bool(true)), "true");
        assert_eq!(s(&Value::Bool(false)), "false");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(s(&Value::Number(2.0)), "2");
        assert_eq!(s(&Value::Number(1.5)), "1.5");
        assert_eq!(s(&Value::Number(-0.25)), "-0.25");
        assert_eq!(s(&Value::Number(f64::NAN)), "NaN");
        assert_eq!(s(&Value::Number(f64::INFINITY)), "∞");
        assert_eq!(s(&Value::Number(f64::NEG_INFINITY)), "-∞");
    }

    #[test]
    fn test_null_and_absent_are_empty() {
        assert_eq!(s(&Value::Null), "");
        assert_eq!(s(&Value::Absent), "");
    }

    #[test]
    fn test_display_uses_custom_conversion() {
        struct Custom;
        impl std::fmt::Display for Custom {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "X")
            }
        }
        assert_eq!(s(&Value::display(Custom)), "X");
    }

    #[test]
    fn test_structured_serializes_as_json() {
        assert_eq!(s(&Value::structured(json!({"a": 1}))), r#"{"a":1}"#);
        assert_eq!(s(&Value::structured(json!([1, "x"]))), r#"[1,"x"]"#);
    }

    #[test]
    fn test_failing_serialization_falls_back() {
        // Stands in for values JSON cannot represent, like circular data
        struct Unserializable;
        impl Serialize for Unserializable {
            fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(S::Error::custom("cycle"))
            }
        }

        assert_eq!(s(&Value::structured(Unserializable)), "{...}");

        let options = StringifyOptions {
            invalid_obj: "<obj>".to_string(),
            ..Default::default()
        };
        assert_eq!(
            stringify(&Value::structured(Unserializable), &options),
            "<obj>"
        );
    }

    #[test]
    fn test_unsupported_falls_back() {
        assert_eq!(s(&Value::Unsupported), "");

        let options = StringifyOptions {
            invalid_type: "<?>".to_string(),
            ..Default::default()
        };
        assert_eq!(stringify(&Value::Unsupported, &options), "<?>");
    }
}
