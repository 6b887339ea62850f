//! JSON pretty-printing.
//!
//! Decodes the selection as JSON and re-encodes it with a configurable
//! indent. Key order is preserved as written unless `sort_keys` asks for
//! recursive sorting.
//!
//! # Options
//!
//! | Key         | Type | Default | Effect                          |
//! |-------------|------|---------|---------------------------------|
//! | `spaces`    | int  | 2       | Indent width per nesting level  |
//! | `sort_keys` | bool | false   | Sort object keys recursively    |

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::error::FilterError;
use crate::options::Options;
use crate::Filter;

/// The JSON pretty-print filter.
#[derive(Debug, Clone)]
pub struct JsonPretty {
    spaces: usize,
    sort_keys: bool,
}

impl Default for JsonPretty {
    fn default() -> Self {
        Self {
            spaces: 2,
            sort_keys: false,
        }
    }
}

impl JsonPretty {
    /// Build from parsed options.
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownOption`] or [`FilterError::BadOption`] for
    /// unrecognized keys or unparseable values.
    pub fn from_options(opts: &Options) -> Result<Self, FilterError> {
        opts.check_known("json-pretty", &["spaces", "sort_keys"])?;
        let defaults = Self::default();
        Ok(Self {
            spaces: opts.get_usize("spaces")?.unwrap_or(defaults.spaces),
            sort_keys: opts.get_bool("sort_keys")?.unwrap_or(defaults.sort_keys),
        })
    }
}

impl Filter for JsonPretty {
    fn apply(&self, text: &str) -> Result<String, FilterError> {
        let mut value: Value = serde_json::from_str(text)?;
        if self.sort_keys {
            sort_keys(&mut value);
        }
        let indent = " ".repeat(self.spaces);
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = Serializer::with_formatter(&mut out, formatter);
        value.serialize(&mut ser)?;
        Ok(String::from_utf8(out)?)
    }
}

/// Recursively sort every object's keys, descending into arrays.
fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.sort_keys();
            for v in map.values_mut() {
                sort_keys(v);
            }
        }
        Value::Array(items) => {
            for v in items {
                sort_keys(v);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pretty(text: &str) -> String {
        JsonPretty::default().apply(text).unwrap()
    }

    #[test]
    fn reindents_compact_object() {
        assert_eq!(
            pretty(r#"{"a":1,"b":[2,3]}"#),
            "{\n  \"a\": 1,\n  \"b\": [\n    2,\n    3\n  ]\n}"
        );
    }

    #[test]
    fn preserves_key_order_by_default() {
        assert_eq!(
            pretty(r#"{"b":1,"a":2}"#),
            "{\n  \"b\": 1,\n  \"a\": 2\n}"
        );
    }

    #[test]
    fn sort_keys_sorts_recursively() {
        let f = JsonPretty::from_options(&Options::parse(&["sort_keys"])).unwrap();
        assert_eq!(
            f.apply(r#"{"b":{"d":1,"c":2},"a":3}"#).unwrap(),
            "{\n  \"a\": 3,\n  \"b\": {\n    \"c\": 2,\n    \"d\": 1\n  }\n}"
        );
    }

    #[test]
    fn custom_indent_width() {
        let f = JsonPretty::from_options(&Options::parse(&["spaces=4"])).unwrap();
        assert_eq!(f.apply(r#"{"a":1}"#).unwrap(), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn zero_spaces_means_no_indent() {
        let f = JsonPretty::from_options(&Options::parse(&["spaces=0"])).unwrap();
        assert_eq!(f.apply(r#"{"a":1}"#).unwrap(), "{\n\"a\": 1\n}");
    }

    #[test]
    fn scalars_round_trip() {
        assert_eq!(pretty("42"), "42");
        assert_eq!(pretty("\"hi\""), "\"hi\"");
        assert_eq!(pretty("null"), "null");
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = JsonPretty::default().apply("{nope");
        assert!(matches!(err, Err(FilterError::Json(_))));
    }

    #[test]
    fn unknown_option_rejected() {
        let opts = Options::parse(&["indent=2"]);
        assert!(matches!(
            JsonPretty::from_options(&opts),
            Err(FilterError::UnknownOption { .. })
        ));
    }
}
