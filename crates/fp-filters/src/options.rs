//! Filter options — the `key=value` configuration layer.
//!
//! The harness passes each filter a flat list of `key=value` arguments.
//! This module parses them into an [`Options`] bag with typed getters;
//! the filter constructors decide which keys they accept and with what
//! defaults.
//!
//! # Supported syntax
//!
//! | Syntax        | Effect                                  |
//! |---------------|-----------------------------------------|
//! | `key=value`   | Assign `value` to `key`                 |
//! | `key`         | Shorthand for `key=true` (boolean flag) |
//!
//! Later assignments win over earlier ones for the same key. Whether a
//! key is meaningful at all is checked by the filter being built, not
//! here — see [`Options::check_known`].

use crate::error::FilterError;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// A parsed bag of `key=value` configuration pairs.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pairs: Vec<(String, String)>,
}

impl Options {
    /// An empty option bag (every filter falls back to its defaults).
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse raw `key=value` arguments.
    ///
    /// A bare `key` with no `=` is treated as `key=true`, so boolean
    /// options can be enabled flag-style (`unpack` instead of
    /// `unpack=true`).
    #[must_use]
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let pairs = args
            .iter()
            .map(|arg| {
                let arg = arg.as_ref();
                arg.split_once('=').map_or_else(
                    || (arg.to_string(), "true".to_string()),
                    |(k, v)| (k.to_string(), v.to_string()),
                )
            })
            .collect();
        Self { pairs }
    }

    /// The raw value for `key`, if present (last assignment wins).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// A boolean option: `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`.
    ///
    /// # Errors
    ///
    /// [`FilterError::BadOption`] if the value is none of the above.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, FilterError> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        match raw {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(FilterError::BadOption {
                key: key.to_string(),
                value: raw.to_string(),
                expected: "true or false",
            }),
        }
    }

    /// An unsigned integer option.
    ///
    /// # Errors
    ///
    /// [`FilterError::BadOption`] if the value is not a decimal integer.
    pub fn get_usize(&self, key: &str) -> Result<Option<usize>, FilterError> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        raw.parse().map(Some).map_err(|_| FilterError::BadOption {
            key: key.to_string(),
            value: raw.to_string(),
            expected: "a non-negative integer",
        })
    }

    /// A `u32` option (compression levels and the like).
    ///
    /// # Errors
    ///
    /// [`FilterError::BadOption`] if the value is not a decimal integer.
    pub fn get_u32(&self, key: &str) -> Result<Option<u32>, FilterError> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        raw.parse().map(Some).map_err(|_| FilterError::BadOption {
            key: key.to_string(),
            value: raw.to_string(),
            expected: "a non-negative integer",
        })
    }

    /// Reject any key outside `known`.
    ///
    /// Called by each filter constructor with the keys it understands,
    /// so a typo like `spcaes=4` fails loudly instead of being ignored.
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownOption`] naming the filter and the key.
    pub fn check_known(&self, filter: &'static str, known: &[&str]) -> Result<(), FilterError> {
        for (key, _) in &self.pairs {
            if !known.contains(&key.as_str()) {
                return Err(FilterError::UnknownOption {
                    filter,
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // -- Parsing ------------------------------------------------------------

    #[test]
    fn empty_args() {
        let opts = Options::parse::<&str>(&[]);
        assert_eq!(opts.get("anything"), None);
    }

    #[test]
    fn key_value_pairs() {
        let opts = Options::parse(&["spaces=4", "sort_keys=true"]);
        assert_eq!(opts.get("spaces"), Some("4"));
        assert_eq!(opts.get("sort_keys"), Some("true"));
    }

    #[test]
    fn bare_key_is_true() {
        let opts = Options::parse(&["unpack"]);
        assert_eq!(opts.get("unpack"), Some("true"));
    }

    #[test]
    fn last_assignment_wins() {
        let opts = Options::parse(&["wrap=64", "wrap=0"]);
        assert_eq!(opts.get("wrap"), Some("0"));
    }

    #[test]
    fn value_may_contain_equals() {
        let opts = Options::parse(&["sep== "]);
        assert_eq!(opts.get("sep"), Some("= "));
    }

    // -- Typed getters ------------------------------------------------------

    #[test]
    fn bool_spellings() {
        let opts = Options::parse(&["a=true", "b=1", "c=yes", "d=on", "e=false", "f=0", "g=no", "h=off"]);
        for key in ["a", "b", "c", "d"] {
            assert_eq!(opts.get_bool(key).unwrap(), Some(true));
        }
        for key in ["e", "f", "g", "h"] {
            assert_eq!(opts.get_bool(key).unwrap(), Some(false));
        }
    }

    #[test]
    fn bool_missing_is_none() {
        let opts = Options::new();
        assert_eq!(opts.get_bool("unpack").unwrap(), None);
    }

    #[test]
    fn bool_garbage_is_error() {
        let opts = Options::parse(&["unpack=maybe"]);
        assert!(matches!(
            opts.get_bool("unpack"),
            Err(FilterError::BadOption { .. })
        ));
    }

    #[test]
    fn usize_parses() {
        let opts = Options::parse(&["wrap=76"]);
        assert_eq!(opts.get_usize("wrap").unwrap(), Some(76));
    }

    #[test]
    fn usize_garbage_is_error() {
        let opts = Options::parse(&["wrap=wide"]);
        assert!(matches!(
            opts.get_usize("wrap"),
            Err(FilterError::BadOption { .. })
        ));
    }

    #[test]
    fn u32_parses() {
        let opts = Options::parse(&["level=9"]);
        assert_eq!(opts.get_u32("level").unwrap(), Some(9));
    }

    // -- Known-key checking -------------------------------------------------

    #[test]
    fn known_keys_accepted() {
        let opts = Options::parse(&["spaces=2", "sort_keys"]);
        assert!(opts.check_known("json-pretty", &["spaces", "sort_keys"]).is_ok());
    }

    #[test]
    fn unknown_key_rejected() {
        let opts = Options::parse(&["spcaes=4"]);
        let err = opts.check_known("json-pretty", &["spaces", "sort_keys"]);
        assert!(matches!(err, Err(FilterError::UnknownOption { .. })));
    }
}
