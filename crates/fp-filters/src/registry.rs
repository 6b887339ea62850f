//! Filter registry — the explicit name → constructor table.
//!
//! The harness looks filters up by name and hands each constructor the
//! parsed options. The table is built once at startup and passed by
//! reference; nothing registers itself through ambient global state.
//!
//! # Built-in filters
//!
//! | Name                 | Transformation                                |
//! |----------------------|-----------------------------------------------|
//! | `number-fields`      | Assign IDs to unindexed schema fields         |
//! | `json-pretty`        | JSON pretty-printing                          |
//! | `delete-blank-lines` | Drop whitespace-only lines                    |
//! | `lines-to-list`      | Join lines into `[a,b,c]`                     |
//! | `reverse-words`      | Reverse word order per line                   |
//! | `url-parse`          | URL → JSON object form                        |
//! | `url-unparse`        | JSON object form → URL                        |
//! | `pack`               | Compress + base64 (or inverse with `unpack`)  |
//! | `base64`             | Plain base64 encode/decode                    |

use crate::error::FilterError;
use crate::fields::NumberFields;
use crate::json::JsonPretty;
use crate::lines::{DeleteBlankLines, LinesToList, ReverseWords};
use crate::options::Options;
use crate::pack::{Base64Text, Pack};
use crate::urls::{UrlParse, UrlUnparse};
use crate::Filter;

/// Builds one configured filter from parsed options.
type Constructor = fn(&Options) -> Result<Box<dyn Filter>, FilterError>;

/// The name → constructor table.
pub struct Registry {
    entries: Vec<(&'static str, Constructor)>,
}

impl Registry {
    /// The table of all built-in filters.
    #[must_use]
    pub fn with_builtins() -> Self {
        let entries: Vec<(&'static str, Constructor)> = vec![
            ("number-fields", |o| {
                NumberFields::from_options(o).map(|f| Box::new(f) as Box<dyn Filter>)
            }),
            ("json-pretty", |o| {
                JsonPretty::from_options(o).map(|f| Box::new(f) as Box<dyn Filter>)
            }),
            ("delete-blank-lines", |o| {
                DeleteBlankLines::from_options(o).map(|f| Box::new(f) as Box<dyn Filter>)
            }),
            ("lines-to-list", |o| {
                LinesToList::from_options(o).map(|f| Box::new(f) as Box<dyn Filter>)
            }),
            ("reverse-words", |o| {
                ReverseWords::from_options(o).map(|f| Box::new(f) as Box<dyn Filter>)
            }),
            ("url-parse", |o| {
                UrlParse::from_options(o).map(|f| Box::new(f) as Box<dyn Filter>)
            }),
            ("url-unparse", |o| {
                UrlUnparse::from_options(o).map(|f| Box::new(f) as Box<dyn Filter>)
            }),
            ("pack", |o| {
                Pack::from_options(o).map(|f| Box::new(f) as Box<dyn Filter>)
            }),
            ("base64", |o| {
                Base64Text::from_options(o).map(|f| Box::new(f) as Box<dyn Filter>)
            }),
        ];
        Self { entries }
    }

    /// All registered filter names, in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Build the filter registered under `name` with `opts`.
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownFilter`] when no such name is registered, or
    /// whatever the filter's constructor reports for bad options.
    pub fn build(&self, name: &str, opts: &Options) -> Result<Box<dyn Filter>, FilterError> {
        let Some((_, construct)) = self.entries.iter().find(|(n, _)| *n == name) else {
            return Err(FilterError::UnknownFilter(name.to_string()));
        };
        construct(opts)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn all_builtins_resolve() {
        let registry = Registry::with_builtins();
        for name in [
            "number-fields",
            "json-pretty",
            "delete-blank-lines",
            "lines-to-list",
            "reverse-words",
            "url-parse",
            "url-unparse",
            "pack",
            "base64",
        ] {
            assert!(
                registry.build(name, &Options::new()).is_ok(),
                "{name} failed to build"
            );
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = Registry::with_builtins();
        assert!(matches!(
            registry.build("frobnicate", &Options::new()),
            Err(FilterError::UnknownFilter(_))
        ));
    }

    #[test]
    fn names_lists_everything_in_order() {
        let registry = Registry::with_builtins();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names.first(), Some(&"number-fields"));
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn built_filter_applies() {
        let registry = Registry::with_builtins();
        let filter = registry
            .build("number-fields", &Options::new())
            .unwrap();
        assert_eq!(
            filter.apply("optional string foo;").unwrap(),
            "optional string foo = 1;"
        );
    }

    #[test]
    fn options_reach_the_constructor() {
        let registry = Registry::with_builtins();
        let filter = registry
            .build("json-pretty", &Options::parse(&["spaces=4"]))
            .unwrap();
        assert_eq!(filter.apply("[1]").unwrap(), "[\n    1\n]");
    }

    #[test]
    fn constructor_errors_propagate() {
        let registry = Registry::with_builtins();
        assert!(matches!(
            registry.build("pack", &Options::parse(&["flavor=lzma"])),
            Err(FilterError::BadOption { .. })
        ));
    }
}
