//! # fp-filters — text-transformation filters for editor selections
//!
//! Each filter consumes the full text of a selection and produces
//! replacement text. Filters are pure: same input and configuration,
//! same output, no I/O beyond the strings passed in and out.
//!
//! - **[`fields`]** — auto-number unindexed fields in a schema-like block
//! - **[`json`]** — JSON pretty-printing with configurable indent
//! - **[`lines`]** — blank-line removal, line-to-list joining, word reversal
//! - **[`urls`]** — URL parse/unparse to and from a JSON object form
//! - **[`pack`]** — DEFLATE-family compression with base64 transport
//! - **[`options`]** — `key=value` configuration parsing
//! - **[`registry`]** — the explicit name → constructor table
//!
//! The host harness builds a filter from the [`registry`] with a set of
//! [`options::Options`], calls [`Filter::apply`], and substitutes the
//! result for the selection. On error nothing is substituted.

pub mod error;
pub mod fields;
pub mod json;
pub mod lines;
pub mod options;
pub mod pack;
pub mod registry;
pub mod urls;

pub use error::FilterError;

/// A configured text filter.
///
/// Implementations are plain config structs built by the [`registry`]
/// from parsed [`options::Options`]. `apply` takes the whole selection
/// and returns the whole replacement; there is no streaming and no
/// partial output.
pub trait Filter {
    /// Transform `text` into replacement text.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] when the input cannot be interpreted
    /// (bad JSON, bad URL, bad base64, ...). The caller must then leave
    /// the original text untouched.
    fn apply(&self, text: &str) -> Result<String, FilterError>;
}
