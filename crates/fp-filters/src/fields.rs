//! Field numbering — assign IDs to unindexed fields in a schema block.
//!
//! Operates on line-oriented field declarations of the shape found in
//! protocol-buffer message bodies:
//!
//! ```text
//! optional string foo = 2;
//! optional string bar;
//! ```
//!
//! Fields that already carry `= <id>` keep it; fields without one are
//! assigned the smallest positive integers not yet taken, in top-to-bottom
//! order. Everything that is not a field declaration — blank lines,
//! `message Foo {`, closing braces, comments — passes through verbatim,
//! as does every byte of a rewritten line outside the inserted ` = <id>`.
//!
//! # Example
//!
//! ```text
//! optional string foo = 2;        optional string foo = 2;
//! optional string bar;       →    optional string bar = 3;
//! optional string baz = 1;        optional string baz = 1;
//! optional string qux;            optional string qux = 4;
//! ```
//!
//! # Algorithm
//!
//! Two passes. Pass 1 collects every explicit ID into a set. Pass 2 walks
//! the lines again with an [`IdGenerator`] seeded from that set and
//! rewrites only the unnumbered declarations, splicing ` = <id>` in front
//! of the terminating `;`. Duplicate explicit IDs are not an error: each
//! occurrence stays as written, and the value is simply never handed out
//! again.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::FilterError;
use crate::options::Options;
use crate::Filter;

// ---------------------------------------------------------------------------
// Declaration matching
// ---------------------------------------------------------------------------

/// Anchored field-declaration pattern: three word-character tokens
/// (modifier, type, name), an optional `= <digits>` suffix, and the `;`
/// terminator. Capture 2 is the digits, capture 3 the terminator.
static DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\w+\s+\w+\s+\w+(\s*=\s*(\d+))?\s*(;)").unwrap()
});

/// The outcome of matching one line against the declaration pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decl {
    /// A declaration that already carries an explicit ID.
    Numbered(u64),

    /// A declaration without an ID; `terminator` is the byte offset of
    /// the `;` within the line, the insertion point for ` = <id>`.
    Unnumbered {
        /// Byte offset of the terminating `;`.
        terminator: usize,
    },
}

/// Match a single line against the field-declaration pattern.
///
/// Returns `None` for anything that is not a declaration. An explicit ID
/// too large for `u64` is treated as absent and the field falls back to
/// auto-assignment; the matcher never fails.
#[must_use]
pub fn match_decl(line: &str) -> Option<Decl> {
    let caps = DECL.captures(line)?;
    if let Some(digits) = caps.get(2) {
        if let Ok(id) = digits.as_str().parse::<u64>() {
            return Some(Decl::Numbered(id));
        }
    }
    let terminator = caps.get(3)?.start();
    Some(Decl::Unnumbered { terminator })
}

// ---------------------------------------------------------------------------
// IdGenerator
// ---------------------------------------------------------------------------

/// An infinite ascending sequence of positive integers, skipping a fixed
/// set of already-taken values.
///
/// One generator is constructed per rewrite pass and consumed left to
/// right; each value it hands out is yielded exactly once. Restarting
/// means constructing a fresh instance.
#[derive(Debug)]
pub struct IdGenerator {
    taken: HashSet<u64>,
    next: u64,
}

impl IdGenerator {
    /// A generator that starts at 1 and never yields a member of `taken`.
    #[must_use]
    pub fn new(taken: HashSet<u64>) -> Self {
        Self { taken, next: 1 }
    }

    /// The smallest positive integer not taken and not yet drawn.
    pub fn draw(&mut self) -> u64 {
        while self.taken.contains(&self.next) {
            self.next += 1;
        }
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Iterator for IdGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.draw())
    }
}

// ---------------------------------------------------------------------------
// Numbering
// ---------------------------------------------------------------------------

/// Assign IDs to every unnumbered field declaration in `text`.
///
/// Lines are rejoined with single `\n` separators; a trailing newline in
/// the input is not reproduced. This function cannot fail — lines that
/// only partially resemble a declaration pass through unchanged.
#[must_use]
pub fn number_fields(text: &str) -> String {
    // Pass 1: collect explicit IDs.
    let taken: HashSet<u64> = text
        .lines()
        .filter_map(|line| match match_decl(line) {
            Some(Decl::Numbered(id)) => Some(id),
            _ => None,
        })
        .collect();

    // Pass 2: rewrite unnumbered declarations.
    let mut ids = IdGenerator::new(taken);
    let out: Vec<String> = text
        .lines()
        .map(|line| match match_decl(line) {
            Some(Decl::Unnumbered { terminator }) => {
                let (before, after) = line.split_at(terminator);
                format!("{before} = {id}{after}", id = ids.draw())
            }
            _ => line.to_string(),
        })
        .collect();
    out.join("\n")
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// The field-numbering filter. Takes no options.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFields;

impl NumberFields {
    /// Build from parsed options (none are accepted).
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownOption`] for any option at all.
    pub fn from_options(opts: &Options) -> Result<Self, FilterError> {
        opts.check_known("number-fields", &[])?;
        Ok(Self)
    }
}

impl Filter for NumberFields {
    fn apply(&self, text: &str) -> Result<String, FilterError> {
        Ok(number_fields(text))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
