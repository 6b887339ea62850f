//! Line-shaped filters — small transformations over the selection's lines.
//!
//! Three filters live here, none of which take options:
//!
//! - [`DeleteBlankLines`] — drop lines with no non-whitespace content
//! - [`LinesToList`] — join the lines with commas inside `[...]`
//! - [`ReverseWords`] — reverse the word order on each line
//!
//! All of them split with [`str::lines`] and rejoin with single `\n`
//! separators, so a trailing newline in the input is not reproduced.

use crate::error::FilterError;
use crate::options::Options;
use crate::Filter;

// ---------------------------------------------------------------------------
// DeleteBlankLines
// ---------------------------------------------------------------------------

/// Remove every line that contains only whitespace (or nothing).
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteBlankLines;

impl DeleteBlankLines {
    /// Build from parsed options (none are accepted).
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownOption`] for any option at all.
    pub fn from_options(opts: &Options) -> Result<Self, FilterError> {
        opts.check_known("delete-blank-lines", &[])?;
        Ok(Self)
    }
}

impl Filter for DeleteBlankLines {
    fn apply(&self, text: &str) -> Result<String, FilterError> {
        let kept: Vec<&str> = text
            .lines()
            .filter(|line| line.chars().any(|ch| !ch.is_whitespace()))
            .collect();
        Ok(kept.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// LinesToList
// ---------------------------------------------------------------------------

/// Join the selection's lines into a bracketed, comma-separated list.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinesToList;

impl LinesToList {
    /// Build from parsed options (none are accepted).
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownOption`] for any option at all.
    pub fn from_options(opts: &Options) -> Result<Self, FilterError> {
        opts.check_known("lines-to-list", &[])?;
        Ok(Self)
    }
}

impl Filter for LinesToList {
    fn apply(&self, text: &str) -> Result<String, FilterError> {
        let items: Vec<&str> = text.lines().collect();
        Ok(format!("[{}]", items.join(",")))
    }
}

// ---------------------------------------------------------------------------
// ReverseWords
// ---------------------------------------------------------------------------

/// Reverse the order of whitespace-separated words on each line.
///
/// Word runs are rejoined with single spaces; the original amount of
/// inter-word whitespace is not preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseWords;

impl ReverseWords {
    /// Build from parsed options (none are accepted).
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownOption`] for any option at all.
    pub fn from_options(opts: &Options) -> Result<Self, FilterError> {
        opts.check_known("reverse-words", &[])?;
        Ok(Self)
    }
}

impl Filter for ReverseWords {
    fn apply(&self, text: &str) -> Result<String, FilterError> {
        let reversed: Vec<String> = text
            .lines()
            .map(|line| {
                let mut words: Vec<&str> = line.split_whitespace().collect();
                words.reverse();
                words.join(" ")
            })
            .collect();
        Ok(reversed.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // -- DeleteBlankLines ---------------------------------------------------

    #[test]
    fn drops_empty_and_whitespace_lines() {
        let input = "first\n\n  \t\nsecond\n\nthird";
        assert_eq!(
            DeleteBlankLines.apply(input).unwrap(),
            "first\nsecond\nthird"
        );
    }

    #[test]
    fn keeps_indented_content() {
        assert_eq!(
            DeleteBlankLines.apply("  indented\n\nplain").unwrap(),
            "  indented\nplain"
        );
    }

    #[test]
    fn all_blank_collapses_to_empty() {
        assert_eq!(DeleteBlankLines.apply("\n\n  \n").unwrap(), "");
    }

    // -- LinesToList --------------------------------------------------------

    #[test]
    fn joins_lines_with_commas() {
        assert_eq!(LinesToList.apply("1\n2\n3").unwrap(), "[1,2,3]");
    }

    #[test]
    fn single_line_is_wrapped() {
        assert_eq!(LinesToList.apply("only").unwrap(), "[only]");
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert_eq!(LinesToList.apply("").unwrap(), "[]");
    }

    #[test]
    fn trailing_newline_does_not_add_item() {
        assert_eq!(LinesToList.apply("a\nb\n").unwrap(), "[a,b]");
    }

    // -- ReverseWords -------------------------------------------------------

    #[test]
    fn reverses_words_per_line() {
        assert_eq!(
            ReverseWords.apply("one two three\nfour five").unwrap(),
            "three two one\nfive four"
        );
    }

    #[test]
    fn single_word_unchanged() {
        assert_eq!(ReverseWords.apply("word").unwrap(), "word");
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        assert_eq!(ReverseWords.apply("a   b\tc").unwrap(), "c b a");
    }

    // -- Option handling ----------------------------------------------------

    #[test]
    fn none_of_them_take_options() {
        let opts = Options::parse(&["sep=;"]);
        assert!(DeleteBlankLines::from_options(&opts).is_err());
        assert!(LinesToList::from_options(&opts).is_err());
        assert!(ReverseWords::from_options(&opts).is_err());
    }
}
