//! Text matching utilities.
//!
//! The matcher works on slices of arbitrary hashable elements.  This module
//! provides the tokenizers to turn strings into such slices (the tokens are
//! sub slices of the input, so they can be mapped back to it) as well as the
//! common junk predicates for characters and lines.
//!
//! Text matching is available by default but can be disabled by turning off
//! the default features.  The feature to enable to get it back is `text`.
//! Grapheme based matching additionally needs the `unicode` feature.
//!
//! # Example
//!
//! ```rust
//! use gestalt::text::{is_line_junk, split_lines};
//! use gestalt::SequenceMatcher;
//!
//! let old = split_lines("fn main() {\n\n    run();\n}\n");
//! let new = split_lines("fn main() {\n    setup();\n\n    run();\n}\n");
//! let matcher = SequenceMatcher::with_junk(&old, &new, |line: &&str| is_line_junk(line));
//! assert_eq!(matcher.grouped_opcodes().len(), 1);
//! ```
#![cfg(feature = "text")]

use crate::close::{rank_close_matches, CloseMatchConfig};
use crate::{algorithms::JunkIndex, Error};

/// Splits a string into its characters.
pub fn split_chars(s: &str) -> Vec<&str> {
    s.char_indices()
        .map(|(idx, c)| &s[idx..idx + c.len_utf8()])
        .collect()
}

/// Splits a string into lines, keeping the line endings.
///
/// `\n`, `\r\n` and a lone `\r` end a line.
pub fn split_lines(s: &str) -> Vec<&str> {
    let mut rv = Vec::new();
    let mut last_pos = 0;
    let bytes = s.as_bytes();
    let mut iter = bytes.iter().enumerate().peekable();
    while let Some((idx, &b)) = iter.next() {
        let end = match b {
            b'\r' if iter.peek().map(|x| *x.1) == Some(b'\n') => {
                iter.next();
                idx + 2
            }
            b'\r' | b'\n' => idx + 1,
            _ => continue,
        };
        rv.push(&s[last_pos..end]);
        last_pos = end;
    }
    if last_pos < s.len() {
        rv.push(&s[last_pos..]);
    }
    rv
}

/// Splits a string into extended grapheme clusters.
///
/// This requires the `unicode` feature.
#[cfg(feature = "unicode")]
pub fn split_graphemes(s: &str) -> Vec<&str> {
    unicode_segmentation::UnicodeSegmentation::graphemes(s, true).collect()
}

/// Returns `true` for a single space or tab.
pub fn is_character_junk(c: &str) -> bool {
    c == " " || c == "\t"
}

/// Returns `true` for blank lines and lines holding only a single `#`.
///
/// Surrounding whitespace (including the line ending) is ignored.
pub fn is_line_junk(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line == "#"
}

/// Use the character matcher to find `n` close matches.
///
/// `cutoff` defines the threshold which needs to be reached for a word
/// to be considered similar.  See
/// [`SequenceMatcher::ratio`](crate::SequenceMatcher::ratio) for more
/// information.  Fails if `n` is zero or `cutoff` is not within `0..=1`.
///
/// ```
/// # use gestalt::text::get_close_matches;
/// let matches = get_close_matches(
///     "appel",
///     &["ape", "apple", "peach", "puppy"][..],
///     3,
///     0.6
/// ).unwrap();
/// assert_eq!(matches, vec!["apple", "ape"]);
/// ```
pub fn get_close_matches<'a>(
    word: &str,
    possibilities: &[&'a str],
    n: usize,
    cutoff: f32,
) -> Result<Vec<&'a str>, Error> {
    close_matches_by(word, possibilities, n, cutoff, split_chars)
}

/// Like [`get_close_matches`] but compares grapheme clusters.
///
/// This requires the `unicode` feature.
#[cfg(feature = "unicode")]
pub fn get_close_matches_graphemes<'a>(
    word: &str,
    possibilities: &[&'a str],
    n: usize,
    cutoff: f32,
) -> Result<Vec<&'a str>, Error> {
    close_matches_by(word, possibilities, n, cutoff, split_graphemes)
}

fn close_matches_by<'a>(
    word: &str,
    possibilities: &[&'a str],
    n: usize,
    cutoff: f32,
    split: fn(&str) -> Vec<&str>,
) -> Result<Vec<&'a str>, Error> {
    let mut config = CloseMatchConfig::default();
    config.max_matches(n).cutoff(cutoff);
    config.validate()?;

    let word = split(word);
    let seqs = possibilities.iter().map(|x| split(x)).collect::<Vec<_>>();
    let index = JunkIndex::new(&word, true);
    Ok(rank_close_matches(&word, &seqs, &config, &index)
        .into_iter()
        .map(|idx| possibilities[idx])
        .collect())
}

#[test]
fn test_split_chars() {
    assert_eq!(split_chars("añb"), vec!["a", "ñ", "b"]);
    assert_eq!(split_chars(""), Vec::<&str>::new());
}

#[test]
fn test_split_lines() {
    assert_eq!(
        split_lines("a\nb\r\nc\rd"),
        vec!["a\n", "b\r\n", "c\r", "d"]
    );
    assert_eq!(split_lines("a\n\n"), vec!["a\n", "\n"]);
    assert_eq!(split_lines(""), Vec::<&str>::new());
}

#[cfg(feature = "unicode")]
#[test]
fn test_split_graphemes() {
    assert_eq!(split_graphemes("e\u{301}x"), vec!["e\u{301}", "x"]);
}

#[test]
fn test_junk_predicates() {
    assert!(is_character_junk(" "));
    assert!(is_character_junk("\t"));
    assert!(!is_character_junk("\n"));
    assert!(!is_character_junk("x"));

    assert!(is_line_junk("\n"));
    assert!(is_line_junk("  #   \n"));
    assert!(!is_line_junk("hello\n"));
    assert!(!is_line_junk("## comment\n"));
}

#[test]
fn test_get_close_matches() {
    let matches = get_close_matches("appel", &["ape", "apple", "peach", "puppy"][..], 3, 0.6);
    assert_eq!(matches, Ok(vec!["apple", "ape"]));
    let matches = get_close_matches(
        "hulo",
        &[
            "hi", "hulu", "hali", "hoho", "amaz", "zulo", "blah", "hopp", "uulo", "aulo",
        ][..],
        5,
        0.7,
    );
    assert_eq!(matches, Ok(vec!["hulu", "zulo", "uulo", "aulo"]));
}

#[test]
fn test_get_close_matches_invalid() {
    assert_eq!(
        get_close_matches("appel", &["ape"][..], 0, 0.6),
        Err(Error::InvalidMaxMatches)
    );
    assert_eq!(
        get_close_matches("appel", &["ape"][..], 3, 1.5),
        Err(Error::InvalidCutoff(1.5))
    );
}

#[test]
fn test_line_matching() {
    use crate::{DiffTag, SequenceMatcher};

    let old = split_lines("one\ntwo\nthree\nfour\n");
    let new = split_lines("one\ntwo\n3\nfour\nfive\n");
    let ops = SequenceMatcher::new(&old, &new)
        .get_opcodes()
        .iter()
        .map(|op| op.as_opcode())
        .collect::<Vec<_>>();
    assert_eq!(
        ops,
        vec![
            (DiffTag::Equal, 0, 2, 0, 2),
            (DiffTag::Replace, 2, 3, 2, 3),
            (DiffTag::Equal, 3, 4, 3, 4),
            (DiffTag::Insert, 4, 4, 4, 5),
        ]
    );
}
