use std::hash::Hash;

use crate::algorithms::{get_matching_blocks, JunkIndex};
use crate::common::get_diff_ratio;
use crate::matcher::parse_option;
use crate::utils::{upper_seq_ratio, ElementCounts};
use crate::Error;

/// Configuration for [`get_close_matches`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct CloseMatchConfig {
    #[cfg_attr(feature = "serde", serde(rename = "n"))]
    max_matches: usize,
    cutoff: f32,
    auto_junk: bool,
}

impl Default for CloseMatchConfig {
    fn default() -> CloseMatchConfig {
        CloseMatchConfig {
            max_matches: 3,
            cutoff: 0.6,
            auto_junk: true,
        }
    }
}

impl CloseMatchConfig {
    /// Changes the maximum number of returned matches.
    ///
    /// The default is `3`.  Zero is rejected by [`validate`](Self::validate).
    pub fn max_matches(&mut self, n: usize) -> &mut Self {
        self.max_matches = n;
        self
    }

    /// Changes the ratio a candidate needs to reach to be returned.
    ///
    /// The default is `0.6`.  Values outside of `0..=1` are rejected by
    /// [`validate`](Self::validate).
    pub fn cutoff(&mut self, cutoff: f32) -> &mut Self {
        self.cutoff = cutoff;
        self
    }

    /// Enables or disables the popular element heuristic for the target.
    pub fn auto_junk(&mut self, yes: bool) -> &mut Self {
        self.auto_junk = yes;
        self
    }

    /// Sets an option by name.
    ///
    /// Recognized are `n`, `cutoff` and `auto_junk`.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<&mut Self, Error> {
        match name {
            "n" => self.max_matches = parse_option(name, value)?,
            "cutoff" => self.cutoff = parse_option(name, value)?,
            "auto_junk" => self.auto_junk = parse_option(name, value)?,
            _ => return Err(Error::UnknownOption(name.to_string())),
        }
        Ok(self)
    }

    /// Checks that `n > 0` and that the cutoff lies in `0..=1`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_matches == 0 {
            return Err(Error::InvalidMaxMatches);
        }
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(Error::InvalidCutoff(self.cutoff));
        }
        Ok(())
    }
}

/// Returns the best matching candidates for `word`.
///
/// Every candidate is compared to `word` with the candidate as first and
/// `word` as second sequence.  Candidates are rejected as soon as one of
/// the cheap upper bounds falls below the cutoff; the remaining ones are
/// admitted if their full ratio reaches it.  The result is sorted by ratio,
/// best first, with equal ratios keeping the order of `possibilities`, and
/// holds at most `n` candidates.
///
/// ```rust
/// use gestalt::{get_close_matches, CloseMatchConfig};
///
/// let word = "appel".chars().collect::<Vec<_>>();
/// let possibilities = ["ape", "apple", "peach", "puppy"]
///     .iter()
///     .map(|x| x.chars().collect::<Vec<_>>())
///     .collect::<Vec<_>>();
/// let config = CloseMatchConfig::default();
/// let matches = get_close_matches(&word, &possibilities, &config).unwrap();
/// assert_eq!(matches, vec![&possibilities[1], &possibilities[0]]);
/// ```
pub fn get_close_matches<'p, T, S>(
    word: &[T],
    possibilities: &'p [S],
    config: &CloseMatchConfig,
) -> Result<Vec<&'p S>, Error>
where
    T: Hash + Eq,
    S: AsRef<[T]>,
{
    config.validate()?;
    let index = JunkIndex::new(word, config.auto_junk);
    Ok(rank_close_matches(word, possibilities, config, &index)
        .into_iter()
        .map(|idx| &possibilities[idx])
        .collect())
}

/// Like [`get_close_matches`] but treats elements of `word` for which
/// `is_junk` returns `true` as junk.
pub fn get_close_matches_with_junk<'p, T, S, F>(
    word: &[T],
    possibilities: &'p [S],
    config: &CloseMatchConfig,
    is_junk: F,
) -> Result<Vec<&'p S>, Error>
where
    T: Hash + Eq,
    S: AsRef<[T]>,
    F: Fn(&T) -> bool,
{
    config.validate()?;
    let index = JunkIndex::with_junk(word, is_junk, config.auto_junk);
    Ok(rank_close_matches(word, possibilities, config, &index)
        .into_iter()
        .map(|idx| &possibilities[idx])
        .collect())
}

/// Returns the indexes of the accepted possibilities, best first.
///
/// `config` must have been validated.
pub(crate) fn rank_close_matches<T, S>(
    word: &[T],
    possibilities: &[S],
    config: &CloseMatchConfig,
    index: &JunkIndex<'_, T>,
) -> Vec<usize>
where
    T: Hash + Eq,
    S: AsRef<[T]>,
{
    let counts = ElementCounts::new(word);
    let mut matches = Vec::new();

    for (idx, possibility) in possibilities.iter().enumerate() {
        let seq: &[T] = possibility.as_ref();
        if upper_seq_ratio(seq, word) < config.cutoff || counts.quick_ratio(seq) < config.cutoff {
            continue;
        }
        let blocks = get_matching_blocks(seq, word, index);
        let ratio = get_diff_ratio(&blocks, seq.len(), word.len());
        if ratio >= config.cutoff {
            matches.push((ratio, idx));
        }
    }

    tracing::debug!(
        candidates = possibilities.len(),
        accepted = matches.len(),
        "ranked close matches"
    );

    // stable, so equal ratios keep the order of the candidates
    matches.sort_by(|a, b| b.0.total_cmp(&a.0));
    matches
        .into_iter()
        .take(config.max_matches)
        .map(|(_, idx)| idx)
        .collect()
}

#[cfg(test)]
fn close_matches(
    word: &str,
    possibilities: &[Vec<char>],
    config: &CloseMatchConfig,
) -> Result<Vec<String>, Error> {
    let word = word.chars().collect::<Vec<_>>();
    Ok(get_close_matches(&word, possibilities, config)?
        .into_iter()
        .map(|x| x.iter().collect())
        .collect())
}

#[cfg(test)]
fn candidates(words: &[&str]) -> Vec<Vec<char>> {
    words.iter().map(|x| x.chars().collect()).collect()
}

#[test]
fn test_get_close_matches() {
    let possibilities = candidates(&["ape", "apple", "peach", "puppy"]);
    assert_eq!(
        close_matches("appel", &possibilities, &CloseMatchConfig::default()).unwrap(),
        vec!["apple", "ape"]
    );
}

#[test]
fn test_equal_ratios_keep_candidate_order() {
    let possibilities = candidates(&[
        "hi", "hulu", "hali", "hoho", "amaz", "zulo", "blah", "hopp", "uulo", "aulo",
    ]);
    let mut config = CloseMatchConfig::default();
    config.max_matches(5).cutoff(0.7);
    assert_eq!(
        close_matches("hulo", &possibilities, &config).unwrap(),
        vec!["hulu", "zulo", "uulo", "aulo"]
    );
}

#[test]
fn test_max_matches() {
    let possibilities = candidates(&["abcd", "abce", "abcf", "abcg"]);
    let mut config = CloseMatchConfig::default();
    config.max_matches(2);
    assert_eq!(
        close_matches("abcd", &possibilities, &config).unwrap(),
        vec!["abcd", "abce"]
    );
}

#[test]
fn test_invalid_arguments() {
    let possibilities = candidates(&["ape"]);
    let mut config = CloseMatchConfig::default();
    config.max_matches(0);
    assert_eq!(
        close_matches("ape", &possibilities, &config),
        Err(Error::InvalidMaxMatches)
    );

    for &cutoff in &[-0.1, 1.1, f32::NAN] {
        let mut config = CloseMatchConfig::default();
        config.cutoff(cutoff);
        let err = close_matches("ape", &possibilities, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidCutoff(_)));
    }

    let mut config = CloseMatchConfig::default();
    config.cutoff(0.0);
    assert_eq!(close_matches("ape", &possibilities, &config).unwrap(), vec!["ape"]);
    config.cutoff(1.0);
    assert_eq!(close_matches("ape", &possibilities, &config).unwrap(), vec!["ape"]);
}

#[test]
fn test_close_matches_with_junk() {
    // without junk the leading space anchors " abcd" to the second copy
    // (5 of 14 elements matched), with junk only "abcd" matches
    let word = "abcd abcd".chars().collect::<Vec<_>>();
    let possibilities = candidates(&[" abcd"]);
    let mut config = CloseMatchConfig::default();
    config.cutoff(0.7);
    assert_eq!(
        close_matches("abcd abcd", &possibilities, &config).unwrap(),
        vec![" abcd"]
    );
    let matches =
        get_close_matches_with_junk(&word, &possibilities, &config, |c: &char| *c == ' ').unwrap();
    assert!(matches.is_empty());

    config.cutoff(0.5);
    let matches =
        get_close_matches_with_junk(&word, &possibilities, &config, |c: &char| *c == ' ').unwrap();
    assert_eq!(matches, vec![&possibilities[0]]);
}

#[test]
fn test_set_option() {
    let mut config = CloseMatchConfig::default();
    config
        .set_option("n", "10")
        .unwrap()
        .set_option("cutoff", "0.25")
        .unwrap();
    assert_eq!(config.max_matches, 10);
    assert_eq!(config.cutoff, 0.25);
    assert_eq!(
        config.set_option("limit", "1"),
        Err(Error::UnknownOption("limit".into()))
    );
    assert!(matches!(
        config.set_option("cutoff", "high"),
        Err(Error::InvalidOptionValue { .. })
    ));
}
