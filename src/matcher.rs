use std::hash::Hash;
use std::ops::Range;

use crate::algorithms::{capture_opcodes, find_longest_match, get_matching_blocks, JunkIndex};
use crate::common::{get_diff_ratio, group_diff_ops};
use crate::utils::{upper_seq_ratio, ElementCounts};
use crate::{DiffOp, Error, Match};

/// A builder type config for [`SequenceMatcher`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct MatcherConfig {
    auto_junk: bool,
    #[cfg_attr(feature = "serde", serde(rename = "n"))]
    context_radius: usize,
}

impl Default for MatcherConfig {
    fn default() -> MatcherConfig {
        MatcherConfig {
            auto_junk: true,
            context_radius: 3,
        }
    }
}

impl MatcherConfig {
    /// Enables or disables the popular element heuristic.
    ///
    /// The default is enabled.  With it every element of a second sequence
    /// of at least 200 elements that makes up more than 1% of it (plus one)
    /// is left out of the index.
    pub fn auto_junk(&mut self, yes: bool) -> &mut Self {
        self.auto_junk = yes;
        self
    }

    /// Changes the context radius used by [`SequenceMatcher::grouped_opcodes`].
    ///
    /// The default is `3`.
    pub fn context_radius(&mut self, n: usize) -> &mut Self {
        self.context_radius = n;
        self
    }

    /// Sets an option by name.
    ///
    /// Recognized are `auto_junk` (`true` or `false`) and `n` (the context
    /// radius).  Anything else is rejected.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<&mut Self, Error> {
        match name {
            "auto_junk" => self.auto_junk = parse_option(name, value)?,
            "n" => self.context_radius = parse_option(name, value)?,
            _ => return Err(Error::UnknownOption(name.to_string())),
        }
        Ok(self)
    }

    /// Creates a matcher for `a` and `b`.
    pub fn matcher<'a, T: Hash + Eq>(&self, a: &'a [T], b: &'a [T]) -> SequenceMatcher<'a, T> {
        SequenceMatcher {
            a,
            b,
            index: JunkIndex::new(b, self.auto_junk),
            context_radius: self.context_radius,
        }
    }

    /// Creates a matcher for `a` and `b` which treats every element of `b`
    /// for which `is_junk` returns `true` as junk.
    pub fn matcher_with_junk<'a, T, F>(
        &self,
        a: &'a [T],
        b: &'a [T],
        is_junk: F,
    ) -> SequenceMatcher<'a, T>
    where
        T: Hash + Eq,
        F: Fn(&T) -> bool,
    {
        SequenceMatcher {
            a,
            b,
            index: JunkIndex::with_junk(b, is_junk, self.auto_junk),
            context_radius: self.context_radius,
        }
    }
}

pub(crate) fn parse_option<V: std::str::FromStr>(name: &str, value: &str) -> Result<V, Error> {
    value.parse().map_err(|_| Error::InvalidOptionValue {
        option: name.to_string(),
        value: value.to_string(),
    })
}

/// Compares two sequences with gestalt pattern matching.
///
/// The index over `b` is built once when the matcher is created and reused
/// by every method.  Nothing else is cached, so every call recomputes its
/// result from scratch.
///
/// ```rust
/// use gestalt::{DiffTag, SequenceMatcher};
///
/// let a = "qabxcd".chars().collect::<Vec<_>>();
/// let b = "abycdf".chars().collect::<Vec<_>>();
/// let matcher = SequenceMatcher::new(&a, &b);
/// let opcodes = matcher
///     .get_opcodes()
///     .iter()
///     .map(|op| op.as_opcode())
///     .collect::<Vec<_>>();
/// assert_eq!(opcodes, vec![
///     (DiffTag::Delete, 0, 1, 0, 0),
///     (DiffTag::Equal, 1, 3, 0, 2),
///     (DiffTag::Replace, 3, 4, 2, 3),
///     (DiffTag::Equal, 4, 6, 3, 5),
///     (DiffTag::Insert, 6, 6, 5, 6),
/// ]);
/// ```
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    index: JunkIndex<'a, T>,
    context_radius: usize,
}

impl SequenceMatcher<'static, ()> {
    /// Configures a matcher before creating it.
    ///
    /// ```rust
    /// # use gestalt::SequenceMatcher;
    /// let a = vec![b'x'; 300];
    /// let matcher = SequenceMatcher::configure().auto_junk(false).matcher(&a, &a);
    /// assert_eq!(matcher.ratio(), 1.0);
    /// ```
    pub fn configure() -> MatcherConfig {
        MatcherConfig::default()
    }
}

impl<'a, T: Hash + Eq> SequenceMatcher<'a, T> {
    /// Creates a matcher with the default configuration.
    pub fn new(a: &'a [T], b: &'a [T]) -> SequenceMatcher<'a, T> {
        MatcherConfig::default().matcher(a, b)
    }

    /// Creates a matcher with a junk predicate and otherwise default
    /// configuration.
    pub fn with_junk<F>(a: &'a [T], b: &'a [T], is_junk: F) -> SequenceMatcher<'a, T>
    where
        F: Fn(&T) -> bool,
    {
        MatcherConfig::default().matcher_with_junk(a, b, is_junk)
    }

    /// The first sequence.
    pub fn a(&self) -> &'a [T] {
        self.a
    }

    /// The second sequence.
    pub fn b(&self) -> &'a [T] {
        self.b
    }

    /// The index over the second sequence.
    pub fn index(&self) -> &JunkIndex<'a, T> {
        &self.index
    }

    /// The junk elements of `b`.
    pub fn junk(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.index.junk()
    }

    /// The popular elements of `b`.
    pub fn popular(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.index.popular()
    }

    /// Finds the longest matching block in `a[a_range]` and `b[b_range]`.
    ///
    /// See [`find_longest_match`](crate::algorithms::find_longest_match).
    pub fn find_longest_match(&self, a_range: Range<usize>, b_range: Range<usize>) -> Match {
        find_longest_match(self.a, a_range, self.b, b_range, &self.index)
    }

    /// Finds the longest matching block of the complete sequences.
    pub fn longest_match(&self) -> Match {
        self.find_longest_match(0..self.a.len(), 0..self.b.len())
    }

    /// Returns the matching blocks terminated by the zero sized sentinel.
    pub fn get_matching_blocks(&self) -> Vec<Match> {
        get_matching_blocks(self.a, self.b, &self.index)
    }

    /// Returns the edit script that turns `a` into `b`.
    pub fn get_opcodes(&self) -> Vec<DiffOp> {
        capture_opcodes(&self.get_matching_blocks())
    }

    /// Returns the opcodes grouped into hunks with `n` elements of context.
    pub fn get_grouped_opcodes(&self, n: usize) -> Vec<Vec<DiffOp>> {
        group_diff_ops(self.get_opcodes(), n)
    }

    /// Returns the opcodes grouped with the configured context radius.
    pub fn grouped_opcodes(&self) -> Vec<Vec<DiffOp>> {
        self.get_grouped_opcodes(self.context_radius)
    }

    /// Return a measure of the sequences' similarity in the range `0..=1`.
    ///
    /// This is `2 * M / T` where `M` is the number of matched elements and
    /// `T` the total number of elements in both sequences.
    ///
    /// ```rust
    /// # use gestalt::SequenceMatcher;
    /// let a = "abcd".chars().collect::<Vec<_>>();
    /// let b = "bcde".chars().collect::<Vec<_>>();
    /// assert_eq!(SequenceMatcher::new(&a, &b).ratio(), 0.75);
    /// ```
    pub fn ratio(&self) -> f32 {
        get_diff_ratio(&self.get_matching_blocks(), self.a.len(), self.b.len())
    }

    /// Returns an upper bound on [`ratio`](Self::ratio) that ignores the
    /// order of the elements.
    pub fn quick_ratio(&self) -> f32 {
        ElementCounts::new(self.b).quick_ratio(self.a)
    }

    /// Like [`quick_ratio`](Self::quick_ratio) but with the element counts
    /// of `b` computed upfront.
    pub fn quick_ratio_with(&self, counts: &ElementCounts<'_, T>) -> f32 {
        counts.quick_ratio(self.a)
    }

    /// Returns an upper bound on [`quick_ratio`](Self::quick_ratio) that
    /// only looks at the lengths.
    pub fn real_quick_ratio(&self) -> f32 {
        upper_seq_ratio(self.a, self.b)
    }
}

#[cfg(test)]
fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_ratio() {
    let (a, b) = (chars("abcd"), chars("bcde"));
    let m = SequenceMatcher::new(&a, &b);
    assert_eq!(m.ratio(), 0.75);
    assert_eq!(m.quick_ratio(), 0.75);
    assert_eq!(m.real_quick_ratio(), 1.0);

    let empty: Vec<char> = vec![];
    let m = SequenceMatcher::new(&empty, &empty);
    assert_eq!(m.ratio(), 1.0);
    assert_eq!(m.quick_ratio(), 1.0);
    assert_eq!(m.real_quick_ratio(), 1.0);
}

#[test]
fn test_ratio_bounds() {
    let a = chars("private Thread currentThread;");
    let b = chars("private volatile Thread currentThread;");
    let m = SequenceMatcher::with_junk(&a, &b, |c: &char| *c == ' ');
    assert!(m.real_quick_ratio() >= m.quick_ratio());
    assert!(m.quick_ratio() >= m.ratio());
    assert!(m.ratio() > 0.8);
}

#[test]
fn test_quick_ratio_with_counts() {
    let (a, b) = (chars("abcd"), chars("bcde"));
    let counts = ElementCounts::new(&b);
    let m = SequenceMatcher::new(&a, &b);
    assert_eq!(m.quick_ratio_with(&counts), m.quick_ratio());
}

#[test]
fn test_longest_match_with_junk() {
    let (a, b) = (chars(" abcd"), chars("abcd abcd"));
    let m = SequenceMatcher::with_junk(&a, &b, |c: &char| *c == ' ');
    assert_eq!(m.find_longest_match(0..5, 0..9), Match::new(1, 0, 4));
    assert_eq!(m.longest_match(), Match::new(1, 0, 4));
    assert_eq!(m.junk().collect::<Vec<_>>(), vec![&' ']);
    assert_eq!(m.popular().count(), 0);
}

#[test]
fn test_get_matching_blocks() {
    let (a, b) = (chars("abxcd"), chars("abcd"));
    let blocks = SequenceMatcher::new(&a, &b).get_matching_blocks();
    assert_eq!(
        blocks,
        vec![Match::new(0, 0, 2), Match::new(3, 2, 2), Match::new(5, 4, 0)]
    );
}

#[test]
fn test_identity() {
    let a = chars("the quick brown fox");
    let m = SequenceMatcher::new(&a, &a);
    assert_eq!(m.ratio(), 1.0);
    assert_eq!(
        m.get_matching_blocks(),
        vec![Match::new(0, 0, 19), Match::new(19, 19, 0)]
    );
    assert_eq!(m.grouped_opcodes(), Vec::<Vec<DiffOp>>::new());
}

#[test]
fn test_auto_junk() {
    // the popular 'x' can only widen a match that was found through some
    // other element, and there is none here
    let a = vec![b'x'; 300];
    let mut b = vec![b'y'];
    b.extend(vec![b'x'; 299]);
    let m = SequenceMatcher::new(&a, &b);
    assert_eq!(m.popular().collect::<Vec<_>>(), vec![&b'x']);
    assert_eq!(m.get_matching_blocks(), vec![Match::new(300, 300, 0)]);
    assert_eq!(m.ratio(), 0.0);

    let m = SequenceMatcher::configure().auto_junk(false).matcher(&a, &b);
    assert_eq!(m.popular().count(), 0);
    assert_eq!(
        m.get_matching_blocks(),
        vec![Match::new(0, 1, 299), Match::new(300, 300, 0)]
    );
    assert!(m.ratio() > 0.99);
}

#[test]
fn test_grouped_opcodes() {
    let a = (1..40).collect::<Vec<u32>>();
    let mut b = a.clone();
    b[8] = 100;
    b.insert(20, 200);
    b.remove(30);
    let groups = SequenceMatcher::new(&a, &b).get_grouped_opcodes(3);
    let groups = groups
        .iter()
        .map(|g| g.iter().map(|op| op.as_opcode()).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    insta::assert_debug_snapshot!(groups, @r###"
    [
        [
            (
                Equal,
                5,
                8,
                5,
                8,
            ),
            (
                Replace,
                8,
                9,
                8,
                9,
            ),
            (
                Equal,
                9,
                12,
                9,
                12,
            ),
        ],
        [
            (
                Equal,
                17,
                20,
                17,
                20,
            ),
            (
                Insert,
                20,
                20,
                20,
                21,
            ),
            (
                Equal,
                20,
                23,
                21,
                24,
            ),
        ],
        [
            (
                Equal,
                26,
                29,
                27,
                30,
            ),
            (
                Delete,
                29,
                30,
                30,
                30,
            ),
            (
                Equal,
                30,
                33,
                30,
                33,
            ),
        ],
    ]
    "###);
}

#[test]
fn test_configure_without_element_type() {
    use crate::DiffTag;

    let a = chars("abcd");
    let b = chars("bcde");
    let mut config = SequenceMatcher::configure();
    config.context_radius(0);
    let m = config.matcher(&a, &b);
    assert_eq!(m.ratio(), 0.75);
    assert_eq!(
        m.grouped_opcodes()
            .iter()
            .map(|g| g.iter().map(|op| op.as_opcode()).collect::<Vec<_>>())
            .collect::<Vec<_>>(),
        vec![
            vec![(DiffTag::Delete, 0, 1, 0, 0), (DiffTag::Equal, 1, 1, 0, 0)],
            vec![(DiffTag::Equal, 4, 4, 3, 3), (DiffTag::Insert, 4, 4, 3, 4)],
        ]
    );
}

#[test]
fn test_set_option() {
    let mut config = MatcherConfig::default();
    config
        .set_option("n", "5")
        .unwrap()
        .set_option("auto_junk", "false")
        .unwrap();
    assert_eq!(
        config,
        MatcherConfig {
            auto_junk: false,
            context_radius: 5,
        }
    );
    assert_eq!(
        config.set_option("isjunk", "true"),
        Err(Error::UnknownOption("isjunk".into()))
    );
    assert!(config.set_option("n", "-1").unwrap_err().is_invalid_argument());
}
