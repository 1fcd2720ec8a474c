use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Sequences shorter than this never have popular elements.
pub const AUTO_JUNK_MIN_LEN: usize = 200;

/// Index of the positions of every usable element of the second sequence.
///
/// Elements are removed from the index when they are junk (the predicate
/// said so) or popular (with auto junk enabled, a sequence of at least
/// [`AUTO_JUNK_MIN_LEN`] elements where the element occurs more than
/// `len / 100 + 1` times).  Both sets are remembered so that membership can
/// be tested later without calling the predicate again.
///
/// Position lists are in ascending order.
pub struct JunkIndex<'b, T> {
    b2j: HashMap<&'b T, Vec<usize>>,
    junk: HashSet<&'b T>,
    popular: HashSet<&'b T>,
}

impl<'b, T: Hash + Eq> JunkIndex<'b, T> {
    /// Indexes `b` without junk predicate.
    pub fn new(b: &'b [T], auto_junk: bool) -> JunkIndex<'b, T> {
        JunkIndex::build(b, None, auto_junk)
    }

    /// Indexes `b`, treating every element for which `is_junk` returns
    /// `true` as junk.
    ///
    /// The predicate is invoked once per distinct element.
    pub fn with_junk<F>(b: &'b [T], is_junk: F, auto_junk: bool) -> JunkIndex<'b, T>
    where
        F: Fn(&T) -> bool,
    {
        JunkIndex::build(b, Some(&is_junk as &dyn Fn(&T) -> bool), auto_junk)
    }

    /// Indexes `b` with an optional junk predicate.
    pub fn build(
        b: &'b [T],
        is_junk: Option<&dyn Fn(&T) -> bool>,
        auto_junk: bool,
    ) -> JunkIndex<'b, T> {
        let mut b2j: HashMap<&'b T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        let mut junk = HashSet::new();
        if let Some(is_junk) = is_junk {
            b2j.retain(|&elt, _| {
                if is_junk(elt) {
                    junk.insert(elt);
                    false
                } else {
                    true
                }
            });
        }

        let mut popular = HashSet::new();
        if auto_junk && b.len() >= AUTO_JUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|&elt, positions| {
                if positions.len() > ntest {
                    popular.insert(elt);
                    false
                } else {
                    true
                }
            });
        }

        tracing::debug!(
            len = b.len(),
            indexed = b2j.len(),
            junk = junk.len(),
            popular = popular.len(),
            "built element index"
        );

        JunkIndex { b2j, junk, popular }
    }

    /// Ascending positions of `elt` in `b`.
    ///
    /// Junk and popular elements have no positions.
    pub fn positions(&self, elt: &T) -> &[usize] {
        self.b2j.get(elt).map_or(&[][..], |x| &x[..])
    }

    /// Returns `true` if `elt` was classified as junk.
    pub fn is_junk(&self, elt: &T) -> bool {
        self.junk.contains(elt)
    }

    /// Returns `true` if `elt` was classified as popular.
    pub fn is_popular(&self, elt: &T) -> bool {
        self.popular.contains(elt)
    }

    /// Iterates over the junk elements of `b` in arbitrary order.
    pub fn junk(&self) -> impl Iterator<Item = &'b T> + '_ {
        self.junk.iter().copied()
    }

    /// Iterates over the popular elements of `b` in arbitrary order.
    pub fn popular(&self) -> impl Iterator<Item = &'b T> + '_ {
        self.popular.iter().copied()
    }

    /// Number of distinct elements left in the index.
    pub fn len(&self) -> usize {
        self.b2j.len()
    }

    /// Returns `true` if no element is indexed.
    pub fn is_empty(&self) -> bool {
        self.b2j.is_empty()
    }
}

impl<'b, T: fmt::Debug> fmt::Debug for JunkIndex<'b, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("JunkIndex")
            .field("indexed", &self.b2j.len())
            .field("junk", &self.junk)
            .field("popular", &self.popular)
            .finish()
    }
}

#[test]
fn test_positions() {
    let b = ['a', 'b', 'a', 'c', 'a'];
    let index = JunkIndex::new(&b, true);
    assert_eq!(index.positions(&'a'), &[0, 2, 4]);
    assert_eq!(index.positions(&'c'), &[3]);
    assert_eq!(index.positions(&'z'), &[] as &[usize]);
    assert_eq!(index.len(), 3);
}

#[test]
fn test_junk_predicate() {
    let b = "a b c".chars().collect::<Vec<_>>();
    let index = JunkIndex::with_junk(&b, |c: &char| *c == ' ', true);
    assert!(index.is_junk(&' '));
    assert!(!index.is_junk(&'a'));
    assert!(index.positions(&' ').is_empty());
    assert_eq!(index.junk().collect::<Vec<_>>(), vec![&' ']);
}

#[test]
fn test_popular_requires_min_len() {
    // 199 elements: no popularity pruning no matter how repetitive
    let b = vec![0u8; AUTO_JUNK_MIN_LEN - 1];
    let index = JunkIndex::new(&b, true);
    assert!(!index.is_popular(&0));
    assert_eq!(index.positions(&0).len(), AUTO_JUNK_MIN_LEN - 1);
}

#[test]
fn test_popular_threshold() {
    // len 300 gives a threshold of 4 occurrences
    let mut b = (0..300u32).map(|x| x + 100).collect::<Vec<_>>();
    for j in 0..5 {
        b[j * 10] = 1;
    }
    for j in 0..4 {
        b[j * 10 + 1] = 2;
    }
    let index = JunkIndex::new(&b, true);
    assert!(index.is_popular(&1));
    assert!(index.positions(&1).is_empty());
    assert!(!index.is_popular(&2));
    assert_eq!(index.positions(&2), &[1, 11, 21, 31]);

    let index = JunkIndex::new(&b, false);
    assert!(!index.is_popular(&1));
    assert_eq!(index.positions(&1).len(), 5);
}

#[test]
fn test_junk_is_not_popular() {
    let b = vec![' '; 250];
    let index = JunkIndex::with_junk(&b, |c: &char| *c == ' ', true);
    assert!(index.is_junk(&' '));
    assert!(!index.is_popular(&' '));
    assert!(index.is_empty());
}
