//! Longest junk-free matching block search.
//!
//! * time: `O(N * P)` where `P` is the number of positions of the
//!   elements of `old` in the index
//! * space `O(M)`
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

use crate::algorithms::JunkIndex;
use crate::Match;

/// Finds the longest matching block in `a[a_range]` and `b[b_range]`.
///
/// `index` must have been built over the complete `b`.  The returned
/// block is the longest run of equal elements that contains no junk or
/// popular elements, widened on both ends first by equal non-junk elements
/// and then by equal junk elements.  If several runs are equally long the
/// one starting earliest in `a` wins, and of those the one starting
/// earliest in `b`.
///
/// If nothing matches `Match { a: a_range.start, b: b_range.start, size: 0 }`
/// is returned.
///
/// ```rust
/// use gestalt::algorithms::{find_longest_match, JunkIndex};
/// use gestalt::Match;
///
/// let a = " abcd".chars().collect::<Vec<_>>();
/// let b = "abcd abcd".chars().collect::<Vec<_>>();
/// let index = JunkIndex::with_junk(&b, |c: &char| *c == ' ', true);
/// let m = find_longest_match(&a, 0..5, &b, 0..9, &index);
/// assert_eq!(m, Match::new(1, 0, 4));
/// ```
pub fn find_longest_match<T>(
    a: &[T],
    a_range: Range<usize>,
    b: &[T],
    b_range: Range<usize>,
    index: &JunkIndex<'_, T>,
) -> Match
where
    T: Hash + Eq,
{
    let (alo, ahi) = (a_range.start, a_range.end);
    let (blo, bhi) = (b_range.start, b_range.end);
    let mut best = Best {
        best_i: alo,
        best_j: blo,
        best_size: 0,
    };

    // j2len[j] is the length of the run ending in a[i - 1] and b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut new_j2len = HashMap::new();
        for &j in index.positions(&a[i]) {
            if j < blo {
                continue;
            }
            if j >= bhi {
                break;
            }
            let k = j
                .checked_sub(1)
                .and_then(|prev| j2len.get(&prev))
                .copied()
                .unwrap_or(0)
                + 1;
            new_j2len.insert(j, k);
            if k > best.best_size {
                best = Best {
                    best_i: i + 1 - k,
                    best_j: j + 1 - k,
                    best_size: k,
                };
            }
        }
        j2len = new_j2len;
    }

    // interesting elements first so that the junk around them is absorbed
    // afterwards instead of showing up as separate blocks later
    best.extend(a, alo..ahi, b, blo..bhi, |elt| !index.is_junk(elt));
    best.extend(a, alo..ahi, b, blo..bhi, |elt| index.is_junk(elt));

    Match::new(best.best_i, best.best_j, best.best_size)
}

struct Best {
    best_i: usize,
    best_j: usize,
    best_size: usize,
}

impl Best {
    /// Greedily widens the block while the neighbouring elements are equal
    /// and `b`'s element passes `accept`.
    fn extend<T, F>(
        &mut self,
        a: &[T],
        a_range: Range<usize>,
        b: &[T],
        b_range: Range<usize>,
        accept: F,
    ) where
        T: Eq,
        F: Fn(&T) -> bool,
    {
        while self.best_i > a_range.start
            && self.best_j > b_range.start
            && accept(&b[self.best_j - 1])
            && a[self.best_i - 1] == b[self.best_j - 1]
        {
            self.best_i -= 1;
            self.best_j -= 1;
            self.best_size += 1;
        }
        while self.best_i + self.best_size < a_range.end
            && self.best_j + self.best_size < b_range.end
            && accept(&b[self.best_j + self.best_size])
            && a[self.best_i + self.best_size] == b[self.best_j + self.best_size]
        {
            self.best_size += 1;
        }
    }
}

#[cfg(test)]
fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_junk_is_absorbed_around_match() {
    let a = chars(" abcd");
    let b = chars("abcd abcd");
    let index = JunkIndex::with_junk(&b, |c: &char| *c == ' ', true);
    assert_eq!(
        find_longest_match(&a, 0..5, &b, 0..9, &index),
        Match::new(1, 0, 4)
    );

    // without junk the leading space lines up with the second copy
    let index = JunkIndex::new(&b, true);
    assert_eq!(
        find_longest_match(&a, 0..5, &b, 0..9, &index),
        Match::new(0, 4, 5)
    );
}

#[test]
fn test_earliest_match_wins() {
    let a = chars("abxab");
    let b = chars("abyab");
    let index = JunkIndex::new(&b, true);
    assert_eq!(
        find_longest_match(&a, 0..5, &b, 0..5, &index),
        Match::new(0, 0, 2)
    );

    let a = chars("ab");
    let b = chars("xabab");
    let index = JunkIndex::new(&b, true);
    assert_eq!(
        find_longest_match(&a, 0..2, &b, 0..5, &index),
        Match::new(0, 1, 2)
    );
}

#[test]
fn test_no_match() {
    let a = chars("abc");
    let b = chars("xyz");
    let index = JunkIndex::new(&b, true);
    assert_eq!(
        find_longest_match(&a, 1..3, &b, 2..3, &index),
        Match::new(1, 2, 0)
    );

    let empty: Vec<char> = vec![];
    let index = JunkIndex::new(&empty, true);
    assert_eq!(
        find_longest_match(&a, 0..3, &empty, 0..0, &index),
        Match::new(0, 0, 0)
    );
}

#[test]
fn test_sub_ranges() {
    let a = chars("abcdef");
    let b = chars("abcdef");
    let index = JunkIndex::new(&b, true);
    assert_eq!(
        find_longest_match(&a, 2..6, &b, 0..4, &index),
        Match::new(2, 2, 2)
    );
    assert_eq!(
        find_longest_match(&a, 1..3, &b, 1..3, &index),
        Match::new(1, 1, 2)
    );
}

#[test]
fn test_popular_elements_extend_matches() {
    // 'x' is popular in b so it is never indexed but it still widens a
    // match found through interesting elements
    let mut b = vec!['x'; 200];
    b.extend(chars("ab"));
    let a = chars("xxabx");
    let index = JunkIndex::new(&b, true);
    assert!(index.is_popular(&'x'));
    assert_eq!(
        find_longest_match(&a, 0..5, &b, 0..b.len(), &index),
        Match::new(0, 198, 4)
    );
}
