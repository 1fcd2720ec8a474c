//! Matching block decomposition.
//!
//! The longest match splits both sequences into a left and a right part
//! which are searched again until no more matches are found.  Pending
//! ranges are kept on an explicit stack so large inputs cannot exhaust
//! the call stack.
use std::hash::Hash;
use std::ops::Range;

use crate::algorithms::{find_longest_match, JunkIndex};
use crate::Match;

/// Returns the matching blocks of `a` and `b`.
///
/// `index` must have been built over `b`.  The blocks are sorted by their
/// position in `a` and `b`, no two consecutive blocks are adjacent, and the
/// list always ends in the sentinel `Match { a: a.len(), b: b.len(), size: 0 }`
/// which is the only block of size zero.
///
/// ```rust
/// use gestalt::algorithms::{get_matching_blocks, JunkIndex};
/// use gestalt::Match;
///
/// let a = "abxcd".chars().collect::<Vec<_>>();
/// let b = "abcd".chars().collect::<Vec<_>>();
/// let index = JunkIndex::new(&b, true);
/// assert_eq!(get_matching_blocks(&a, &b, &index), vec![
///     Match::new(0, 0, 2),
///     Match::new(3, 2, 2),
///     Match::new(5, 4, 0),
/// ]);
/// ```
pub fn get_matching_blocks<T>(a: &[T], b: &[T], index: &JunkIndex<'_, T>) -> Vec<Match>
where
    T: Hash + Eq,
{
    let mut queue: Vec<(Range<usize>, Range<usize>)> = vec![(0..a.len(), 0..b.len())];
    let mut found = Vec::new();

    while let Some((a_range, b_range)) = queue.pop() {
        let m = find_longest_match(a, a_range.clone(), b, b_range.clone(), index);
        if m.size == 0 {
            continue;
        }
        if a_range.start < m.a && b_range.start < m.b {
            queue.push((a_range.start..m.a, b_range.start..m.b));
        }
        if m.a + m.size < a_range.end && m.b + m.size < b_range.end {
            queue.push((m.a + m.size..a_range.end, m.b + m.size..b_range.end));
        }
        found.push(m);
    }
    found.sort();

    let mut rv = merge_adjacent(found);
    rv.push(Match::new(a.len(), b.len(), 0));
    tracing::trace!(blocks = rv.len(), "decomposed matching blocks");
    rv
}

/// Collapses consecutive blocks where one continues the other.
fn merge_adjacent(blocks: Vec<Match>) -> Vec<Match> {
    let mut rv: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
    for block in blocks {
        match rv.last_mut() {
            Some(last) if last.is_adjacent_to(&block) => last.size += block.size,
            _ => rv.push(block),
        }
    }
    rv
}

/// Sum of the sizes of all matching blocks.
pub fn matched_len(blocks: &[Match]) -> usize {
    blocks.iter().map(|m| m.size).sum()
}

#[cfg(test)]
fn blocks_for(a: &str, b: &str) -> Vec<(usize, usize, usize)> {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    let index = JunkIndex::new(&b, true);
    get_matching_blocks(&a, &b, &index)
        .iter()
        .map(|m| m.as_tuple())
        .collect()
}

#[test]
fn test_matching_blocks() {
    assert_eq!(
        blocks_for("abxcd", "abcd"),
        vec![(0, 0, 2), (3, 2, 2), (5, 4, 0)]
    );
    assert_eq!(
        blocks_for("qabxcd", "abycdf"),
        vec![(1, 0, 2), (4, 3, 2), (6, 6, 0)]
    );
}

#[test]
fn test_identical_and_empty() {
    assert_eq!(blocks_for("abc", "abc"), vec![(0, 0, 3), (3, 3, 0)]);
    assert_eq!(blocks_for("", ""), vec![(0, 0, 0)]);
    assert_eq!(blocks_for("abc", ""), vec![(3, 0, 0)]);
    assert_eq!(blocks_for("", "abc"), vec![(0, 3, 0)]);
    assert_eq!(blocks_for("abc", "xyz"), vec![(3, 3, 0)]);
}

#[test]
fn test_merge_adjacent() {
    let merged = merge_adjacent(vec![
        Match::new(0, 0, 2),
        Match::new(2, 2, 1),
        Match::new(4, 3, 1),
        Match::new(5, 4, 2),
    ]);
    insta::assert_debug_snapshot!(merged, @r###"
    [
        Match {
            a: 0,
            b: 0,
            size: 3,
        },
        Match {
            a: 4,
            b: 3,
            size: 3,
        },
    ]
    "###);
}

#[test]
fn test_alternating_matches() {
    // alternating matches and mismatches produce one range per block
    let a = (0..2_000u32)
        .map(|x| if x % 2 == 0 { x } else { 1_000_000 + x })
        .collect::<Vec<_>>();
    let b = (0..2_000u32)
        .map(|x| if x % 2 == 0 { x } else { 2_000_000 + x })
        .collect::<Vec<_>>();
    let index = JunkIndex::new(&b, true);
    let blocks = get_matching_blocks(&a, &b, &index);
    assert_eq!(blocks.len(), 1_001);
    assert_eq!(matched_len(&blocks), 1_000);
}
