//! Cheap upper bounds for the similarity ratio.
//!
//! Both estimators ignore the order of the elements and can be used to
//! reject candidates before running the full matcher.  For any two
//! sequences `upper_seq_ratio >= quick ratio >= ratio` holds.
use std::collections::HashMap;
use std::hash::Hash;

use crate::common::normalized_ratio;

/// Element frequencies of a sequence for repeated quick ratio estimates.
///
/// Build this once for the second sequence and pass it to
/// [`ElementCounts::quick_ratio`] (or
/// [`SequenceMatcher::quick_ratio_with`](crate::SequenceMatcher::quick_ratio_with))
/// to avoid recounting it for every comparison.
#[derive(Debug, Clone)]
pub struct ElementCounts<'b, T> {
    counts: HashMap<&'b T, usize>,
    len: usize,
}

impl<'b, T: Hash + Eq> ElementCounts<'b, T> {
    /// Counts the elements of `seq`.
    pub fn new(seq: &'b [T]) -> ElementCounts<'b, T> {
        let mut counts = HashMap::new();
        for item in seq {
            *counts.entry(item).or_insert(0) += 1;
        }
        ElementCounts {
            counts,
            len: seq.len(),
        }
    }

    /// Length of the counted sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the counted sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How often `item` occurs in the counted sequence.
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Size of the multiset intersection of `seq` and the counted sequence.
    pub fn intersection_len(&self, seq: &[T]) -> usize {
        let mut available: HashMap<&T, isize> = HashMap::new();
        let mut matches = 0;
        for item in seq {
            let num = match available.get(item) {
                Some(&num) => num,
                None => self.count(item) as isize,
            };
            available.insert(item, num - 1);
            if num > 0 {
                matches += 1;
            }
        }
        matches
    }

    /// Upper bound on the ratio of `seq` against the counted sequence.
    pub fn quick_ratio(&self, seq: &[T]) -> f32 {
        normalized_ratio(self.intersection_len(seq), seq.len() + self.len)
    }
}

/// Upper bound on the ratio that only looks at the lengths.
pub fn upper_seq_ratio<T>(seq1: &[T], seq2: &[T]) -> f32 {
    normalized_ratio(seq1.len().min(seq2.len()), seq1.len() + seq2.len())
}

#[test]
fn test_intersection_len() {
    let b = ['a', 'b', 'b', 'c'];
    let counts = ElementCounts::new(&b);
    assert_eq!(counts.count(&'b'), 2);
    assert_eq!(counts.intersection_len(&['b', 'b', 'b', 'x']), 2);
    assert_eq!(counts.intersection_len(&['c', 'a']), 2);
    assert_eq!(counts.intersection_len(&[]), 0);
}

#[test]
fn test_quick_ratio() {
    let b = "bcde".chars().collect::<Vec<_>>();
    let counts = ElementCounts::new(&b);
    assert_eq!(counts.quick_ratio(&"abcd".chars().collect::<Vec<_>>()), 0.75);
    assert_eq!(counts.quick_ratio(&"edcb".chars().collect::<Vec<_>>()), 1.0);

    let empty: [char; 0] = [];
    assert_eq!(ElementCounts::new(&empty).quick_ratio(&empty), 1.0);
}

#[test]
fn test_upper_seq_ratio() {
    assert_eq!(upper_seq_ratio(&[1, 2, 3], &[4]), 0.5);
    assert_eq!(upper_seq_ratio::<u8>(&[], &[]), 1.0);
}
