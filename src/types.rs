use std::fmt;
use std::ops::Range;

/// A matching block between two sequences.
///
/// `a[a..a + size]` equals `b[b..b + size]`.  The list returned by
/// [`get_matching_blocks`](crate::algorithms::get_matching_blocks) always
/// ends in a zero sized sentinel `Match { a: a.len(), b: b.len(), size: 0 }`.
///
/// The derived ordering is lexicographic over `(a, b, size)` which is the
/// order the matching blocks are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// Start of the block in the first sequence.
    pub a: usize,
    /// Start of the block in the second sequence.
    pub b: usize,
    /// Number of matching elements.
    pub size: usize,
}

impl Match {
    /// Creates a new match.
    pub fn new(a: usize, b: usize, size: usize) -> Match {
        Match { a, b, size }
    }

    /// The covered range in the first sequence.
    pub fn a_range(&self) -> Range<usize> {
        self.a..self.a + self.size
    }

    /// The covered range in the second sequence.
    pub fn b_range(&self) -> Range<usize> {
        self.b..self.b + self.size
    }

    /// Returns `true` if `other` continues this block without a gap.
    pub fn is_adjacent_to(&self, other: &Match) -> bool {
        self.a + self.size == other.a && self.b + self.size == other.b
    }

    /// Returns the match as `(a, b, size)` tuple.
    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.a, self.b, self.size)
    }
}

impl From<(usize, usize, usize)> for Match {
    fn from((a, b, size): (usize, usize, usize)) -> Match {
        Match { a, b, size }
    }
}

/// The tag of a diff operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DiffTag {
    /// The diff op encodes an equal segment.
    Equal,
    /// The diff op encodes a deleted segment.
    Delete,
    /// The diff op encodes an inserted segment.
    Insert,
    /// The diff op encodes a replaced segment.
    Replace,
}

impl DiffTag {
    /// Returns the lowercase name of the tag.
    pub fn as_str(&self) -> &'static str {
        match *self {
            DiffTag::Equal => "equal",
            DiffTag::Delete => "delete",
            DiffTag::Insert => "insert",
            DiffTag::Replace => "replace",
        }
    }
}

impl fmt::Display for DiffTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single opcode of an edit script.
///
/// This is produced by the [`Capture`](crate::algorithms::Capture) hook.
/// Equal segments have the same length in both sequences so they only
/// carry one length.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case", tag = "op")
)]
pub enum DiffOp {
    /// A segment is equal (see [`DiffHook::equal`](crate::algorithms::DiffHook::equal))
    Equal {
        old_index: usize,
        new_index: usize,
        len: usize,
    },
    /// A segment was deleted (see [`DiffHook::delete`](crate::algorithms::DiffHook::delete))
    Delete {
        old_index: usize,
        old_len: usize,
        new_index: usize,
    },
    /// A segment was inserted (see [`DiffHook::insert`](crate::algorithms::DiffHook::insert))
    Insert {
        old_index: usize,
        new_index: usize,
        new_len: usize,
    },
    /// A segment was replaced (see [`DiffHook::replace`](crate::algorithms::DiffHook::replace))
    Replace {
        old_index: usize,
        old_len: usize,
        new_index: usize,
        new_len: usize,
    },
}

impl DiffOp {
    /// Returns the tag of the operation.
    pub fn tag(&self) -> DiffTag {
        self.as_tag_tuple().0
    }

    /// Returns the old range.
    pub fn old_range(&self) -> Range<usize> {
        self.as_tag_tuple().1
    }

    /// Returns the new range.
    pub fn new_range(&self) -> Range<usize> {
        self.as_tag_tuple().2
    }

    /// Transform the op into a tuple of diff tag and ranges.
    ///
    /// This is useful when operating on slices.  The returned format is
    /// `(tag, i1..i2, j1..j2)`.
    pub fn as_tag_tuple(&self) -> (DiffTag, Range<usize>, Range<usize>) {
        match *self {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => (
                DiffTag::Equal,
                old_index..old_index + len,
                new_index..new_index + len,
            ),
            DiffOp::Delete {
                old_index,
                new_index,
                old_len,
            } => (
                DiffTag::Delete,
                old_index..old_index + old_len,
                new_index..new_index,
            ),
            DiffOp::Insert {
                old_index,
                new_index,
                new_len,
            } => (
                DiffTag::Insert,
                old_index..old_index,
                new_index..new_index + new_len,
            ),
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => (
                DiffTag::Replace,
                old_index..old_index + old_len,
                new_index..new_index + new_len,
            ),
        }
    }

    /// Returns the op as classic `(tag, i1, i2, j1, j2)` opcode.
    pub fn as_opcode(&self) -> (DiffTag, usize, usize, usize, usize) {
        let (tag, old, new) = self.as_tag_tuple();
        (tag, old.start, old.end, new.start, new.end)
    }

    /// Builds an op from a tag and the two covered ranges.
    ///
    /// For [`DiffTag::Equal`] only the length of the old range is used.
    pub fn from_tag_tuple(tag: DiffTag, old: Range<usize>, new: Range<usize>) -> DiffOp {
        match tag {
            DiffTag::Equal => DiffOp::Equal {
                old_index: old.start,
                new_index: new.start,
                len: old.len(),
            },
            DiffTag::Delete => DiffOp::Delete {
                old_index: old.start,
                old_len: old.len(),
                new_index: new.start,
            },
            DiffTag::Insert => DiffOp::Insert {
                old_index: old.start,
                new_index: new.start,
                new_len: new.len(),
            },
            DiffTag::Replace => DiffOp::Replace {
                old_index: old.start,
                old_len: old.len(),
                new_index: new.start,
                new_len: new.len(),
            },
        }
    }

    /// Iterates over the slices of both sequences this op covers.
    ///
    /// Equal ops yield only the old slice.  Replace ops yield the deleted
    /// old slice followed by the inserted new slice.
    pub fn iter_slices<'x, T>(
        &self,
        old: &'x [T],
        new: &'x [T],
    ) -> impl Iterator<Item = (DiffTag, &'x [T])> {
        let (tag, old_range, new_range) = self.as_tag_tuple();
        let (first, second) = match tag {
            DiffTag::Equal => ((DiffTag::Equal, &old[old_range]), None),
            DiffTag::Delete => ((DiffTag::Delete, &old[old_range]), None),
            DiffTag::Insert => ((DiffTag::Insert, &new[new_range]), None),
            DiffTag::Replace => (
                (DiffTag::Delete, &old[old_range]),
                Some((DiffTag::Insert, &new[new_range])),
            ),
        };
        Some(first).into_iter().chain(second)
    }
}

#[test]
fn test_as_opcode() {
    let op = DiffOp::Replace {
        old_index: 3,
        old_len: 1,
        new_index: 2,
        new_len: 1,
    };
    assert_eq!(op.as_opcode(), (DiffTag::Replace, 3, 4, 2, 3));
    assert_eq!(op.tag(), DiffTag::Replace);
    assert_eq!(
        DiffOp::from_tag_tuple(DiffTag::Replace, 3..4, 2..3),
        op
    );

    let op = DiffOp::Insert {
        old_index: 6,
        new_index: 5,
        new_len: 1,
    };
    assert_eq!(op.as_opcode(), (DiffTag::Insert, 6, 6, 5, 6));
    assert_eq!(op.tag().to_string(), "insert");
}

#[test]
fn test_iter_slices() {
    let old = ['q', 'a', 'b', 'x'];
    let new = ['a', 'b', 'y'];
    let op = DiffOp::Replace {
        old_index: 3,
        old_len: 1,
        new_index: 2,
        new_len: 1,
    };
    let slices = op.iter_slices(&old, &new).collect::<Vec<_>>();
    assert_eq!(
        slices,
        vec![(DiffTag::Delete, &['x'][..]), (DiffTag::Insert, &['y'][..])]
    );
}

#[test]
fn test_match_adjacency() {
    let m = Match::new(0, 0, 2);
    assert!(m.is_adjacent_to(&Match::new(2, 2, 1)));
    assert!(!m.is_adjacent_to(&Match::new(3, 2, 1)));
    assert_eq!(Match::from((1, 2, 3)).as_tuple(), (1, 2, 3));
    assert_eq!(m.a_range(), 0..2);
}
