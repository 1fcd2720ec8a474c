use crate::algorithms::matched_len;
use crate::{DiffOp, Match};

/// Normalizes a number of matched elements to the range `0..=1`.
///
/// The result is `2 * matches / total_len`, or `1.0` if both sequences
/// are empty.
pub fn normalized_ratio(matches: usize, total_len: usize) -> f32 {
    if total_len == 0 {
        1.0
    } else {
        2.0 * matches as f32 / total_len as f32
    }
}

/// Return a measure of similarity in the range `0..=1`.
///
/// A ratio of `1.0` means the two sequences are a complete match, a
/// ratio of `0.0` would indicate completely distinct sequences.  The input
/// is the list of matching blocks and the length of the old and new
/// sequence.
pub fn get_diff_ratio(blocks: &[Match], old_len: usize, new_len: usize) -> f32 {
    normalized_ratio(matched_len(blocks), old_len + new_len)
}

/// Isolate change clusters by eliminating ranges with no changes.
///
/// Every returned group is one hunk with at most `n` elements of equal
/// context on either side.  Equal runs longer than `2 * n` split two
/// hunks.  Without any change nothing is returned.
pub fn group_diff_ops(mut ops: Vec<DiffOp>, n: usize) -> Vec<Vec<DiffOp>> {
    if ops.is_empty() {
        ops.push(DiffOp::Equal {
            old_index: 0,
            new_index: 0,
            len: 1,
        });
    }

    let mut pending_group = Vec::new();
    let mut rv = Vec::new();

    if let Some(DiffOp::Equal {
        old_index,
        new_index,
        len,
    }) = ops.first_mut()
    {
        let offset = (*len).saturating_sub(n);
        *old_index += offset;
        *new_index += offset;
        *len -= offset;
    }

    if let Some(DiffOp::Equal { len, .. }) = ops.last_mut() {
        *len -= (*len).saturating_sub(n);
    }

    for op in ops.into_iter() {
        if let DiffOp::Equal {
            old_index,
            new_index,
            len,
        } = op
        {
            if len > n * 2 {
                pending_group.push(DiffOp::Equal {
                    old_index,
                    new_index,
                    len: n,
                });
                rv.push(pending_group);
                let offset = len.saturating_sub(n);
                pending_group = vec![DiffOp::Equal {
                    old_index: old_index + offset,
                    new_index: new_index + offset,
                    len: len - offset,
                }];
                continue;
            }
        }
        pending_group.push(op);
    }

    match &pending_group[..] {
        &[] | &[DiffOp::Equal { .. }] => {}
        _ => rv.push(pending_group),
    }

    rv
}

#[cfg(test)]
fn equal(old_index: usize, new_index: usize, len: usize) -> DiffOp {
    DiffOp::Equal {
        old_index,
        new_index,
        len,
    }
}

#[test]
fn test_ratio() {
    let blocks = [Match::new(1, 0, 3), Match::new(4, 4, 0)];
    assert_eq!(get_diff_ratio(&blocks, 4, 4), 0.75);
    assert_eq!(get_diff_ratio(&[Match::new(0, 0, 0)], 0, 0), 1.0);
    assert_eq!(get_diff_ratio(&[Match::new(3, 2, 0)], 3, 2), 0.0);
}

#[test]
fn test_group_no_changes() {
    assert_eq!(group_diff_ops(vec![], 3), Vec::<Vec<DiffOp>>::new());
    assert_eq!(
        group_diff_ops(vec![equal(0, 0, 40)], 3),
        Vec::<Vec<DiffOp>>::new()
    );
}

#[test]
fn test_group_trims_context() {
    let ops = vec![
        equal(0, 0, 10),
        DiffOp::Replace {
            old_index: 10,
            old_len: 1,
            new_index: 10,
            new_len: 2,
        },
        equal(11, 12, 10),
    ];
    let groups = group_diff_ops(ops, 3)
        .into_iter()
        .map(|g| g.iter().map(|op| op.as_opcode()).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    insta::assert_debug_snapshot!(groups, @r###"
    [
        [
            (
                Equal,
                7,
                10,
                7,
                10,
            ),
            (
                Replace,
                10,
                11,
                10,
                12,
            ),
            (
                Equal,
                11,
                14,
                12,
                15,
            ),
        ],
    ]
    "###);
}

#[test]
fn test_group_splits_long_equal_runs() {
    use crate::DiffTag::*;

    let ops = vec![
        DiffOp::Delete {
            old_index: 0,
            old_len: 1,
            new_index: 0,
        },
        equal(1, 0, 20),
        DiffOp::Insert {
            old_index: 21,
            new_index: 20,
            new_len: 2,
        },
    ];
    let groups = group_diff_ops(ops, 2)
        .into_iter()
        .map(|g| g.iter().map(|op| op.as_opcode()).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    assert_eq!(
        groups,
        vec![
            vec![(Delete, 0, 1, 0, 0), (Equal, 1, 3, 0, 2)],
            vec![(Equal, 19, 21, 18, 20), (Insert, 21, 21, 20, 22)],
        ]
    );
}

#[test]
fn test_group_keeps_short_equal_runs() {
    let ops = vec![
        DiffOp::Delete {
            old_index: 0,
            old_len: 1,
            new_index: 0,
        },
        equal(1, 0, 6),
        DiffOp::Delete {
            old_index: 7,
            old_len: 1,
            new_index: 6,
        },
    ];
    let groups = group_diff_ops(ops.clone(), 3);
    assert_eq!(groups, vec![ops]);
}
