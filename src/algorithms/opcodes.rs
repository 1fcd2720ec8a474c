use std::convert::Infallible;
use std::ops::Range;

use crate::algorithms::DiffHook;
use crate::{DiffOp, DiffTag, Match};

/// A [`DiffHook`] that collects the reported opcodes.
///
/// Replacements are kept as a single [`DiffOp::Replace`] rather than split
/// into a deletion and an insertion.
#[derive(Default, Clone, Debug)]
pub struct Capture(Vec<DiffOp>);

impl Capture {
    /// Creates a new capture hook.
    pub fn new() -> Capture {
        Capture::default()
    }

    /// Converts the capture hook into the collected ops.
    pub fn into_ops(self) -> Vec<DiffOp> {
        self.0
    }

    /// Accesses the collected ops.
    pub fn ops(&self) -> &[DiffOp] {
        &self.0
    }

    fn push(
        &mut self,
        tag: DiffTag,
        old: Range<usize>,
        new: Range<usize>,
    ) -> Result<(), Infallible> {
        self.0.push(DiffOp::from_tag_tuple(tag, old, new));
        Ok(())
    }
}

impl DiffHook for Capture {
    type Error = Infallible;

    fn equal(&mut self, old_index: usize, new_index: usize, len: usize) -> Result<(), Infallible> {
        self.push(
            DiffTag::Equal,
            old_index..old_index + len,
            new_index..new_index + len,
        )
    }

    fn delete(
        &mut self,
        old_index: usize,
        old_len: usize,
        new_index: usize,
    ) -> Result<(), Infallible> {
        self.push(
            DiffTag::Delete,
            old_index..old_index + old_len,
            new_index..new_index,
        )
    }

    fn insert(
        &mut self,
        old_index: usize,
        new_index: usize,
        new_len: usize,
    ) -> Result<(), Infallible> {
        self.push(
            DiffTag::Insert,
            old_index..old_index,
            new_index..new_index + new_len,
        )
    }

    fn replace(
        &mut self,
        old_index: usize,
        old_len: usize,
        new_index: usize,
        new_len: usize,
    ) -> Result<(), Infallible> {
        self.push(
            DiffTag::Replace,
            old_index..old_index + old_len,
            new_index..new_index + new_len,
        )
    }
}

/// Reports the edit script described by `blocks` to a [`DiffHook`].
///
/// `blocks` must be sorted and terminated by the zero sized sentinel as
/// returned by [`get_matching_blocks`](crate::algorithms::get_matching_blocks).
/// The gap before each block becomes a replace, delete or insert depending
/// on which sequences have a gap; every non empty block becomes an equal.
pub fn emit_opcodes<D: DiffHook>(d: &mut D, blocks: &[Match]) -> Result<(), D::Error> {
    let mut i = 0;
    let mut j = 0;
    for block in blocks {
        match (i < block.a, j < block.b) {
            (true, true) => d.replace(i, block.a - i, j, block.b - j)?,
            (true, false) => d.delete(i, block.a - i, j)?,
            (false, true) => d.insert(i, j, block.b - j)?,
            (false, false) => {}
        }
        if block.size > 0 {
            d.equal(block.a, block.b, block.size)?;
        }
        i = block.a + block.size;
        j = block.b + block.size;
    }
    d.finish()
}

/// Converts matching blocks into a list of [`DiffOp`]s.
///
/// The ops are contiguous: the first starts at `(0, 0)`, every op starts
/// where the previous one ended and the last one ends at the lengths of
/// both sequences.  Two empty sequences produce no ops at all.
pub fn capture_opcodes(blocks: &[Match]) -> Vec<DiffOp> {
    let mut d = Capture::new();
    match emit_opcodes(&mut d, blocks) {
        Ok(()) => d.into_ops(),
        Err(never) => match never {},
    }
}

#[test]
fn test_opcodes() {
    use crate::DiffTag::*;

    let blocks = vec![
        Match::new(1, 0, 2),
        Match::new(4, 3, 2),
        Match::new(6, 6, 0),
    ];
    let ops = capture_opcodes(&blocks)
        .iter()
        .map(|op| op.as_opcode())
        .collect::<Vec<_>>();
    assert_eq!(
        ops,
        vec![
            (Delete, 0, 1, 0, 0),
            (Equal, 1, 3, 0, 2),
            (Replace, 3, 4, 2, 3),
            (Equal, 4, 6, 3, 5),
            (Insert, 6, 6, 5, 6),
        ]
    );
}

#[test]
fn test_sentinel_only() {
    assert_eq!(capture_opcodes(&[Match::new(0, 0, 0)]), vec![]);
    assert_eq!(
        capture_opcodes(&[Match::new(2, 3, 0)]),
        vec![DiffOp::Replace {
            old_index: 0,
            old_len: 2,
            new_index: 0,
            new_len: 3,
        }]
    );
}

#[test]
fn test_custom_hook() {
    struct D(Vec<String>);
    impl DiffHook for D {
        type Error = ();
        fn equal(&mut self, o: usize, n: usize, len: usize) -> Result<(), ()> {
            self.0.push(format!("equal {:?} {:?} {:?}", o, n, len));
            Ok(())
        }
        fn delete(&mut self, o: usize, len: usize, new: usize) -> Result<(), ()> {
            self.0.push(format!("delete {:?} {:?} {:?}", o, len, new));
            Ok(())
        }
        fn insert(&mut self, o: usize, n: usize, len: usize) -> Result<(), ()> {
            self.0.push(format!("insert {:?} {:?} {:?}", o, n, len));
            Ok(())
        }
        fn finish(&mut self) -> Result<(), ()> {
            self.0.push("finish".into());
            Ok(())
        }
    }

    // no replace override, so the default splits it into delete + insert
    let mut d = D(Vec::new());
    emit_opcodes(&mut d, &[Match::new(1, 1, 2), Match::new(3, 4, 0)]).unwrap();
    insta::assert_debug_snapshot!(&d.0, @r###"
    [
        "delete 0 1 0",
        "insert 1 0 1",
        "equal 1 1 2",
        "insert 3 3 1",
        "finish",
    ]
    "###);
}

#[test]
fn test_capture_keeps_replace() {
    let mut d = Capture::new();
    d.replace(3, 1, 2, 2).unwrap();
    d.delete(4, 2, 4).unwrap();
    assert_eq!(
        d.ops().iter().map(|op| op.as_opcode()).collect::<Vec<_>>(),
        vec![(DiffTag::Replace, 3, 4, 2, 4), (DiffTag::Delete, 4, 6, 4, 4)]
    );
    assert_eq!(d.into_ops().len(), 2);
}
