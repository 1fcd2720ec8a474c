use gestalt::algorithms::matched_len;
use gestalt::{
    get_close_matches, CloseMatchConfig, DiffOp, DiffTag, ElementCounts, Error, Match,
    SequenceMatcher,
};
use proptest::prelude::*;

fn small_seq() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..6, 0..40)
}

fn long_seq() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![9 => Just(0u8), 1 => 1u8..50], 180..260)
}

fn assert_blocks_valid(blocks: &[Match], a: &[u8], b: &[u8]) {
    let (last, rest) = blocks.split_last().expect("sentinel missing");
    assert_eq!(*last, Match::new(a.len(), b.len(), 0));
    for block in rest {
        assert!(block.size > 0);
        assert_eq!(a[block.a_range()], b[block.b_range()]);
    }
    for pair in blocks.windows(2) {
        assert!(pair[0].a + pair[0].size <= pair[1].a);
        assert!(pair[0].b + pair[0].size <= pair[1].b);
        if pair[1].size > 0 {
            assert!(!pair[0].is_adjacent_to(&pair[1]));
        }
    }
}

fn assert_opcodes_contiguous(ops: &[DiffOp], a: &[u8], b: &[u8]) {
    let mut i = 0;
    let mut j = 0;
    for op in ops {
        let (tag, old, new) = op.as_tag_tuple();
        assert_eq!((old.start, new.start), (i, j));
        match tag {
            DiffTag::Equal => assert_eq!(a[old.clone()], b[new.clone()]),
            DiffTag::Delete => assert!(!old.is_empty() && new.is_empty()),
            DiffTag::Insert => assert!(old.is_empty() && !new.is_empty()),
            DiffTag::Replace => assert!(!old.is_empty() && !new.is_empty()),
        }
        i = old.end;
        j = new.end;
    }
    assert_eq!((i, j), (a.len(), b.len()));
}

proptest! {
    #[test]
    fn test_ratio_ordering(a in small_seq(), b in small_seq()) {
        let m = SequenceMatcher::new(&a, &b);
        prop_assert!(m.real_quick_ratio() >= m.quick_ratio());
        prop_assert!(m.quick_ratio() >= m.ratio());
        prop_assert!(m.ratio() >= 0.0 && m.ratio() <= 1.0);
    }

    #[test]
    fn test_ratio_ordering_with_popular(a in long_seq(), b in long_seq()) {
        let m = SequenceMatcher::new(&a, &b);
        prop_assert!(m.real_quick_ratio() >= m.quick_ratio());
        prop_assert!(m.quick_ratio() >= m.ratio());
    }

    #[test]
    fn test_ratio_is_matched_share(a in small_seq(), b in small_seq()) {
        let m = SequenceMatcher::new(&a, &b);
        let matched = matched_len(&m.get_matching_blocks());
        let total = a.len() + b.len();
        let expected = if total == 0 { 1.0 } else { 2.0 * matched as f32 / total as f32 };
        prop_assert_eq!(m.ratio(), expected);
    }

    #[test]
    fn test_identity(a in small_seq()) {
        let m = SequenceMatcher::new(&a, &a);
        prop_assert_eq!(m.ratio(), 1.0);
        prop_assert_eq!(matched_len(&m.get_matching_blocks()), a.len());
        prop_assert!(m.grouped_opcodes().is_empty());
    }

    #[test]
    fn test_matching_blocks_valid(a in small_seq(), b in small_seq()) {
        let m = SequenceMatcher::new(&a, &b);
        assert_blocks_valid(&m.get_matching_blocks(), &a, &b);
    }

    #[test]
    fn test_matching_blocks_valid_with_junk(a in long_seq(), b in long_seq()) {
        let m = SequenceMatcher::with_junk(&a, &b, |x: &u8| *x == 1);
        assert_blocks_valid(&m.get_matching_blocks(), &a, &b);
    }

    #[test]
    fn test_opcodes_contiguous(a in small_seq(), b in small_seq()) {
        let m = SequenceMatcher::new(&a, &b);
        assert_opcodes_contiguous(&m.get_opcodes(), &a, &b);
    }

    #[test]
    fn test_longest_match_in_range(
        a in small_seq(),
        b in small_seq(),
        bounds in (0usize..40, 0usize..40, 0usize..40, 0usize..40),
    ) {
        let alo = bounds.0.min(a.len());
        let ahi = bounds.1.min(a.len()).max(alo);
        let blo = bounds.2.min(b.len());
        let bhi = bounds.3.min(b.len()).max(blo);
        let m = SequenceMatcher::new(&a, &b).find_longest_match(alo..ahi, blo..bhi);
        if m.size == 0 {
            prop_assert_eq!(m, Match::new(alo, blo, 0));
        } else {
            prop_assert!(alo <= m.a && m.a + m.size <= ahi);
            prop_assert!(blo <= m.b && m.b + m.size <= bhi);
            prop_assert_eq!(&a[m.a_range()], &b[m.b_range()]);
        }
    }

    #[test]
    fn test_grouped_opcodes_bounded(a in small_seq(), b in small_seq(), n in 0usize..5) {
        let groups = SequenceMatcher::new(&a, &b).get_grouped_opcodes(n);
        for group in &groups {
            prop_assert!(group.iter().any(|op| op.tag() != DiffTag::Equal));
            for op in group {
                if op.tag() == DiffTag::Equal {
                    prop_assert!(op.old_range().len() <= 2 * n);
                }
            }
            if let Some(first) = group.first() {
                if first.tag() == DiffTag::Equal {
                    prop_assert!(first.old_range().len() <= n);
                }
            }
            if let Some(last) = group.last() {
                if last.tag() == DiffTag::Equal {
                    prop_assert!(last.old_range().len() <= n);
                }
            }
        }
    }

    #[test]
    fn test_quick_ratio_with_precomputed_counts(a in small_seq(), b in small_seq()) {
        let counts = ElementCounts::new(&b);
        let m = SequenceMatcher::new(&a, &b);
        prop_assert_eq!(m.quick_ratio_with(&counts), m.quick_ratio());
    }

    #[test]
    fn test_close_matches_honor_cutoff(
        word in small_seq(),
        possibilities in prop::collection::vec(small_seq(), 0..10),
        cutoff in 0.0f32..=1.0,
        n in 1usize..5,
    ) {
        let mut config = CloseMatchConfig::default();
        config.max_matches(n).cutoff(cutoff);
        let matches = get_close_matches(&word, &possibilities, &config).unwrap();
        prop_assert!(matches.len() <= n);
        let ratios = matches
            .iter()
            .map(|x| SequenceMatcher::new(x.as_slice(), &word[..]).ratio())
            .collect::<Vec<_>>();
        for pair in ratios.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
        for ratio in ratios {
            prop_assert!(ratio >= cutoff);
        }
    }
}

#[test]
fn test_scenario_opcodes() {
    let a = "qabxcd".chars().collect::<Vec<_>>();
    let b = "abycdf".chars().collect::<Vec<_>>();
    let ops = SequenceMatcher::new(&a, &b)
        .get_opcodes()
        .iter()
        .map(|op| op.as_opcode())
        .collect::<Vec<_>>();
    assert_eq!(
        ops,
        vec![
            (DiffTag::Delete, 0, 1, 0, 0),
            (DiffTag::Equal, 1, 3, 0, 2),
            (DiffTag::Replace, 3, 4, 2, 3),
            (DiffTag::Equal, 4, 6, 3, 5),
            (DiffTag::Insert, 6, 6, 5, 6),
        ]
    );
}

#[test]
fn test_scenario_ratio() {
    let a = "abcd".chars().collect::<Vec<_>>();
    let b = "bcde".chars().collect::<Vec<_>>();
    assert_eq!(SequenceMatcher::new(&a, &b).ratio(), 0.75);
    let empty: Vec<char> = vec![];
    assert_eq!(SequenceMatcher::new(&empty, &empty).ratio(), 1.0);
}

#[test]
fn test_scenario_longest_match_with_junk() {
    let a = " abcd".chars().collect::<Vec<_>>();
    let b = "abcd abcd".chars().collect::<Vec<_>>();
    let m = SequenceMatcher::with_junk(&a, &b, |c: &char| *c == ' ');
    assert_eq!(m.find_longest_match(0..5, 0..9), Match::new(1, 0, 4));
}

#[test]
fn test_scenario_matching_blocks() {
    let a = "abxcd".chars().collect::<Vec<_>>();
    let b = "abcd".chars().collect::<Vec<_>>();
    assert_eq!(
        SequenceMatcher::new(&a, &b).get_matching_blocks(),
        vec![Match::new(0, 0, 2), Match::new(3, 2, 2), Match::new(5, 4, 0)]
    );
}

#[test]
fn test_scenario_close_matches() {
    let word = "appel".chars().collect::<Vec<_>>();
    let possibilities = ["ape", "apple", "peach", "puppy"]
        .iter()
        .map(|x| x.chars().collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let matches = get_close_matches(&word, &possibilities, &CloseMatchConfig::default()).unwrap();
    let matches = matches
        .into_iter()
        .map(|x| x.iter().collect::<String>())
        .collect::<Vec<_>>();
    assert_eq!(matches, vec!["apple", "ape"]);
}

#[test]
fn test_close_matches_invalid_arguments() {
    let word = [1u8, 2, 3];
    let possibilities = [vec![1u8, 2, 3]];
    let mut config = CloseMatchConfig::default();
    config.max_matches(0);
    assert_eq!(
        get_close_matches(&word, &possibilities, &config),
        Err(Error::InvalidMaxMatches)
    );
    let mut config = CloseMatchConfig::default();
    config.cutoff(-0.5);
    assert_eq!(
        get_close_matches(&word, &possibilities, &config),
        Err(Error::InvalidCutoff(-0.5))
    );
}

#[test]
fn test_heterogeneous_elements_never_match() {
    #[derive(Debug, PartialEq, Eq, Hash)]
    enum Value {
        Int(i64),
        Str(&'static str),
    }

    let a = [Value::Int(1), Value::Int(2)];
    let b = [Value::Str("1"), Value::Str("2")];
    let m = SequenceMatcher::new(&a, &b);
    assert_eq!(m.ratio(), 0.0);
    assert_eq!(m.get_matching_blocks(), vec![Match::new(2, 2, 0)]);
}
