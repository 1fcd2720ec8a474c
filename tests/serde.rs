#![cfg(feature = "serde")]

use gestalt::{CloseMatchConfig, DiffOp, Match, MatcherConfig, SequenceMatcher};
use serde_json::json;

#[test]
fn test_serialize_opcodes() {
    let a = "qabxcd".chars().collect::<Vec<_>>();
    let b = "abycdf".chars().collect::<Vec<_>>();
    let m = SequenceMatcher::new(&a, &b);
    let ops = serde_json::to_value(m.get_opcodes()).unwrap();
    assert_eq!(
        ops[0],
        json!({"op": "delete", "old_index": 0, "old_len": 1, "new_index": 0})
    );
    assert_eq!(
        ops[2],
        json!({"op": "replace", "old_index": 3, "old_len": 1, "new_index": 2, "new_len": 1})
    );
    let back: Vec<DiffOp> = serde_json::from_value(ops).unwrap();
    assert_eq!(back, m.get_opcodes());

    let blocks = serde_json::to_value(m.get_matching_blocks()).unwrap();
    assert_eq!(blocks[2], json!({"a": 6, "b": 6, "size": 0}));
    let back: Vec<Match> = serde_json::from_value(blocks).unwrap();
    assert_eq!(back, m.get_matching_blocks());
}

#[test]
fn test_deserialize_configs() {
    let config: MatcherConfig = serde_json::from_str(r#"{"auto_junk": false}"#).unwrap();
    let mut expected = MatcherConfig::default();
    expected.auto_junk(false);
    assert_eq!(config, expected);

    let config: CloseMatchConfig = serde_json::from_str(r#"{"n": 5, "cutoff": 0.8}"#).unwrap();
    let mut expected = CloseMatchConfig::default();
    expected.max_matches(5).cutoff(0.8);
    assert_eq!(config, expected);
}

#[test]
fn test_reject_unknown_options() {
    let err = serde_json::from_str::<MatcherConfig>(r#"{"isjunk": null}"#).unwrap_err();
    assert!(err.to_string().contains("unknown field `isjunk`"));
    assert!(serde_json::from_str::<CloseMatchConfig>(r#"{"limit": 3}"#).is_err());
}
