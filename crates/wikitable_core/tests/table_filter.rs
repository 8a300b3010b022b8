use std::collections::BTreeSet;

use wikitable_core::{parse_ordinals, OrdinalParseError, TableDecision, TableFilter};

fn set(values: &[usize]) -> BTreeSet<usize> {
    values.iter().copied().collect()
}

#[test]
fn no_lists_emit_everything() {
    let filter = TableFilter::default();
    let kept: Vec<_> = filter.apply(["a", "b", "c"]).into_iter().map(|(n, _)| n).collect();
    assert_eq!(kept, vec![1, 2, 3]);
}

#[test]
fn exclude_drops_only_named_ordinals() {
    let filter = TableFilter::new(set(&[]), set(&[2]));
    let kept = filter.apply(["a", "b", "c"]);
    assert_eq!(kept, vec![(1, "a"), (3, "c")]);
    assert_eq!(filter.decide(2), TableDecision::Excluded);
}

#[test]
fn include_keeps_only_named_ordinals() {
    let filter = TableFilter::new(set(&[2]), set(&[]));
    assert_eq!(filter.apply(["a", "b", "c"]), vec![(2, "b")]);
    assert_eq!(filter.decide(1), TableDecision::NotIncluded);
    assert_eq!(filter.decide(3), TableDecision::NotIncluded);
}

#[test]
fn exclude_wins_over_include() {
    let filter = TableFilter::new(set(&[1, 2]), set(&[2]));
    assert_eq!(filter.apply(["a", "b", "c"]), vec![(1, "a")]);
    assert_eq!(filter.decide(2), TableDecision::Excluded);
}

#[test]
fn ordinals_out_of_range_are_harmless() {
    let filter = TableFilter::new(set(&[9]), set(&[]));
    assert!(filter.apply(["a", "b"]).is_empty());
}

#[test]
fn ordinal_lists_parse() {
    assert_eq!(parse_ordinals("").unwrap(), set(&[]));
    assert_eq!(parse_ordinals("1,3").unwrap(), set(&[1, 3]));
    assert_eq!(parse_ordinals(" 2 ,,2,5").unwrap(), set(&[2, 5]));
}

#[test]
fn bad_ordinals_are_errors() {
    assert_eq!(
        parse_ordinals("1,x").unwrap_err(),
        OrdinalParseError::NotANumber("x".to_string())
    );
    assert_eq!(parse_ordinals("0").unwrap_err(), OrdinalParseError::Zero);
    assert!(parse_ordinals("-1").is_err());
}
