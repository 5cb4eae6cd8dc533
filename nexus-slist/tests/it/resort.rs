use nexus_slist::{SequenceRank, SlistError, SortConfig, SortedList, TextRank, Value, ValueKind};

use crate::helpers::{assert_sorted, assert_traversal};

fn words(list: &SortedList) -> Vec<String> {
    list.values()
        .filter_map(|v| v.as_text().map(str::to_owned))
        .collect()
}

#[test]
fn text_mode_change_reorders_text() {
    let mut list = SortedList::from_values(["bb", "a", "ccc", "ab"]).unwrap();
    assert_eq!(words(&list), ["a", "bb", "ab", "ccc"]);

    list.resort(ValueKind::Text, 1).unwrap();
    assert_eq!(words(&list), ["a", "ab", "bb", "ccc"]);
    assert_eq!(list.config().text, TextRank::CodePoints);
    assert_eq!(list.len(), 4);
    assert_traversal(&list);
    assert_sorted(&list);
}

#[test]
fn text_mode_change_leaves_numbers_in_place() {
    let mut list = SortedList::new();
    for v in [Value::from("zz"), Value::Int(1), Value::Int(2), Value::from("a")] {
        list.insert(v).unwrap();
    }
    assert_eq!(list.to_string(), "[1, 'a', 'zz', 2]");

    list.resort(ValueKind::Text, 2).unwrap();
    let numbers: Vec<String> = list
        .values()
        .filter(|v| v.kind() == ValueKind::Number)
        .map(ToString::to_string)
        .collect();
    assert_eq!(numbers, ["1", "2"]);
    assert_eq!(list.to_string(), "[1, 2, 'a', 'zz']");
}

#[test]
fn sequence_mode_change() {
    let mut list = SortedList::new();
    list.insert(vec![10]).unwrap();
    list.insert(vec![1, 2, 3]).unwrap();
    list.insert(vec![0, 0]).unwrap();
    assert_eq!(list.to_string(), "[[10], [0, 0], [1, 2, 3]]");

    list.resort(ValueKind::Sequence, 2).unwrap();
    assert_eq!(list.to_string(), "[[0, 0], [1, 2, 3], [10]]");
    assert_eq!(list.config().sequence, SequenceRank::Sum);

    list.resort(ValueKind::Sequence, 0).unwrap();
    assert_eq!(list.config(), SortConfig::default());
    assert_sorted(&list);
}

#[test]
fn later_inserts_use_the_new_mode() {
    let mut list = SortedList::from_values(["b"]).unwrap();
    list.set_text_rank(TextRank::CodePoints).unwrap();

    list.insert("aaaa").unwrap();
    assert_eq!(list.to_string(), "['aaaa', 'b']");
}

#[test]
fn invalid_mode_is_rejected_first() {
    let mut list = SortedList::from_values([1, 2]).unwrap();

    let err = list.resort(ValueKind::Number, 7).unwrap_err();
    assert_eq!(err, SlistError::InvalidSortMode { mode: 7 });
    assert!(err.is_sort_error());
}

#[test]
fn numbers_have_no_mode() {
    let mut list = SortedList::from_values([1, 2]).unwrap();

    let err = list.resort(ValueKind::Number, 0).unwrap_err();
    assert_eq!(
        err,
        SlistError::UnsupportedKindForSorting {
            kind: ValueKind::Number
        }
    );
    assert_eq!(list.to_string(), "[1, 2]");
}

#[test]
fn failed_resort_leaves_the_list_untouched() {
    let mut list = SortedList::new();
    list.insert(vec!["ab", "c"]).unwrap();
    list.insert("zzz").unwrap();
    list.resort(ValueKind::Sequence, 2).unwrap();
    let before = list.to_string();

    let err = list.resort(ValueKind::Text, 1).unwrap_err();
    assert!(matches!(err, SlistError::InvalidValueKind { .. }));
    assert_eq!(list.to_string(), before);
    assert_eq!(list.config().text, TextRank::Length);
    assert_traversal(&list);
}

#[test]
fn resort_keeps_nan_sequences_exactly_once() {
    let mut list = SortedList::new();
    list.insert(vec![f64::NAN]).unwrap();
    list.insert(vec![1, 2]).unwrap();
    let before = list.len();

    list.resort(ValueKind::Sequence, 1).unwrap();
    assert_eq!(list.len(), before);
    assert_eq!(list.to_string(), "[[nan], [1, 2]]");
    assert_traversal(&list);
}
