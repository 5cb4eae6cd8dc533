use nexus_slist::{SequenceRank, SlistError, SortConfig, SortedList, TextRank, Value};

use crate::helpers::{assert_sorted, assert_traversal, int_list, ints};

#[test]
fn every_insert_keeps_the_chain_sorted() {
    let mut list = SortedList::new();
    let input = [42, -7, 13, 0, 13, 99, -100, 5, 5, 1];

    for (i, v) in input.into_iter().enumerate() {
        list.insert(v).unwrap();
        assert_eq!(list.len(), i + 1);
        assert_traversal(&list);
        assert_sorted(&list);
    }

    let mut expected = input.to_vec();
    expected.sort();
    assert_eq!(ints(&list), expected.iter().map(|&v| i64::from(v)).collect::<Vec<_>>());
}

#[test]
fn out_of_order_input_renders_sorted() {
    let list = int_list(&[3, 1, 2]);
    assert_eq!(list.to_string(), "[1, 2, 3]");
}

#[test]
fn equal_ranks_keep_insertion_order() {
    let mut list = SortedList::new();
    list.insert(5).unwrap();
    list.insert(3).unwrap();
    list.insert(5.0).unwrap();
    list.insert(Value::Int(5)).unwrap();

    let rendered: Vec<String> = list.values().map(ToString::to_string).collect();
    assert_eq!(rendered, ["3", "5", "5.0", "5"]);
}

#[test]
fn mixed_kinds_interleave_by_rank() {
    let mut list = SortedList::new();
    list.insert("hello").unwrap();
    list.insert(vec![1, 2, 3]).unwrap();
    list.insert(4).unwrap();
    list.insert("").unwrap();

    // Ranks: 'hello' = 5, [1, 2, 3] = 3, 4, '' = 0
    assert_eq!(list.to_string(), "['', [1, 2, 3], 4, 'hello']");
    assert_traversal(&list);
}

#[test]
fn code_point_ranking_orders_text_alphabetically() {
    let config = SortConfig::new(TextRank::CodePoints, SequenceRank::Length);
    let mut list = SortedList::with_config(config);
    for word in ["pear", "apple", "fig", "apricot"] {
        list.insert(word).unwrap();
    }
    assert_eq!(list.to_string(), "['apple', 'apricot', 'fig', 'pear']");
}

#[test]
fn element_wise_sequences_compare_by_first_difference() {
    let config = SortConfig::new(TextRank::Length, SequenceRank::Elements);
    let mut list = SortedList::with_config(config);
    list.insert(vec![2, 0]).unwrap();
    list.insert(vec![1, 9, 9]).unwrap();
    list.insert(vec![1, 9]).unwrap();

    assert_eq!(list.to_string(), "[[1, 9], [1, 9, 9], [2, 0]]");
}

#[test]
fn unrankable_insert_is_rejected_without_change() {
    let config = SortConfig::new(TextRank::CodePoints, SequenceRank::Sum);
    let mut list = SortedList::with_config(config);
    list.insert(vec![1, 2]).unwrap();

    let err = list.insert(Value::Seq(vec![Value::from("ab")])).unwrap_err();
    assert!(matches!(err, SlistError::InvalidValueKind { .. }));
    assert_eq!(list.len(), 1);
    assert_traversal(&list);
}

#[test]
fn bulk_insert_places_each_value() {
    let mut host = int_list(&[10, 30]);
    let other = int_list(&[40, 20, 0]);

    host.insert_from(&other).unwrap();
    assert_eq!(ints(&host), vec![0, 10, 20, 30, 40]);
    assert_sorted(&host);
}

#[test]
fn bulk_insert_is_all_or_nothing() {
    let config = SortConfig::new(TextRank::CodePoints, SequenceRank::Sum);
    let mut host = SortedList::with_config(config);
    host.insert(1).unwrap();

    let mut other = SortedList::new();
    other.insert(2).unwrap();
    other.insert(Value::Seq(vec![Value::from("x")])).unwrap();

    assert!(host.insert_from(&other).is_err());
    assert_eq!(ints(&host), vec![1]);
}

#[test]
fn cloned_list_is_independent() {
    let mut a = int_list(&[1, 2, 3]);
    let b = a.clone();

    a.insert(0).unwrap();
    assert_eq!(ints(&a), vec![0, 1, 2, 3]);
    assert_eq!(ints(&b), vec![1, 2, 3]);
}

#[test]
fn seeding_from_values_and_another_list() {
    let other = SortedList::from_values(["bb", "a"]).unwrap();
    let mut list = SortedList::from_values([3, 0]).unwrap();
    list.insert_from(&other).unwrap();

    assert_eq!(list.to_string(), "[0, 'a', 'bb', 3]");
    assert_eq!(other.len(), 2);
    assert_traversal(&list);
}
