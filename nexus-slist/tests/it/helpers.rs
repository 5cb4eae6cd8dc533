use nexus_slist::{SortedList, Value};

/// Builds a list from integers, inserted in the given order.
pub fn int_list(values: &[i64]) -> SortedList {
    SortedList::from_values(values.iter().copied()).unwrap()
}

/// Collects the integer elements of a list, panicking on other kinds.
pub fn ints(list: &SortedList) -> Vec<i64> {
    list.values()
        .map(|v| match v {
            Value::Int(i) => *i,
            other => panic!("expected an int element, got {other:?}"),
        })
        .collect()
}

/// Asserts that forward and backward traversal agree with `len`.
pub fn assert_traversal(list: &SortedList) {
    let forward: Vec<&Value> = list.values().collect();
    let mut backward: Vec<&Value> = list.values().rev().collect();
    backward.reverse();

    assert_eq!(forward.len(), list.len());
    assert_eq!(backward.len(), list.len());
    assert_eq!(forward, backward);
    assert_eq!(list.front().map(|n| n.value()), forward.first().copied());
    assert_eq!(list.back().map(|n| n.value()), forward.last().copied());
}

/// Asserts that no element ranks strictly below its predecessor.
pub fn assert_sorted(list: &SortedList) {
    let config = list.config();
    let values: Vec<&Value> = list.values().collect();
    for pair in values.windows(2) {
        let prev = config.rank(pair[0]).unwrap();
        let next = config.rank(pair[1]).unwrap();
        assert!(
            !next.precedes(&prev),
            "{} is ranked before {} in {list}",
            pair[0],
            pair[1]
        );
    }
}
