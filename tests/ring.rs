// tests/ring.rs
//
// Behaviour of the circular doubly-linked list through its public API.
//
use rstest::rstest;
use ucl_ledger::core::{CircularList, RingError};

/// Keyed record: equality looks at `key` only, like the stored teams.
#[derive(Clone, Debug)]
struct Rec {
    key: &'static str,
    rank: u32,
}

impl PartialEq for Rec {
    fn eq(&self, other: &Self) -> bool { self.key == other.key }
}

fn rec(key: &'static str, rank: u32) -> Rec { Rec { key, rank } }

fn keys(list: &CircularList<Rec>) -> Vec<&'static str> {
    list.iter().map(|r| r.key).collect()
}

#[rstest]
#[case::empty(vec![])]
#[case::one(vec![4])]
#[case::several(vec![3, 1, 4, 1, 5, 9, 2, 6])]
fn append_preserves_order_and_count(#[case] input: Vec<i32>) {
    let mut list = CircularList::new();
    for v in &input {
        list.push_back(*v);
    }
    assert_eq!(list.len(), input.len());
    assert_eq!(list.is_empty(), input.is_empty());
    assert_eq!(list.to_vec(), input);
}

#[test]
fn append_then_remove_returns_to_empty() {
    let mut list = CircularList::new();
    list.push_back(42);
    assert_eq!(list.remove(&42), Some(42));
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.to_vec().is_empty());
    assert_eq!(list.front(), None);
}

#[test]
fn remove_missing_value_is_not_found() {
    let mut list: CircularList<i32> = vec![1, 2, 3].into_iter().collect();
    assert_eq!(list.remove(&9), None);
    assert_eq!(list.len(), 3);

    let mut empty: CircularList<i32> = CircularList::new();
    assert_eq!(empty.remove(&1), None);
}

#[test]
fn removing_head_advances_head() {
    let mut list: CircularList<i32> = vec![10, 20, 30].into_iter().collect();
    assert_eq!(list.remove(&10), Some(10));
    assert_eq!(list.front(), Some(&20));
    assert_eq!(list.back(), Some(&30));
    assert_eq!(list.to_vec(), vec![20, 30]);
}

#[test]
fn removes_only_the_first_equal_element() {
    let mut list: CircularList<i32> = vec![1, 2, 1, 3].into_iter().collect();
    assert_eq!(list.remove(&1), Some(1));
    assert_eq!(list.to_vec(), vec![2, 1, 3]);
}

#[test]
fn contains_scans_every_node() {
    let list: CircularList<i32> = (1..=5).collect();
    assert!(list.contains(&1));
    assert!(list.contains(&5));
    assert!(!list.contains(&6));
    assert!(!CircularList::<i32>::new().contains(&1));
}

#[test]
fn update_refreshes_fields_outside_equality() {
    let mut list: CircularList<Rec> = vec![rec("a", 1), rec("b", 2)].into_iter().collect();

    assert!(list.update(rec("b", 99)));
    assert_eq!(list.get(1).unwrap().rank, 99);
    assert_eq!(list.len(), 2);

    assert!(!list.update(rec("zzz", 0)));
    assert_eq!(keys(&list), vec!["a", "b"]);
}

#[test]
fn get_matches_snapshot_and_rejects_out_of_range() {
    let list: CircularList<i32> = vec![7, 8, 9].into_iter().collect();
    let snap = list.to_vec();
    for (i, v) in snap.iter().enumerate() {
        assert_eq!(list.get(i), Ok(v));
    }
    assert_eq!(list.get(3), Err(RingError::IndexOutOfRange { index: 3, len: 3 }));

    let empty: CircularList<i32> = CircularList::new();
    assert_eq!(empty.get(0), Err(RingError::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn get_mut_edits_in_place() {
    let mut list: CircularList<i32> = vec![1, 2, 3].into_iter().collect();
    *list.get_mut(2).unwrap() = 30;
    assert_eq!(list.to_vec(), vec![1, 2, 30]);
    assert!(list.get_mut(5).is_err());
}

#[test]
fn sort_is_ordered_stable_and_a_permutation() {
    let input = vec![rec("a", 2), rec("b", 1), rec("c", 2), rec("d", 3), rec("e", 1), rec("f", 2)];
    let mut list: CircularList<Rec> = input.iter().cloned().collect();

    list.sort_by(|x, y| x.rank.cmp(&y.rank));

    let ranks: Vec<u32> = list.iter().map(|r| r.rank).collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    // Ties keep their input order.
    assert_eq!(keys(&list), vec!["b", "e", "a", "c", "f", "d"]);

    let mut before: Vec<_> = input.iter().map(|r| r.key).collect();
    let mut after = keys(&list);
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[rstest]
#[case::empty(vec![])]
#[case::one(vec![5])]
fn sort_of_trivial_ring_is_unchanged(#[case] input: Vec<i32>) {
    let mut list: CircularList<i32> = input.iter().copied().collect();
    list.sort_by(|a, b| b.cmp(a));
    assert_eq!(list.to_vec(), input);
}

#[test]
fn sort_then_mutate_keeps_ring_consistent() {
    let mut list: CircularList<i32> = vec![5, 3, 8, 1].into_iter().collect();
    list.sort_by(|a, b| a.cmp(b));
    list.push_back(0);
    list.remove(&3);
    assert_eq!(list.to_vec(), vec![1, 5, 8, 0]);
    let back: Vec<i32> = list.iter().rev().copied().collect();
    assert_eq!(back, vec![0, 8, 5, 1]);
}

#[test]
fn traversals_are_exact_reverses() {
    let list: CircularList<i32> = (0..6).collect();
    let mut fwd = Vec::new();
    let mut bwd = Vec::new();
    list.traverse_forward(|v| fwd.push(*v));
    list.traverse_backward(|v| bwd.push(*v));

    assert_eq!(fwd, vec![0, 1, 2, 3, 4, 5]);
    bwd.reverse();
    assert_eq!(fwd, bwd);
}

#[test]
fn traversal_of_empty_ring_visits_nothing() {
    let list: CircularList<i32> = CircularList::new();
    let mut visits = 0;
    list.traverse_forward(|_| visits += 1);
    list.traverse_backward(|_| visits += 1);
    assert_eq!(visits, 0);
}

#[test]
fn clear_empties_and_ring_is_reusable() {
    let mut list: CircularList<i32> = (0..4).collect();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.iter().count(), 0);
    list.push_back(9);
    assert_eq!(list.to_vec(), vec![9]);
}

#[test]
fn iterator_is_double_ended_and_exact() {
    let list: CircularList<i32> = (1..=4).collect();
    let mut it = list.iter();
    assert_eq!(it.len(), 4);
    assert_eq!(it.next(), Some(&1));
    assert_eq!(it.next_back(), Some(&4));
    assert_eq!(it.next(), Some(&2));
    assert_eq!(it.next_back(), Some(&3));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn find_mut_edits_matching_record() {
    let mut list: CircularList<Rec> = vec![rec("a", 1), rec("b", 2)].into_iter().collect();
    list.find_mut(|r| r.key == "a").unwrap().rank = 10;
    assert_eq!(list.get(0).unwrap().rank, 10);
    assert!(list.find_mut(|r| r.key == "x").is_none());
}

#[test]
fn debug_prints_as_list() {
    let list: CircularList<i32> = vec![1, 2].into_iter().collect();
    assert_eq!(format!("{:?}", list), "[1, 2]");
}

/// Append A, B, C; sort by a descending secondary key; remove B.
#[test]
fn scenario_append_sort_remove() {
    let mut list = CircularList::new();
    list.push_back(rec("A", 1));
    list.push_back(rec("B", 3));
    list.push_back(rec("C", 2));
    assert_eq!(keys(&list), vec!["A", "B", "C"]);

    list.sort_by(|x, y| y.rank.cmp(&x.rank));
    assert_eq!(keys(&list), vec!["B", "C", "A"]);

    // B is the head after sorting; removing it relocates the head.
    assert!(list.remove(&rec("B", 0)).is_some());
    assert_eq!(list.len(), 2);

    let mut seen = keys(&list);
    assert_eq!(seen, vec!["C", "A"]);
    seen.sort();
    assert_eq!(seen, vec!["A", "C"]);

    let back: Vec<_> = list.iter().rev().map(|r| r.key).collect();
    assert_eq!(back, vec!["A", "C"]);
}
