// src/core/merge.rs
//! Top-down merge sort over an owned `Vec`.
//!
//! Stable: on ties the element from the left half is taken first, so equal
//! elements keep their input order. O(n log n) comparisons, O(n) scratch.

use std::cmp::Ordering;

/// Sort `items` with `cmp`, returning the sorted vector.
pub fn merge_sort_by<T, F>(items: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_rec(items, &mut cmp)
}

fn sort_rec<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 { return items; }

    let middle = items.len() / 2;
    let right = items.split_off(middle);

    let left = sort_rec(items, cmp);
    let right = sort_rec(right, cmp);
    merge(left, right, cmp)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        if let Some(v) = next { out.push(v); }
    }

    // One side is exhausted; the rest of the other is already sorted.
    out.extend(left);
    out.extend(right);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_keeps_ties_in_order() {
        let input = vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')];
        let out = merge_sort_by(input, |a, b| a.0.cmp(&b.0));
        assert_eq!(out, vec![(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')]);
    }

    #[test]
    fn trivial_inputs() {
        let empty: Vec<i32> = merge_sort_by(Vec::new(), |a, b| a.cmp(b));
        assert!(empty.is_empty());
        assert_eq!(merge_sort_by(vec![7], |a, b| a.cmp(b)), vec![7]);
    }
}
