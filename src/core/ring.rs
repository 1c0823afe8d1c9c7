// src/core/ring.rs
//! Circular doubly-linked list.
//!
//! The tail links forward to the head and the head links back to the tail.
//! Nodes live in an index arena: a `Vec` of slots, each either holding a node
//! or vacant and threaded onto a free list. Links are slot indices, so the list
//! is the single owner of every value and removal never leaves a dangling link.
//!
//! Invariants (non-empty list):
//! - following `next` exactly `len` times from any node returns to that node;
//! - `prev` is the exact inverse of `next` for every adjacent pair;
//! - occupied slots == `len`; every vacant slot is on the free list.
//!
//! Empty list: `head == None`, `len == 0`.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use super::merge::merge_sort_by;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RingError {
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for ring of length {len}")
            }
        }
    }
}

impl std::error::Error for RingError {}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    next: usize,
    prev: usize,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

#[derive(Clone)]
pub struct CircularList<T> {
    slots: Vec<Slot<T>>,
    /// Most recently vacated slot; reused first.
    free: Option<usize>,
    head: Option<usize>,
    len: usize,
}

impl<T> Default for CircularList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> CircularList<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new(), free: None, head: None, len: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), free: None, head: None, len: 0 }
    }

    #[inline] pub fn is_empty(&self) -> bool { self.len == 0 }
    #[inline] pub fn len(&self) -> usize { self.len }

    /* ---------------- Arena plumbing ---------------- */

    fn node(&self, ix: usize) -> &Node<T> {
        match &self.slots[ix] {
            Slot::Occupied(n) => n,
            Slot::Vacant { .. } => unreachable!("ring link points at vacant slot {ix}"),
        }
    }

    fn node_mut(&mut self, ix: usize) -> &mut Node<T> {
        match &mut self.slots[ix] {
            Slot::Occupied(n) => n,
            Slot::Vacant { .. } => unreachable!("ring link points at vacant slot {ix}"),
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(ix) => {
                if let Slot::Vacant { next_free } = &self.slots[ix] {
                    self.free = *next_free;
                }
                self.slots[ix] = Slot::Occupied(node);
                ix
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, ix: usize) -> T {
        let slot = mem::replace(&mut self.slots[ix], Slot::Vacant { next_free: self.free });
        self.free = Some(ix);
        match slot {
            Slot::Occupied(n) => n.value,
            Slot::Vacant { .. } => unreachable!("released vacant slot {ix}"),
        }
    }

    /// Slot index of the first value (from head, following `next`) matching `pred`.
    fn position<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let head = self.head?;
        let mut cur = head;
        loop {
            let n = self.node(cur);
            if pred(&n.value) { return Some(cur); }
            cur = n.next;
            if cur == head { return None; }
        }
    }

    fn slot_at(&self, index: usize) -> Result<usize, RingError> {
        let head = match self.head {
            Some(h) if index < self.len => h,
            _ => return Err(RingError::IndexOutOfRange { index, len: self.len }),
        };
        let mut cur = head;
        for _ in 0..index {
            cur = self.node(cur).next;
        }
        Ok(cur)
    }

    /// Move every value out in forward order, leaving the list empty.
    fn take_all(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut slots = mem::take(&mut self.slots);

        if let Some(head) = self.head {
            let mut cur = head;
            loop {
                let slot = mem::replace(&mut slots[cur], Slot::Vacant { next_free: None });
                match slot {
                    Slot::Occupied(n) => {
                        out.push(n.value);
                        cur = n.next;
                    }
                    Slot::Vacant { .. } => break,
                }
                if cur == head { break; }
            }
        }

        self.clear();
        out
    }

    /* ---------------- Public API ---------------- */

    /// Append at the logical end: the new node becomes the tail (head's `prev`).
    pub fn push_back(&mut self, value: T) {
        match self.head {
            None => {
                let ix = self.alloc(Node { value, next: 0, prev: 0 });
                let n = self.node_mut(ix);
                n.next = ix;
                n.prev = ix;
                self.head = Some(ix);
            }
            Some(head) => {
                let tail = self.node(head).prev;
                let ix = self.alloc(Node { value, next: head, prev: tail });
                self.node_mut(tail).next = ix;
                self.node_mut(head).prev = ix;
            }
        }
        self.len += 1;
    }

    /// Replace the first stored value equal to `value` with `value`.
    /// Returns `false` if no element matched.
    pub fn update(&mut self, value: T) -> bool
    where
        T: PartialEq,
    {
        // NOTE: matching is by `==`, so under full-value equality the stored value
        // is already identical and this is a no-op. It only refreshes fields that
        // `PartialEq` ignores (records compared by a key). Likely unintended, kept as is.
        match self.position(|v| *v == value) {
            Some(ix) => {
                self.node_mut(ix).value = value;
                true
            }
            None => false,
        }
    }

    /// Unlink and return the first element equal to `value`.
    /// If it was the head, head advances to the next node.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let ix = self.position(|v| v == value)?;

        if self.len == 1 {
            let v = self.release(ix);
            self.clear();
            return Some(v);
        }

        let (next, prev) = {
            let n = self.node(ix);
            (n.next, n.prev)
        };
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
        if self.head == Some(ix) {
            self.head = Some(next);
        }

        self.len -= 1;
        Some(self.release(ix))
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(|v| v == value).is_some()
    }

    /// 0-based forward lookup from head.
    pub fn get(&self, index: usize) -> Result<&T, RingError> {
        let ix = self.slot_at(index)?;
        Ok(&self.node(ix).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, RingError> {
        let ix = self.slot_at(index)?;
        Ok(&mut self.node_mut(ix).value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|h| &self.node(h).value)
    }

    pub fn back(&self) -> Option<&T> {
        self.head.map(|h| &self.node(self.node(h).prev).value)
    }

    pub fn find<F>(&self, pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.position(pred).map(|ix| &self.node(ix).value)
    }

    pub fn find_mut<F>(&mut self, pred: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        let ix = self.position(pred)?;
        Some(&mut self.node_mut(ix).value)
    }

    /// Snapshot in forward order starting at head.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Stable top-down merge sort on a snapshot; the ring is rebuilt from the result.
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len <= 1 { return; }
        let snapshot = self.take_all();
        let sorted = merge_sort_by(snapshot, cmp);
        self.extend(sorted);
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.len = 0;
    }

    pub fn traverse_forward<F: FnMut(&T)>(&self, visit: F) {
        self.iter().for_each(visit);
    }

    pub fn traverse_backward<F: FnMut(&T)>(&self, visit: F) {
        self.iter().rev().for_each(visit);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = match self.head {
            Some(h) => (h, self.node(h).prev),
            None => (0, 0),
        };
        Iter { list: self, front, back, remaining: self.len }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

/// Borrowing iterator: head to tail, or tail to head with `.rev()`.
/// Visits each element exactly once.
pub struct Iter<'a, T> {
    list: &'a CircularList<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 { return None; }
        let list: &'a CircularList<T> = self.list;
        let n = list.node(self.front);
        self.front = n.next;
        self.remaining -= 1;
        Some(&n.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 { return None; }
        let list: &'a CircularList<T> = self.list;
        let n = list.node(self.back);
        self.back = n.prev;
        self.remaining -= 1;
        Some(&n.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
