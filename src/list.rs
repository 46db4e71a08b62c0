// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A singly linked list whose nodes each own the remainder of the chain.

use std::fmt;
use std::iter::FusedIterator;

/// A node of a [`LinkedList`]. The `next` link owns the rest of the chain, and
/// is [`None`] at the tail.
struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// A singly linked list built by prepending.
///
/// Each node exclusively owns its successor, so the chain is always acyclic
/// and finite. Dropping the list releases all of its nodes iteratively, which
/// keeps the stack depth constant regardless of the list length.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of nodes in this list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether this list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the value at the head of this list.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Inserts a new node holding `value` in front of the current head.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Detaches the head node and returns its value.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Returns an iterator over the values, from head to tail.
    ///
    /// ```
    /// # use listbench::list::LinkedList;
    /// let list = [1, 2, 3].into_iter().collect::<LinkedList<i64>>();
    /// let values = list.iter().copied().collect::<Vec<_>>();
    /// assert_eq!(values, [3, 2, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Combines the values of this list from head to tail, starting from
    /// `init` and applying `f(accumulator, value)` to each value in turn.
    ///
    /// ```
    /// # use listbench::list::LinkedList;
    /// let list = [1, 2, 3, 4].into_iter().collect::<LinkedList<i64>>();
    /// let digits = list.fold(0, |acc, x| acc * 10 + x);
    /// assert_eq!(digits, 4321);
    /// ```
    pub fn fold<Acc, F>(&self, init: Acc, mut f: F) -> Acc
    where
        F: FnMut(Acc, &T) -> Acc,
    {
        let mut accumulator = init;
        let mut position = self.head.as_deref();
        while let Some(node) = position {
            accumulator = f(accumulator, &node.value);
            position = node.next.as_deref();
        }
        accumulator
    }
}

impl LinkedList<i64> {
    /// Builds the list `0, 1, ..., n` (from head to tail) by prepending the
    /// values `n, n - 1, ..., 0` in that order. The list has `n + 1` nodes, or
    /// is empty if `n` is negative.
    ///
    /// ```
    /// # use listbench::list::LinkedList;
    /// let list = LinkedList::generate(5);
    /// assert_eq!(list.len(), 6);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn generate(n: i64) -> Self {
        let mut list = Self::new();
        let mut value = n;
        while value >= 0 {
            list.push_front(value);
            value -= 1;
        }
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink each node before it goes out of scope, so that dropping a node
        // never recurses into its successor.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

/// Collects values by prepending each of them, so the last value yielded by
/// the iterator ends up at the head.
impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_front(value);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`LinkedList`], from head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
