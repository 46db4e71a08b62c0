// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The benchmarked workloads.
//!
//! Accumulators go through [`black_box()`] on every update, so that the
//! optimizer can neither vectorize the loops away nor replace them by a closed
//! form.

use crate::list::LinkedList;
use std::hint::black_box;

/// Sums the integers `0..=bound` with a plain accumulating loop. The list
/// structure isn't involved at all.
pub fn sum_tco(bound: i64) -> i64 {
    let mut result = 0;
    let mut i = 0;
    while i <= bound {
        result = black_box(result + i);
        i += 1;
    }
    result
}

/// Sums the values of a list with a hand-written traversal loop.
pub fn sum_list(list: &LinkedList<i64>) -> i64 {
    let mut accumulator = 0;
    for &value in black_box(list) {
        accumulator = black_box(accumulator + value);
    }
    accumulator
}

/// Builds a new list with the values of `list` in reverse order. The input is
/// left untouched.
pub fn reverse_list(list: &LinkedList<i64>) -> LinkedList<i64> {
    list.iter().copied().collect()
}

/// Sums the values of a list via the generic [`LinkedList::fold()`].
pub fn sum_list_left_fold(list: &LinkedList<i64>) -> i64 {
    black_box(list).fold(0, |a, &b| a + b)
}
