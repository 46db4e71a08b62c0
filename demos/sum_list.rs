// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Simple program that sums a linked list, once with a loop and once with a
//! left fold.

use listbench::fixtures::{sum_list, sum_list_left_fold};
use listbench::list::LinkedList;
use std::hint::black_box;

fn main() {
    let input_size = 1_000_000;

    let list = LinkedList::generate(input_size);
    let sum = sum_list(black_box(&list));
    let folded = sum_list_left_fold(black_box(&list));
    println!("sum = {sum}, folded = {folded}");
}
