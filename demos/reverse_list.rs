// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Simple program that times the reversal of a linked list a few times.

use listbench::fixtures::reverse_list;
use listbench::list::LinkedList;
use listbench::runner::measure;
use std::num::NonZeroUsize;

fn main() {
    let input_size = 1_000_000;
    let runs = NonZeroUsize::try_from(5).unwrap();

    let list = LinkedList::generate(input_size);
    let report = measure("reverseList", runs, reverse_list, &list);
    for (i, sample) in report.samples().iter().enumerate() {
        println!("run #{i}: {sample:?}");
    }
    println!("{report}");
}
