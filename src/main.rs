// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs the reference benchmark suite and prints one line per benchmark.

use listbench::suite::{run_suite, SuiteConfig};
use std::io;

fn main() -> io::Result<()> {
    #[cfg(feature = "log")]
    env_logger::init();

    let stdout = io::stdout();
    run_suite(&SuiteConfig::REFERENCE, &mut stdout.lock())?;
    Ok(())
}
