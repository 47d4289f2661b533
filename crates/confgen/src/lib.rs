//! Fixture generator CLI.
//!
//! Writes one random bracket-notation document per invocation into the
//! lowest free `test_N.conf` in the target directory.
//!
//! # Example Usage
//!
//! ```bash
//! confgen 50 4                 # up to 50 nodes, depth below 4
//! confgen 50 4 --seed 7        # reproducible output
//! confgen 10 3 -d fixtures/    # write into another directory
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
