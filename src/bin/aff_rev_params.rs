//! Prints its arguments in reverse order, one per line, or `none`.
//!
//! Every argument is data, so there is no `--help` and `--` is printed like
//! anything else.

use checkmate::params::{lossy_args, reverse_params};

fn main() {
    let params = lossy_args(std::env::args_os().skip(1));
    for line in reverse_params(&params) {
        println!("{line}");
    }
}
