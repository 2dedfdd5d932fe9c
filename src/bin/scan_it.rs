//! Prints how many times a regex matches a string, or `none`.
//!
//! Usage: `scan_it PATTERN TEXT`. Arguments are taken verbatim, `--` included.

use anyhow::{Context, Result};

use checkmate::params::lossy_args;
use checkmate::scan::scan_report;

fn main() -> Result<()> {
    let params = lossy_args(std::env::args_os().skip(1));
    let line = scan_report(&params).context("invalid pattern")?;
    println!("{line}");
    Ok(())
}
