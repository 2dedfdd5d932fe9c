//! Argument handling for the `aff_rev_params` and `scan_it` tools.

use std::ffi::OsString;

use crate::constants::NONE_TEXT;

/// Command-line arguments as plain data. Nothing is treated as a flag, `--`
/// included, and non-Unicode arguments are converted lossily.
pub fn lossy_args(args: impl IntoIterator<Item = OsString>) -> Vec<String> {
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Arguments in reverse order, or a single `none` line when there are none.
pub fn reverse_params(params: &[String]) -> Vec<String> {
    if params.is_empty() {
        return vec![NONE_TEXT.to_string()];
    }
    params.iter().rev().cloned().collect()
}
