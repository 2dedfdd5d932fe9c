//! Regex match counting for the `scan_it` tool.

use regex::Regex;

use crate::constants::NONE_TEXT;

/// Number of non-overlapping matches of `pattern` in `text`.
pub fn count_matches(pattern: &str, text: &str) -> Result<usize, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(re.find_iter(text).count())
}

/// The line `scan_it` prints: the match count, or `none` when the argument
/// count is not exactly two or nothing matched.
pub fn scan_report(params: &[String]) -> Result<String, regex::Error> {
    let [pattern, text] = params else {
        return Ok(NONE_TEXT.to_string());
    };
    match count_matches(pattern, text)? {
        0 => Ok(NONE_TEXT.to_string()),
        n => Ok(n.to_string()),
    }
}
