// src/text/regex_debug.rs

//! Regex debugging: show where a pattern matches and what the capture
//! groups grabbed.

use regex::Regex;

use crate::errors::Result;

/// Describe how `pattern` matches `text`.
///
/// The first match is bracketed in place and each capture group is
/// listed on its own line; a failed match says so. Invalid patterns
/// surface the regex error.
pub fn explain_match(pattern: &str, text: &str) -> Result<String> {
    let re = Regex::new(pattern)?;
    let mut report = format!("does \"{pattern}\" match \"{text}\"?\n");
    match re.captures(text) {
        None => report.push_str("no match"),
        Some(caps) => {
            if let Some(m) = caps.get(0) {
                report.push_str(&format!(
                    "{}[{}]{}",
                    &text[..m.start()],
                    m.as_str(),
                    &text[m.end()..]
                ));
                for (i, group) in caps.iter().enumerate().skip(1) {
                    let rendered = group.map(|g| g.as_str()).unwrap_or("<unmatched>");
                    report.push_str(&format!("\ngroup {i}: [{rendered}]"));
                }
            }
        }
    }
    Ok(report)
}
