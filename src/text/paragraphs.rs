// src/text/paragraphs.rs

//! Paragraph-oriented text reflowing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Group `lines` into paragraphs separated by blank lines.
///
/// Each returned paragraph is the run of non-blank lines joined with
/// `\n`; the blank separator lines themselves are dropped.
pub fn paragraphs<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n"));
    }
    out
}

/// Greedy word wrap of one paragraph to at most `width` columns.
///
/// Words longer than `width` get a line of their own; existing line
/// breaks inside the paragraph are treated as ordinary spaces.
pub fn wrap_paragraph(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Rewrap `infile` paragraph by paragraph to `width` columns and write
/// the result to `outfile`. Paragraphs stay separated by one blank line.
pub fn reflow_file(infile: &Path, outfile: &Path, width: usize) -> Result<()> {
    let text =
        fs::read_to_string(infile).with_context(|| format!("reading {:?}", infile))?;
    let lines: Vec<&str> = text.lines().collect();

    let mut out = String::new();
    for paragraph in paragraphs(&lines) {
        for line in wrap_paragraph(&paragraph, width) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    fs::write(outfile, out).with_context(|| format!("writing {:?}", outfile))
}

/// Collapse each paragraph of `infile` to a single line in `outfile`.
pub fn oneline_file(infile: &Path, outfile: &Path) -> Result<()> {
    let text =
        fs::read_to_string(infile).with_context(|| format!("reading {:?}", infile))?;
    let lines: Vec<&str> = text.lines().collect();

    let mut out = String::new();
    for paragraph in paragraphs(&lines) {
        let joined = paragraph.split_whitespace().collect::<Vec<_>>().join(" ");
        out.push_str(&joined);
        out.push_str("\n\n");
    }
    fs::write(outfile, out).with_context(|| format!("writing {:?}", outfile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_separate_paragraphs() {
        let lines = ["one", "two", "", "  ", "three"];
        assert_eq!(paragraphs(&lines), vec!["one\ntwo", "three"]);
    }

    #[test]
    fn leading_and_trailing_blanks_produce_no_empty_paragraphs() {
        let lines = ["", "only", ""];
        assert_eq!(paragraphs(&lines), vec!["only"]);
        assert!(paragraphs(&[""; 3]).is_empty());
    }

    #[test]
    fn wrap_respects_the_width() {
        let wrapped = wrap_paragraph("aa bb cc dd", 5);
        assert_eq!(wrapped, vec!["aa bb", "cc dd"]);
        assert!(wrapped.iter().all(|line| line.len() <= 5));
    }

    #[test]
    fn oversized_words_get_their_own_line() {
        let wrapped = wrap_paragraph("tiny enormousword tiny", 6);
        assert_eq!(wrapped, vec!["tiny", "enormousword", "tiny"]);
    }

    #[test]
    fn reflow_file_rewraps_paragraphs() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("in.txt");
        let outfile = dir.path().join("out.txt");
        fs::write(&infile, "alpha beta\ngamma\n\ndelta epsilon\n").unwrap();

        reflow_file(&infile, &outfile, 11).unwrap();
        let result = fs::read_to_string(&outfile).unwrap();
        assert_eq!(result, "alpha beta\ngamma\n\ndelta\nepsilon\n\n");
    }

    #[test]
    fn oneline_file_joins_each_paragraph() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("in.txt");
        let outfile = dir.path().join("out.txt");
        fs::write(&infile, "alpha\nbeta\n\ngamma\n").unwrap();

        oneline_file(&infile, &outfile).unwrap();
        let result = fs::read_to_string(&outfile).unwrap();
        assert_eq!(result, "alpha beta\n\ngamma\n\n");
    }
}
