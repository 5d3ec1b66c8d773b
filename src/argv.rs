// src/argv.rs

//! Scraping option values out of raw argument lists.
//!
//! For the common script case where full argument parsing is overkill:
//! look up `--opt value` pairs in a slice the caller passes explicitly.
//! There is no ambient default argument list; callers hand in
//! `std::env::args().collect::<Vec<_>>()` (or any other slice)
//! themselves.

use crate::errors::{ErrandError, Result};
use crate::value::Value;

/// Return the argument following `option` in `args`, if present.
///
/// `Ok(None)` when the option does not occur at all; an error when the
/// option is the final argument and its value is missing.
pub fn option_value<'a>(args: &'a [String], option: &str) -> Result<Option<&'a str>> {
    match args.iter().position(|arg| arg == option) {
        None => Ok(None),
        Some(index) => match args.get(index + 1) {
            Some(value) => Ok(Some(value.as_str())),
            None => Err(ErrandError::MissingOptionValue(option.to_string())),
        },
    }
}

/// Like [`option_value`], with the value run through [`Value::parse`].
pub fn option_value_parsed(args: &[String], option: &str) -> Result<Option<Value>> {
    Ok(option_value(args, option)?.map(Value::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn returns_the_following_argument() {
        let argv = args(&["prog", "-p", "plot.png", "--level", "3"]);
        assert_eq!(option_value(&argv, "-p").unwrap(), Some("plot.png"));
        assert_eq!(option_value(&argv, "--level").unwrap(), Some("3"));
    }

    #[test]
    fn absent_option_is_none() {
        let argv = args(&["prog", "-p", "plot.png"]);
        assert_eq!(option_value(&argv, "--missing").unwrap(), None);
    }

    #[test]
    fn trailing_option_without_value_errors() {
        let argv = args(&["prog", "-p"]);
        let err = option_value(&argv, "-p").unwrap_err();
        assert!(matches!(err, ErrandError::MissingOptionValue(opt) if opt == "-p"));
    }

    #[test]
    fn parsed_variant_types_the_value() {
        let argv = args(&["prog", "--grid", "(10, 20)"]);
        assert_eq!(
            option_value_parsed(&argv, "--grid").unwrap(),
            Some(Value::Tuple(vec![Value::Int(10), Value::Int(20)]))
        );
    }
}
