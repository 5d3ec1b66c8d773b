// src/value.rs

//! Typed parsing of textual values.
//!
//! Scripts pass values around as text: command-line options, config
//! entries, prompts. [`Value::parse`] recovers a typed value from such
//! text by trying, in order: bool, integer, float, a parenthesized
//! tuple over the same forms, and finally plain string. Parsing is
//! total; the fallback is always the input itself as a string. The
//! grammar is deliberately restricted, there is no expression
//! evaluation of any kind.

use std::fmt;

/// A typed scripting value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Tuple(Vec<Value>),
    Str(String),
}

impl Value {
    /// Parse `s` into the most specific form it matches.
    ///
    /// Surrounding whitespace is ignored. "true"/"false" are accepted
    /// in any case, so config spellings like `True` work too.
    pub fn parse(s: &str) -> Value {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Value::Float(f);
        }
        if let Some(items) = parse_tuple(trimmed) {
            return Value::Tuple(items);
        }
        Value::Str(trimmed.to_string())
    }
}

/// Parse `(a, b, ...)` with nesting; `None` when the text is not a
/// well-formed tuple literal.
fn parse_tuple(s: &str) -> Option<Vec<Value>> {
    let inner = s.strip_prefix('(')?.strip_suffix(')')?;

    let mut segments: Vec<&str> = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                segments.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }

    let last = inner[start..].trim();
    if !last.is_empty() {
        segments.push(last);
    } else if segments.is_empty() {
        // "()" is the empty tuple; "(1,)" just has a trailing comma
        return Some(Vec::new());
    }
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments.into_iter().map(Value::parse).collect())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => {
                if x.is_finite() && x.fract() == 0.0 {
                    // keep a decimal point so the text re-parses as a float
                    write!(f, "{x:.1}")
                } else {
                    write!(f, "{x}")
                }
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_parse_in_priority_order() {
        assert_eq!(Value::parse("true"), Value::Bool(true));
        assert_eq!(Value::parse("False"), Value::Bool(false));
        assert_eq!(Value::parse("3"), Value::Int(3));
        assert_eq!(Value::parse("-17"), Value::Int(-17));
        assert_eq!(Value::parse("0.3"), Value::Float(0.3));
        assert_eq!(Value::parse("1e-3"), Value::Float(0.001));
        assert_eq!(Value::parse("some string"), Value::Str("some string".into()));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(Value::parse("  42 "), Value::Int(42));
    }

    #[test]
    fn tuples_parse_with_nesting() {
        assert_eq!(
            Value::parse("(1, 8)"),
            Value::Tuple(vec![Value::Int(1), Value::Int(8)])
        );
        assert_eq!(
            Value::parse("(1, (2.5, x))"),
            Value::Tuple(vec![
                Value::Int(1),
                Value::Tuple(vec![Value::Float(2.5), Value::Str("x".into())]),
            ])
        );
        assert_eq!(Value::parse("()"), Value::Tuple(vec![]));
        assert_eq!(Value::parse("(1,)"), Value::Tuple(vec![Value::Int(1)]));
    }

    #[test]
    fn malformed_tuples_fall_back_to_strings() {
        assert_eq!(Value::parse("(1, 2"), Value::Str("(1, 2".into()));
        assert_eq!(Value::parse("(1,,2)"), Value::Str("(1,,2)".into()));
        assert_eq!(Value::parse("(1)(2)"), Value::Str("(1)(2)".into()));
    }

    #[test]
    fn display_round_trips() {
        for text in ["true", "3", "0.5", "(1, (2, 3))", "plain"] {
            let value = Value::parse(text);
            assert_eq!(Value::parse(&value.to_string()), value);
        }
        // whole floats keep their floatness through display
        let v = Value::Float(2.0);
        assert_eq!(Value::parse(&v.to_string()), v);
    }
}
