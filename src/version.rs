// src/version.rs
//! Maven-style version precedence.
//!
//! The resolver picks the highest published release with this ordering, the
//! same precedence Maven applies when sorting artifact versions: numeric
//! segments compare numerically, qualifiers rank below releases
//! (alpha < beta < milestone < rc < snapshot < release < sp).

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number(u64),
    Qualifier(String),
}

/// Compares two version strings by Maven precedence rules.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    let ta = tokenize(a);
    let tb = tokenize(b);
    let len = ta.len().max(tb.len());
    for i in 0..len {
        let ordering = compare_tokens(ta.get(i), tb.get(i));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Returns the highest version of the slice, or `None` when empty.
#[must_use]
pub fn highest<'a>(versions: &[&'a str]) -> Option<&'a str> {
    versions.iter().copied().max_by(|a, b| compare(a, b))
}

/// Sorts versions ascending by precedence.
pub fn sort(versions: &mut [String]) {
    versions.sort_by(|a, b| compare(a, b));
}

fn tokenize(version: &str) -> Vec<Token> {
    let lower = version.to_ascii_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_is_digit = false;

    let flush = |buf: &mut String, is_digit: bool, tokens: &mut Vec<Token>| {
        if buf.is_empty() {
            return;
        }
        if is_digit {
            match buf.parse::<u64>() {
                Ok(n) => tokens.push(Token::Number(n)),
                Err(_) => tokens.push(Token::Qualifier(std::mem::take(buf))),
            }
        } else {
            tokens.push(Token::Qualifier(canonical_qualifier(buf)));
        }
        buf.clear();
    };

    for c in lower.chars() {
        if c == '.' || c == '-' {
            flush(&mut current, current_is_digit, &mut tokens);
            continue;
        }
        let is_digit = c.is_ascii_digit();
        if !current.is_empty() && is_digit != current_is_digit {
            // transition between digits and letters separates tokens: "1a" -> 1, "a"
            flush(&mut current, current_is_digit, &mut tokens);
        }
        current_is_digit = is_digit;
        current.push(c);
    }
    flush(&mut current, current_is_digit, &mut tokens);
    tokens
}

fn canonical_qualifier(q: &str) -> String {
    match q {
        "ga" | "final" | "release" => String::new(),
        "cr" => "rc".to_string(),
        "a" => "alpha".to_string(),
        "b" => "beta".to_string(),
        "m" => "milestone".to_string(),
        other => other.to_string(),
    }
}

// Rank of a qualifier relative to a plain release segment.
fn qualifier_rank(q: &str) -> u8 {
    match q {
        "alpha" => 1,
        "beta" => 2,
        "milestone" => 3,
        "rc" => 4,
        "snapshot" => 5,
        "" => 6,
        "sp" => 7,
        _ => 8,
    }
}

fn compare_tokens(a: Option<&Token>, b: Option<&Token>) -> Ordering {
    match (a, b) {
        (Some(Token::Number(x)), Some(Token::Number(y))) => x.cmp(y),
        // A numeric segment always outranks a qualifier: 1.1 > 1-rc
        (Some(Token::Number(_)), Some(Token::Qualifier(_))) => Ordering::Greater,
        (Some(Token::Qualifier(_)), Some(Token::Number(_))) => Ordering::Less,
        (Some(Token::Qualifier(x)), Some(Token::Qualifier(y))) => {
            match qualifier_rank(x).cmp(&qualifier_rank(y)) {
                Ordering::Equal => x.cmp(y),
                other => other,
            }
        }
        // Exhausted side pads with a release segment: "1.0" vs "1.0.1",
        // "1.0-alpha" vs "1.0".
        (Some(Token::Number(x)), None) => x.cmp(&0),
        (None, Some(Token::Number(y))) => 0.cmp(y),
        (Some(Token::Qualifier(x)), None) => qualifier_rank(x).cmp(&qualifier_rank("")),
        (None, Some(Token::Qualifier(y))) => qualifier_rank("").cmp(&qualifier_rank(y)),
        (None, None) => Ordering::Equal,
    }
}
