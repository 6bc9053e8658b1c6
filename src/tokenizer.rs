//! Splits one line of input into argument tokens.
//!
//! Tokens are borrowed from the input line and share its lifetime. There is
//! no quoting, escaping, or expansion; a run of delimiters is a single
//! separator.

/// Delimiter set: space, tab, carriage return, newline, bell.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Splits `line` into tokens. Token 0 is the command name; an empty or
/// all-delimiter line yields an empty vector.
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(&DELIMITERS[..])
        .filter(|token| !token.is_empty())
        .collect()
}
