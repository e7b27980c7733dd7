//! Translation of command-line tokens into calculator key presses

use cardinal::prelude::Key;

use crate::error::{CliError, CliResult};

/// Tokens that clear the session
const CLEAR_TOKENS: [&str; 4] = ["C", "c", "AC", "clear"];

/// ASCII spellings of key-face symbols
const ALIASES: [(&str, &str); 10] = [
    ("*", "×"),
    ("/", "÷"),
    ("-", "−"),
    ("^", "xʸ"),
    ("sqrt", "√"),
    ("cbrt", "∛"),
    ("pi", "π"),
    ("neg", "±"),
    ("sq", "x²"),
    ("inv", "x⁻¹"),
];

/// Resolves an ASCII alias to its key-face symbol, or returns the token as is
#[must_use]
pub fn resolve_alias(token: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map_or(token, |(_, symbol)| *symbol)
}

/// Parses a single token into the keys it presses.
///
/// Numeric tokens type one digit key per character. A token that starts with a
/// digit but is not purely numeric, or that has more than one `.`, is rejected.
pub fn parse_token(token: &str) -> CliResult<Vec<Key>> {
    if CLEAR_TOKENS.contains(&token) {
        return Ok(vec![Key::Clear]);
    }

    if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        if token.matches('.').count() > 1 {
            return Err(CliError::invalid_key(
                token,
                "numbers may contain at most one '.'",
            ));
        }
        return Ok(token.chars().map(Key::Digit).collect());
    }

    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(CliError::invalid_key(
            token,
            "numbers may only contain digits and '.'",
        ));
    }

    Ok(vec![Key::Operation(resolve_alias(token).to_string())])
}

/// Splits a line on whitespace and parses every token
pub fn parse_line(line: &str) -> CliResult<Vec<Key>> {
    let mut keys = Vec::new();
    for token in line.split_whitespace() {
        keys.extend(parse_token(token)?);
    }
    Ok(keys)
}
