use once_cell::sync::Lazy;
use regex::Regex;

// A token is either a double-quoted run (quotes stripped, spaces kept) or a
// maximal run of non-whitespace. An unterminated quote falls through as a
// bare token, quote character included.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).unwrap());

/// Split one directive line into whitespace-separated tokens, treating a
/// double-quoted substring as a single token.
pub fn tokenize(line: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(line)
        .map(|cap| {
            cap.get(1)
                .or_else(|| cap.get(2))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        })
        .collect()
}
