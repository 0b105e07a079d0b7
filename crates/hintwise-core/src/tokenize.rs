//! Identifier word splitting

/// Split an identifier into lowercase word tokens.
///
/// A boundary falls before every upper-case letter and at every underscore,
/// whitespace character, or digit. Digits act as separators and never appear
/// in a token. Empty tokens are dropped.
///
/// Examples:
///   "getUserName" -> ["get", "user", "name"]
///   "MAX_VALUE"   -> ["m", "a", "x", "v", "a", "l", "u", "e"]
///   "utf8Decoder" -> ["utf", "decoder"]
pub fn tokenize(s: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in s.chars() {
        if ch == '_' || ch.is_whitespace() || ch.is_numeric() {
            flush(&mut tokens, &mut current);
            continue;
        }
        if ch.is_uppercase() {
            flush(&mut tokens, &mut current);
        }
        current.extend(ch.to_lowercase());
    }
    flush(&mut tokens, &mut current);

    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
