//! Comparison normalization

/// Lowercase `s` and drop every underscore and whitespace character.
///
/// Only used right before Jaro-Winkler and the containment check; tokenization
/// works on the raw string so camel-case boundaries survive.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("StringBuilder"), "stringbuilder");
    }

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize("max_line length"), "maxlinelength");
        assert_eq!(normalize(" \t_Foo_\n"), "foo");
    }

    #[test]
    fn test_normalize_keeps_digits_and_dots() {
        assert_eq!(normalize("System.Int32"), "system.int32");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("___"), "");
    }
}
