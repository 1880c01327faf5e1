/// Split a passage or transcript into raw tokens on runs of whitespace.
/// Leading, trailing, and repeated whitespace produce no empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize("the cat sat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  the \t cat\n sat  "), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_tokenize_empty_string() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_whitespace_only() {
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_punctuation_attached() {
        assert_eq!(tokenize("The cat, sat."), vec!["The", "cat,", "sat."]);
    }
}
