//! Normalization and whitespace tokenization
//!
//! Word characters are the ASCII set `[A-Za-z0-9_]`. Every other
//! non-whitespace character, including non-ASCII letters, becomes a space
//! before splitting, so `"naïve"` yields the tokens `"na"` and `"ve"`.

use crate::types::MIN_TOKEN_LENGTH;

/// Lowercasing, punctuation-stripping tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Tokens with fewer characters than this are dropped
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: MIN_TOKEN_LENGTH,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_token_length
    }

    /// Lowercase `text` and replace each non-word, non-whitespace character
    /// with a single space.
    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| {
                if Self::is_word_char(c) || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    /// Split normalized text on whitespace runs and drop short tokens.
    pub fn split<'a>(&self, normalized: &'a str) -> Vec<&'a str> {
        normalized
            .split_whitespace()
            .filter(|word| word.chars().count() >= self.min_token_length)
            .collect()
    }

    /// Normalize and split in one step.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);
        self.split(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Check if a character counts as part of a word
    pub fn is_word_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Hello, WORLD! hello world.");

        assert_eq!(tokens, vec!["hello", "world", "hello", "world"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("a an the is"), vec!["the"]);
    }

    #[test]
    fn test_punctuation_splits_words() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("don't stop-the_music"),
            vec!["don", "stop", "the_music"]
        );
    }

    #[test]
    fn test_digits_and_underscore_are_word_chars() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("abc123 __x 42"), vec!["abc123", "__x"]);
    }

    #[test]
    fn test_non_ascii_letters_replaced() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.normalize("Café"), "caf ");
        assert_eq!(tokenizer.tokenize("naïve résumé"), vec!["sum"]);
    }

    #[test]
    fn test_whitespace_runs() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("  lorem\t\tipsum \n dolor  "),
            vec!["lorem", "ipsum", "dolor"]
        );
    }

    #[test]
    fn test_custom_min_length() {
        let tokenizer = Tokenizer::new().with_min_length(1);
        assert_eq!(tokenizer.tokenize("a bc"), vec!["a", "bc"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("!!! ?? ..").is_empty());
    }
}
