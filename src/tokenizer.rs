use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::config::TokenizerConfig;

/// Common English stop words (small set for now)
const STOPWORDS: [&str; 24] = [
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
    "it", "its", "of", "on", "that", "the", "to", "was", "will", "with",
];

/// Text tokenizer with normalization and optional stopword removal
pub struct Tokenizer {
    config: TokenizerConfig,
    stopwords: HashSet<&'static str>,
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Self {
        let stopwords = if config.remove_stopwords {
            STOPWORDS.iter().copied().collect()
        } else {
            HashSet::new()
        };

        Self {
            config: config.clone(),
            stopwords,
        }
    }

    /// Tokenize text into a vector of terms, preserving source order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|word| {
                if self.config.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .filter(|token| {
                token.len() >= self.config.min_token_length
                    && token.len() <= self.config.max_token_length
                    && !self.stopwords.contains(token.as_str())
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("Kohli scored 100 runs!");

        assert_eq!(tokens, vec!["kohli", "scored", "100", "runs"]);
    }

    #[test]
    fn test_single_characters_dropped() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("a winning six");

        assert_eq!(tokens, vec!["winning", "six"]);
    }

    #[test]
    fn test_stopwords_kept_by_default() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("caught at the boundary");

        assert!(tokens.contains(&"at".to_string()));
        assert!(tokens.contains(&"the".to_string()));
    }

    #[test]
    fn test_stopword_removal() {
        let config = TokenizerConfig {
            remove_stopwords: true,
            ..Default::default()
        };
        let tokenizer = Tokenizer::new(&config);
        let tokens = tokenizer.tokenize("caught at the boundary");

        assert_eq!(tokens, vec!["caught", "boundary"]);
    }

    #[test]
    fn test_lowercase_disabled() {
        let config = TokenizerConfig {
            lowercase: false,
            ..Default::default()
        };
        let tokenizer = Tokenizer::new(&config);
        let tokens = tokenizer.tokenize("Mumbai Indians");

        assert_eq!(tokens, vec!["Mumbai", "Indians"]);
    }

    #[test]
    fn test_max_length_filter() {
        let config = TokenizerConfig {
            max_token_length: 5,
            ..Default::default()
        };
        let tokenizer = Tokenizer::new(&config);
        let tokens = tokenizer.tokenize("short boundary");

        assert_eq!(tokens, vec!["short"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("six four six");

        assert_eq!(tokens, vec!["six", "four", "six"]);
    }
}
