use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, StaveError};

/// How often build loops report progress, in documents
pub(crate) const PROGRESS_INTERVAL: usize = 10_000;

/// Index build configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Directory receiving every index artifact
    pub output_dir: PathBuf,
    /// Word ids per barrel; fixes the on-disk addressing scheme and must
    /// not change between a build and later reads of the same directory
    pub barrel_size: u32,
}

impl IndexConfig {
    /// Default number of word ids per barrel
    pub const DEFAULT_BARREL_SIZE: u32 = 2500;

    /// Create a configuration rooted at `output_dir`
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            barrel_size: Self::DEFAULT_BARREL_SIZE,
        }
    }

    /// Set the barrel size
    pub fn with_barrel_size(mut self, barrel_size: u32) -> Self {
        self.barrel_size = barrel_size;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.barrel_size == 0 {
            return Err(StaveError::Config(
                "barrel size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the serialized lexicon
    pub fn lexicon_path(&self) -> PathBuf {
        self.output_dir.join("lexicon.bin")
    }

    /// Path of the serialized forward index
    pub fn forward_index_path(&self) -> PathBuf {
        self.output_dir.join("forward_index.bin")
    }

    /// Directory holding the barrel files
    pub fn barrels_dir(&self) -> PathBuf {
        self.output_dir.join("barrels")
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new("./index")
    }
}

/// Tokenizer configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub min_token_length: usize,
    pub max_token_length: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_stopwords: false,
            // drops single characters
            min_token_length: 2,
            max_token_length: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = IndexConfig::default();
        assert_eq!(config.barrel_size, 2500);
        assert!(config.validate().is_ok());

        let tokenizer_config = TokenizerConfig::default();
        assert!(tokenizer_config.lowercase);
        assert!(!tokenizer_config.remove_stopwords);
        assert_eq!(tokenizer_config.min_token_length, 2);
    }

    #[test]
    fn test_config_builder_and_paths() {
        let config = IndexConfig::new("./out").with_barrel_size(100);

        assert_eq!(config.barrel_size, 100);
        assert_eq!(config.lexicon_path(), PathBuf::from("./out/lexicon.bin"));
        assert_eq!(
            config.forward_index_path(),
            PathBuf::from("./out/forward_index.bin")
        );
        assert_eq!(config.barrels_dir(), PathBuf::from("./out/barrels"));
    }

    #[test]
    fn test_zero_barrel_size_rejected() {
        let config = IndexConfig::new("./out").with_barrel_size(0);
        assert!(config.validate().is_err());
    }
}
