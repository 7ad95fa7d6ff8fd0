//! Lexicon: the vocabulary table mapping words to dense integer ids
//!
//! Ids are assigned 0..N-1 over the lexicographically sorted distinct
//! vocabulary, so rebuilding from identical input always yields identical
//! ids.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::Result;
use crate::persistence::{self, ReadOutcome};
use crate::types::WordId;

/// Immutable word → word_id mapping for one corpus snapshot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    words: BTreeMap<String, WordId>,
}

impl Lexicon {
    /// Build a lexicon over a whole document collection
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut builder = LexiconBuilder::new();
        for doc in documents {
            builder.add_document(&doc.tokens);
        }
        builder.finish()
    }

    /// Look up the id for a word
    pub fn word_id(&self, word: &str) -> Option<WordId> {
        self.words.get(word).copied()
    }

    /// Check if a word is in the vocabulary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of words in the vocabulary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The id the next word would receive (always `len`, since ids are
    /// dense and start at 0; derived on load rather than stored)
    pub fn next_word_id(&self) -> WordId {
        WordId(self.words.len() as u32)
    }

    /// Iterate over (word, id) pairs in lexicographic word order
    pub fn iter(&self) -> impl Iterator<Item = (&str, WordId)> {
        self.words.iter().map(|(word, id)| (word.as_str(), *id))
    }

    /// Persist the mapping, atomically replacing any previous file
    pub fn save(&self, path: &Path) -> Result<()> {
        persistence::write_bincode_atomic(path, self)
    }

    /// Load a previously saved mapping
    pub fn load(path: &Path) -> ReadOutcome<Self> {
        persistence::read_bincode(path)
    }
}

/// Accumulates vocabulary across documents, then assigns ids at `finish`
///
/// A full rebuild always starts the id counter at 0; there is no
/// incremental update path.
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    vocabulary: BTreeSet<String>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a document's distinct tokens (order and frequency ignored)
    pub fn add_document(&mut self, tokens: &[String]) {
        for token in tokens {
            if !self.vocabulary.contains(token) {
                self.vocabulary.insert(token.clone());
            }
        }
    }

    /// Number of distinct words collected so far
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Assign ids 0..N-1 in sorted order and produce the lexicon
    pub fn finish(self) -> Lexicon {
        let words = self
            .vocabulary
            .into_iter()
            .enumerate()
            .map(|(id, word)| (word, WordId(id as u32)))
            .collect();
        Lexicon { words }
    }
}
