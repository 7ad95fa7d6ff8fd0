//! Forward index: per-document word-id sequences
//!
//! Token order is preserved and duplicates are retained; this is the
//! source of truth the inverted index is derived from.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PROGRESS_INTERVAL;
use crate::document::Document;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::persistence::{self, ReadOutcome};
use crate::types::{DocumentId, WordId};

/// Mapping from doc_id to its ordered word-id sequence
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForwardIndex {
    entries: BTreeMap<DocumentId, Vec<WordId>>,
}

impl ForwardIndex {
    /// Build a forward index over a whole document collection
    pub fn from_documents(lexicon: &Lexicon, documents: &[Document]) -> Self {
        let mut builder = ForwardIndexBuilder::new(lexicon);
        for (processed, doc) in documents.iter().enumerate() {
            builder.add_document(doc.id, &doc.tokens);
            if (processed + 1) % PROGRESS_INTERVAL == 0 {
                info!("Processed {} documents...", processed + 1);
            }
        }
        builder.finish()
    }

    /// Insert a document's word-id sequence, overwriting any previous
    /// entry for the same doc_id
    pub fn insert(&mut self, doc_id: DocumentId, word_ids: Vec<WordId>) {
        self.entries.insert(doc_id, word_ids);
    }

    /// Word ids for a document, empty if the document is unknown
    pub fn word_ids(&self, doc_id: DocumentId) -> &[WordId] {
        self.entries
            .get(&doc_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, doc_id: DocumentId) -> bool {
        self.entries.contains_key(&doc_id)
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (doc_id, word_ids) entries in doc_id order
    pub fn iter(&self) -> impl Iterator<Item = (DocumentId, &[WordId])> {
        self.entries
            .iter()
            .map(|(doc_id, word_ids)| (*doc_id, word_ids.as_slice()))
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

/// Translates token sequences to word-id sequences via a lexicon
pub struct ForwardIndexBuilder<'a> {
    lexicon: &'a Lexicon,
    index: ForwardIndex,
}

impl<'a> ForwardIndexBuilder<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            index: ForwardIndex::default(),
        }
    }

    /// Translate and record one document
    ///
    /// Tokens absent from the lexicon are skipped, not recorded.
    pub fn add_document(&mut self, doc_id: DocumentId, tokens: &[String]) {
        let word_ids = tokens
            .iter()
            .filter_map(|token| self.lexicon.word_id(token))
            .collect();
        self.index.insert(doc_id, word_ids);
    }

    pub fn finish(self) -> ForwardIndex {
        self.index
    }
}
