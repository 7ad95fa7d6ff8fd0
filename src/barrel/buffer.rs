//! In-memory posting buffer, grouped by destination barrel

use std::collections::BTreeMap;

use crate::types::{BarrelId, DocumentId, WordId};

/// Postings accumulated since the last flush.
///
/// Entries are grouped by barrel so a flush can merge and rewrite one
/// barrel file at a time. Duplicates are kept as-is here; deduplication
/// happens when postings are merged into a barrel's bitmaps.
#[derive(Debug, Default)]
pub struct BarrelBuffer {
    barrels: BTreeMap<BarrelId, BTreeMap<WordId, Vec<DocumentId>>>,
    postings: u64,
}

impl BarrelBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one (word, document) posting
    pub fn add(&mut self, barrel_id: BarrelId, word_id: WordId, doc_id: DocumentId) {
        self.barrels
            .entry(barrel_id)
            .or_default()
            .entry(word_id)
            .or_default()
            .push(doc_id);
        self.postings += 1;
    }

    /// Barrels with pending postings, in ascending order
    pub fn barrel_ids(&self) -> Vec<BarrelId> {
        self.barrels.keys().copied().collect()
    }

    /// Pending postings for one barrel
    pub fn pending(&self, barrel_id: BarrelId) -> Option<&BTreeMap<WordId, Vec<DocumentId>>> {
        self.barrels.get(&barrel_id)
    }

    /// Drop one barrel's pending postings, returning how many were held.
    ///
    /// Called only after that barrel has been durably written.
    pub fn clear_barrel(&mut self, barrel_id: BarrelId) -> u64 {
        let removed = self
            .barrels
            .remove(&barrel_id)
            .map(|words| words.values().map(|docs| docs.len() as u64).sum())
            .unwrap_or(0);
        self.postings -= removed;
        removed
    }

    pub fn posting_count(&self) -> u64 {
        self.postings
    }

    pub fn barrel_count(&self) -> usize {
        self.barrels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.barrels.is_empty()
    }
}
